//! Shared fixtures for the domain crates' tests.
//!
//! - [`TestDatabase`]: throwaway PostgreSQL container with the workspace
//!   migrations applied (feature `postgres`, on by default; needs Docker)
//! - [`TestDataBuilder`]: deterministic names derived from the test name
//! - [`assertions`]: small assertion helpers for float and JSON comparisons
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! # async fn example() {
//! let db = TestDatabase::new().await;
//! let data = TestDataBuilder::from_test_name("creates_item");
//! let name = data.name("item", "widget");
//! # }
//! ```

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Seeded generator so reruns of a test produce the same fixtures.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// `test-<prefix>-<seed>-<suffix>`
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// A positive price in `[1.00, 100.99]` with two decimals.
    pub fn price(&self, salt: u64) -> f64 {
        let mixed = self.seed.wrapping_mul(31).wrapping_add(salt);
        let cents = 100 + mixed % 10_000;
        cents as f64 / 100.0
    }
}

pub mod assertions {
    /// Float comparison tolerant of binary rounding.
    pub fn assert_price_eq(actual: f64, expected: f64, context: &str) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "{}: expected price {}, got {}",
            context,
            expected,
            actual
        );
    }

    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }
}
