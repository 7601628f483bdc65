//! Merchants Domain
//!
//! Merchants own items. The catalogue API only ever asks two questions of
//! this domain: does a merchant with this id exist, and (for seeding and
//! tests) please create one.
//!
//! ```rust,no_run
//! use domain_merchants::{CreateMerchant, InMemoryMerchantRepository, MerchantRepository};
//!
//! # async fn example() -> domain_merchants::MerchantResult<()> {
//! let merchants = InMemoryMerchantRepository::new();
//! let merchant = merchants.create(CreateMerchant { name: "Acme".into() }).await?;
//! assert!(merchants.exists(merchant.id).await?);
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod models;
pub mod postgres;
pub mod repository;

pub use error::{MerchantError, MerchantResult};
pub use models::{CreateMerchant, Merchant};
pub use postgres::PgMerchantRepository;
pub use repository::{InMemoryMerchantRepository, MerchantRepository};
