//! Connection management for the catalogue's PostgreSQL store.
//!
//! # Features
//!
//! - `postgres` (default): SeaORM connector, migrations runner, health probe
//! - `config`: `core_config::FromEnv` implementations for the config types
//!
//! ```ignore
//! use database::postgres::{self, PostgresConfig};
//! use migration::Migrator;
//!
//! let db = postgres::connect_from_config_with_retry(PostgresConfig::from_env()?, None).await?;
//! postgres::run_migrations::<Migrator>(&db, "engine_api").await?;
//! ```

pub mod common;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult, RetryConfig};
