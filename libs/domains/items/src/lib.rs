//! Items Domain
//!
//! Catalogue items: CRUD without delete, plus name and price-range search.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP layer: routing, status codes, resource documents
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← parse → merge → validate → merchant check → write
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐     ┌───────────────────┐
//! │ Repository  │     │ MerchantRepository│  ← existence checks only
//! └──────┬──────┘     └───────────────────┘
//!        │
//! ┌──────▼──────┐
//! │  Postgres   │  ← or InMemoryItemRepository in tests
//! └─────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use domain_items::{ItemService, PgItemRepository, handlers};
//! use domain_merchants::PgMerchantRepository;
//!
//! let service = ItemService::new(
//!     PgItemRepository::new(db.clone()),
//!     PgMerchantRepository::new(db),
//! );
//! let app = Router::new().nest("/v1/items", handlers::router(service));
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod query;
pub mod repository;
pub mod serializer;
pub mod service;
pub mod validation;

pub use error::{ItemError, ItemResult};
pub use handlers::ApiDoc;
pub use models::{Item, ItemChanges, ItemFilter, ItemParams, NewItem};
pub use postgres::PgItemRepository;
pub use query::{ItemQuery, NameFragment, PriceRange};
pub use repository::{InMemoryItemRepository, ItemRepository};
pub use serializer::{ItemCollectionDocument, ItemDocument, ItemResource};
pub use service::ItemService;
