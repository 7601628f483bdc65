//! # Axum Helpers
//!
//! Shared plumbing for the catalogue's HTTP services.
//!
//! - **[`errors`]**: [`AppError`] and the single [`ErrorResponse`] body shape
//! - **[`extractors`]**: [`IdPath`] and [`JsonPayload`]
//! - **[`server`]**: router assembly with OpenAPI docs, health, shutdown
//! - **[`http`]**: CORS and security header layers

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, build_router,
    create_production_app, create_router, health_router, run_health_checks, shutdown_signal,
};

pub use http::{create_cors_layer, parse_allowed_origins, security_headers};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{IdPath, JsonPayload};
