//! # Axum Helpers
//!
//! Shared utilities for the workspace's Axum services.
//!
//! ## Modules
//!
//! - **[`errors`]**: the uniform error envelope and `AppError`
//! - **[`extractors`]**: JSON body / query-string extractors with
//!   envelope-shaped rejections
//! - **[`server`]**: router assembly, health endpoints, graceful shutdown

pub mod errors;
pub mod extractors;
pub mod server;

pub use errors::{decorate_error, AppError, ErrorBody, ErrorResponse};
pub use extractors::{IdPath, QueryParams, ValidatedJson};
pub use server::{
    create_app, create_production_app, create_router, health_router, run_health_checks,
    shutdown_signal, HealthCheckFuture, HealthResponse,
};
