//! # Axum Helpers
//!
//! Shared plumbing for the users HTTP service.
//!
//! - **[`errors`]**: the classified error type and its JSON body
//! - **[`extractors`]**: numeric path ids and JSON bodies rejecting with [`AppError`]
//! - **[`http`]**: CORS and security header middleware
//! - **[`server`]**: router assembly, health routes, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! let config = ServerConfig::default();
//! let router = create_router::<ApiDoc>(Router::new(), &config)?;
//! create_production_app(router, &config, Duration::from_secs(30), async {}).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use errors::{AppError, AppResult, ErrorKind, ErrorResponse};
pub use extractors::{IdLabel, IdPath, JsonBody};
pub use http::{cors_layer_from_config, security_headers};
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, close_database,
    create_production_app, create_router, health_router, run_health_checks, shutdown_signal,
};
