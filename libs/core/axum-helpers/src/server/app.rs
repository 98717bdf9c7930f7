use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::{handle_timeout, method_not_allowed, not_found};
use crate::http::{cors_layer_from_config, security_headers};
use axum::error_handling::HandleErrorLayer;
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::io;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

/// Wraps the API routes with documentation and cross-cutting layers.
///
/// - `/swagger-ui` and `/redoc`, both backed by `/api-docs/openapi.json`
/// - `apis` nested under `/api`
/// - JSON fallbacks for unknown paths and unsupported methods
/// - per-request timeout answered with a JSON 500
/// - trace spans, security headers, CORS, compression
///
/// Health routes are merged by the caller.
///
/// # Errors
/// Fails when the configured CORS origins are not valid header values.
pub fn create_router<T>(apis: Router, config: &ServerConfig) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    let cors = cors_layer_from_config(config)?;

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .nest("/api", apis)
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_timeout))
                .timeout(config.request_timeout),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors)
        .layer(CompressionLayer::new());

    Ok(router)
}

/// Serves `router` until SIGINT/SIGTERM, then runs `cleanup` bounded by
/// `shutdown_timeout`.
///
/// ```ignore
/// let cleanup = async move { close_database(db, "users").await };
/// create_production_app(router, &config, Duration::from_secs(30), cleanup).await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let coordinator = ShutdownCoordinator::new();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!(address = %listener.local_addr()?, "Server listening");

    let cleanup_task = {
        let coordinator = coordinator.clone();
        tokio::spawn(async move {
            coordinator.triggered().await;

            info!(timeout = ?shutdown_timeout, "Running shutdown cleanup");
            if tokio::time::timeout(shutdown_timeout, cleanup).await.is_err() {
                tracing::warn!(timeout = ?shutdown_timeout, "Cleanup timed out");
            } else {
                info!("Cleanup finished");
            }
        })
    };

    let served = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(coordinator.clone().trigger_on_signal())
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Server stopped with an error"));

    // An error exit never saw a signal; cleanup still has to run.
    coordinator.trigger();
    if let Err(e) = cleanup_task.await {
        tracing::error!(error = %e, "Cleanup task panicked");
    }

    served
}
