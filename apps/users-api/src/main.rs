use axum_helpers::server::{close_database, create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::sql::{connect_from_config_with_retry, run_migrations};
use migration::Migrator;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Before anything fallible, so startup errors get colored reports
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let db = connect_from_config_with_retry(config.database.clone(), None).await?;
    run_migrations::<Migrator>(&db, config.app.name).await?;

    let state = AppState { config, db };

    let api_routes = api::routes(&state);
    let router = create_router::<openapi::ApiDoc>(api_routes, &state.config.server)?;

    // /health: liveness with name/version
    // /ready: database ping
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone()));

    info!(
        environment = ?state.config.environment,
        "Starting users API with graceful shutdown (30s timeout)"
    );

    let server = state.config.server.clone();
    create_production_app(app, &server, Duration::from_secs(30), async move {
        close_database(state.db, "users").await;
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Users API shutdown complete");
    Ok(())
}
