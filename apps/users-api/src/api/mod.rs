use axum::{Router, routing::get};

use crate::state::AppState;

pub mod health;
pub mod users;

/// API routes without the `/api` prefix, which `create_router` adds.
///
/// Every sub-router already has its state applied.
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/users", users::router(state))
}

/// `/ready`, merged next to the stateless app router.
pub fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
