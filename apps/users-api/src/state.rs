//! Shared application state handed to the app-level routers.

use sea_orm::DatabaseConnection;

/// Cheap to clone: the connection is a shared pool handle.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub db: DatabaseConnection,
}
