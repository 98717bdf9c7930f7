use sea_orm::DatabaseConnection;
use tracing::{error, info};

/// Closes the pool during shutdown, logging the outcome.
pub async fn close_database(db: DatabaseConnection, name: &str) {
    match db.close().await {
        Ok(_) => info!(connection = name, "Database connection closed"),
        Err(e) => error!(connection = name, "Error closing database connection: {}", e),
    }
}
