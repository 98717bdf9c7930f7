use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use super::SqlConfig;
use crate::common::{DatabaseError, DatabaseResult, RetryConfig, retry, retry_with_backoff};

/// Connects with the default pool settings from [`SqlConfig`].
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    connect_from_config(SqlConfig::new(database_url)).await
}

pub async fn connect_from_config(config: SqlConfig) -> Result<DatabaseConnection, DbErr> {
    connect_with_options(config.into_connect_options()).await
}

async fn connect_with_options(options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(options).await?;
    info!(backend = ?db.get_database_backend(), "Connected to database");
    Ok(db)
}

/// Connects with exponential backoff. `None` uses [`RetryConfig::default`].
///
/// ```ignore
/// let config = SqlConfig::from_env()?;
/// let db = connect_from_config_with_retry(config, Some(RetryConfig::new().with_max_retries(5))).await?;
/// ```
pub async fn connect_from_config_with_retry(
    config: SqlConfig,
    retry_config: Option<RetryConfig>,
) -> DatabaseResult<DatabaseConnection> {
    let options = config.into_connect_options();
    let attempt = || connect_with_options(options.clone());

    let connected = match retry_config {
        Some(policy) => retry_with_backoff(attempt, policy).await,
        None => retry(attempt).await,
    };
    connected.map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))
}

/// Applies every pending migration of `M`.
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> DatabaseResult<()> {
    info!(app = app_name, "Running database migrations");
    M::up(db, None)
        .await
        .map_err(|e| DatabaseError::MigrationError(e.to_string()))?;
    info!(app = app_name, "Migrations completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::DatabaseBackend;

    #[tokio::test]
    async fn test_connect_in_memory_sqlite() {
        let db = connect_from_config(SqlConfig::new("sqlite::memory:").single_connection())
            .await
            .unwrap();
        assert_eq!(db.get_database_backend(), DatabaseBackend::Sqlite);
    }

    #[tokio::test]
    async fn test_connect_with_retry_gives_up_on_bad_url() {
        let policy = RetryConfig::new()
            .with_max_retries(1)
            .with_initial_delay(1)
            .without_jitter();
        let result =
            connect_from_config_with_retry(SqlConfig::new("unknown://nowhere"), Some(policy)).await;
        assert!(matches!(result, Err(DatabaseError::ConnectionFailed(_))));
    }
}
