//! In-memory SQLite test infrastructure
//!
//! Each `TestDatabase` is a private in-memory database with the users
//! migrations applied, so tests never share rows.

use database::sql::{self, SqlConfig};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};

/// In-memory SQLite database, dropped with the struct.
pub struct TestDatabase {
    pub connection: DatabaseConnection,
}

impl TestDatabase {
    /// Empty `users` table.
    ///
    /// ```no_run
    /// use test_utils::TestDatabase;
    ///
    /// # async fn example() {
    /// let db = TestDatabase::new().await;
    /// let conn = db.connection();
    /// # }
    /// ```
    pub async fn new() -> Self {
        let db = Self::connect().await;
        Migrator::up(&db.connection, Some(Migrator::SCHEMA_STEPS))
            .await
            .expect("Failed to apply schema migrations");
        db
    }

    /// `users` table holding the five seed records (ids 1 to 5).
    pub async fn seeded() -> Self {
        let db = Self::connect().await;
        Migrator::up(&db.connection, None)
            .await
            .expect("Failed to apply migrations");
        db
    }

    async fn connect() -> Self {
        // One connection: every sqlite::memory: connection is a separate database.
        let config = SqlConfig::new("sqlite::memory:").single_connection();
        let connection = sql::connect_from_config(config)
            .await
            .expect("Failed to open in-memory SQLite database");

        tracing::debug!("Test database ready (in-memory SQLite)");
        Self { connection }
    }

    /// Get a cloned connection (useful for passing to repositories)
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Row count of the `users` table, bypassing any repository.
    pub async fn count_users(&self) -> i64 {
        let backend = self.connection.get_database_backend();
        let row = self
            .connection
            .query_one_raw(Statement::from_string(
                backend,
                "SELECT COUNT(*) AS n FROM users",
            ))
            .await
            .expect("Failed to count users")
            .expect("COUNT returned no row");
        row.try_get("", "n").expect("COUNT column missing")
    }

    /// Drops the `users` table so subsequent queries fail at the driver.
    pub async fn break_schema(&self) {
        self.connection
            .execute_unprepared("DROP TABLE users")
            .await
            .expect("Failed to drop users table");
    }
}
