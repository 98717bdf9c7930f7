//! SeaORM connector, migration runner and health check.
//!
//! The backend is chosen by the URL scheme: `sqlite:` or `postgres:`.

mod config;
mod connector;
mod health;

pub use config::SqlConfig;
pub use connector::{
    connect, connect_from_config, connect_from_config_with_retry, run_migrations,
};
pub use health::check_health;

pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
pub use sea_orm_migration::MigratorTrait;
