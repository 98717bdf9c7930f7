//! Connection management for the relational store backing the users service.
//!
//! # Features
//!
//! - `sql` (default) - SeaORM connector for SQLite and PostgreSQL URLs
//! - `config` - `core_config::FromEnv` support for [`sql::SqlConfig`]
//!
//! # Example
//!
//! ```ignore
//! use database::sql::{self, SqlConfig};
//! use migration::Migrator;
//!
//! let db = sql::connect_from_config_with_retry(SqlConfig::new("sqlite::memory:"), None).await?;
//! sql::run_migrations::<Migrator>(&db, "users_api").await?;
//! ```

pub mod common;

#[cfg(feature = "sql")]
pub mod sql;

pub use common::{DatabaseError, DatabaseResult};
