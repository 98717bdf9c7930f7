//! Users Domain
//!
//! CRUD over user records with an ordered validation pipeline.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, path id and JSON decoding
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐     ┌─────────────┐
//! │   Service   │ ──► │  Validator  │  ← field rules, then name uniqueness
//! └──────┬──────┘     └──────┬──────┘
//!        │                   │
//! ┌──────▼───────────────────▼──────┐
//! │           Repository            │  ← trait + in-memory and SQL stores
//! └─────────────────────────────────┘
//! ```
//!
//! Every failure is an [`axum_helpers::AppError`]; validation violations
//! are joined into one `bad_request`, everything else passes through.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{handlers, InMemoryUserRepository, UserService};
//!
//! let service = UserService::new(InMemoryUserRepository::new());
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod sql;
pub mod validation;

pub use error::{UserResult, messages};
pub use handlers::ApiDoc;
pub use models::{DeleteResponse, User};
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
pub use sql::SqlUserRepository;
pub use validation::UserValidator;
