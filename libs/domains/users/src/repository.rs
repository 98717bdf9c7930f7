use async_trait::async_trait;
use axum_helpers::AppError;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserResult, messages, user_not_found};
use crate::models::User;

/// Persistence capability for users.
///
/// Implementations classify their own failures: missing rows are
/// `not_found`, store failures are `server_error`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users ordered by id; `not_found` when there are none
    async fn find_all(&self) -> UserResult<Vec<User>>;

    async fn find_by_id(&self, id: i64) -> UserResult<User>;

    /// Stores `user` under a fresh id and returns the stored record
    async fn insert(&self, user: User) -> UserResult<User>;

    /// Overwrites the record with `user.id`
    async fn update(&self, user: User) -> UserResult<User>;

    async fn delete(&self, id: i64) -> UserResult<()>;

    async fn exists_by_name_pair(&self, first_name: &str, last_name: &str) -> UserResult<bool>;
}

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, User>,
    last_id: i64,
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store; ids are assigned in order starting at 1,
    /// ignoring any id already set on `users`.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let mut table = Table::default();
        for mut user in users {
            table.last_id += 1;
            user.id = table.last_id;
            table.rows.insert(user.id, user);
        }

        Self {
            table: Arc::new(RwLock::new(table)),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> UserResult<Vec<User>> {
        let table = self.table.read().await;
        if table.rows.is_empty() {
            return Err(AppError::not_found(messages::NO_USERS_FOUND));
        }
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> UserResult<User> {
        let table = self.table.read().await;
        table.rows.get(&id).cloned().ok_or_else(user_not_found)
    }

    async fn insert(&self, mut user: User) -> UserResult<User> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        user.id = table.last_id;
        table.rows.insert(user.id, user.clone());

        tracing::info!(user_id = user.id, "Created user");
        Ok(user)
    }

    async fn update(&self, user: User) -> UserResult<User> {
        let mut table = self.table.write().await;
        let row = table.rows.get_mut(&user.id).ok_or_else(user_not_found)?;
        *row = user.clone();

        tracing::info!(user_id = user.id, "Updated user");
        Ok(user)
    }

    async fn delete(&self, id: i64) -> UserResult<()> {
        let mut table = self.table.write().await;
        table.rows.remove(&id).ok_or_else(user_not_found)?;

        tracing::info!(user_id = id, "Deleted user");
        Ok(())
    }

    async fn exists_by_name_pair(&self, first_name: &str, last_name: &str) -> UserResult<bool> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .any(|u| u.first_name == first_name && u.last_name == last_name))
    }
}
