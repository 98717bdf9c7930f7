use axum_helpers::AppError;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{UserResult, messages, violations};
use crate::models::User;
use crate::repository::UserRepository;
use crate::validation::UserValidator;

/// Service layer for User business logic
///
/// Validation failures are turned into a single `bad_request` here; every
/// repository error is returned unchanged.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    validator: UserValidator<R>,
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            validator: self.validator.clone(),
        }
    }
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self::from_shared(Arc::new(repository))
    }

    pub fn from_shared(repository: Arc<R>) -> Self {
        Self {
            validator: UserValidator::new(Arc::clone(&repository)),
            repository,
        }
    }

    #[instrument(skip(self))]
    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.repository.find_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_user(&self, id: i64) -> UserResult<User> {
        self.repository.find_by_id(id).await
    }

    /// Validate and store a new user. Ids are always assigned by the store.
    #[instrument(skip(self, candidate), fields(first_name = %candidate.first_name, last_name = %candidate.last_name))]
    pub async fn create_user(&self, candidate: User) -> UserResult<User> {
        if candidate.id != 0 {
            return Err(AppError::bad_request(messages::ID_ON_CREATE));
        }

        violations(self.validator.validate(&candidate).await?)?;

        let created = self.repository.insert(candidate).await?;
        tracing::info!(user_id = created.id, "User created");
        Ok(created)
    }

    /// Replace the mutable fields of the user addressed by `candidate.id`.
    #[instrument(skip(self, candidate), fields(user_id = candidate.id))]
    pub async fn update_user(&self, candidate: User) -> UserResult<User> {
        let mut current = self.repository.find_by_id(candidate.id).await?;

        violations(self.validator.validate_changes(&candidate, &current).await?)?;

        current.apply_changes(candidate);
        let updated = self.repository.update(current).await?;
        tracing::info!(user_id = updated.id, "User updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: i64) -> UserResult<()> {
        self.repository.find_by_id(id).await?;
        self.repository.delete(id).await?;
        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }
}
