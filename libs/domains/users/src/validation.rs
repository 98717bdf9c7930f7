use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{UserResult, messages};
use crate::models::User;
use crate::repository::UserRepository;

/// Field order of the structural checks reported by the derive.
const STRUCTURAL_FIELDS: [&str; 2] = ["first_name", "last_name"];

type SemanticRule = fn(&User) -> Option<&'static str>;

/// Domain rules applied after the structural ones, in reporting order.
const SEMANTIC_RULES: [SemanticRule; 2] = [minimum_age, email_format];

pub const MINIMUM_AGE: i64 = 10;

fn minimum_age(user: &User) -> Option<&'static str> {
    (user.age < MINIMUM_AGE).then_some(messages::MINIMUM_AGE)
}

fn email_format(user: &User) -> Option<&'static str> {
    let email = user.email.trim();
    (email.is_empty() || !email.contains('@')).then_some(messages::EMAIL_FORMAT)
}

/// Structural and semantic violations of `user`, in reporting order.
///
/// These never touch persistence.
pub fn check_fields(user: &User) -> Vec<String> {
    let mut found = Vec::new();

    if let Err(errors) = user.validate() {
        let by_field = errors.field_errors();
        for field in STRUCTURAL_FIELDS {
            let Some(field_errors) = by_field.get(field) else {
                continue;
            };
            found.extend(field_errors.iter().map(|e| match &e.message {
                Some(message) => message.to_string(),
                None => e.code.to_string(),
            }));
        }
    }

    found.extend(
        SEMANTIC_RULES
            .iter()
            .filter_map(|rule| rule(user))
            .map(str::to_string),
    );
    found
}

/// Runs every rule against a candidate user and collects the violations.
///
/// The uniqueness rule needs the store; if that lookup fails the whole
/// validation fails with the store's error instead of a violation list.
pub struct UserValidator<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserValidator<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Violations for a brand-new user.
    #[instrument(skip(self, user), fields(first_name = %user.first_name, last_name = %user.last_name))]
    pub async fn validate(&self, user: &User) -> UserResult<Vec<String>> {
        let mut found = check_fields(user);
        if self
            .repository
            .exists_by_name_pair(&user.first_name, &user.last_name)
            .await?
        {
            found.push(messages::DUPLICATE_NAME.to_string());
        }

        if !found.is_empty() {
            tracing::debug!(violations = found.len(), "User failed validation");
        }
        Ok(found)
    }

    /// Violations for replacing `current` with `candidate`.
    ///
    /// Keeping the same name pair is not a duplicate of itself, so the
    /// uniqueness lookup only runs when the name changes.
    #[instrument(skip(self, candidate, current), fields(user_id = current.id))]
    pub async fn validate_changes(&self, candidate: &User, current: &User) -> UserResult<Vec<String>> {
        if candidate.same_name_as(current) {
            return Ok(check_fields(candidate));
        }
        self.validate(candidate).await
    }
}

impl<R: UserRepository> Clone for UserValidator<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;
    use axum_helpers::{AppError, ErrorKind};
    use mockall::predicate::eq;

    fn valid() -> User {
        User::new("John", "Doe", "john.doe@yahoo.com", 34)
    }

    fn validator(mock: MockUserRepository) -> UserValidator<MockUserRepository> {
        UserValidator::new(Arc::new(mock))
    }

    #[test]
    fn test_derive_messages_match_constants() {
        let found = check_fields(&User::new("", "", "a@b", 20));
        assert_eq!(
            found,
            vec![messages::FIRST_NAME_REQUIRED, messages::LAST_NAME_REQUIRED]
        );
    }

    #[test]
    fn test_valid_user_has_no_field_violations() {
        assert!(check_fields(&valid()).is_empty());
    }

    #[test]
    fn test_age_boundary() {
        let mut user = valid();
        user.age = MINIMUM_AGE;
        assert!(check_fields(&user).is_empty());

        user.age = MINIMUM_AGE - 1;
        assert_eq!(check_fields(&user), vec![messages::MINIMUM_AGE]);
    }

    #[test]
    fn test_email_rules() {
        for email in ["", "   ", "no-at-sign.com"] {
            let mut user = valid();
            user.email = email.to_string();
            assert_eq!(check_fields(&user), vec![messages::EMAIL_FORMAT], "{email:?}");
        }

        let mut user = valid();
        user.email = " a@b ".to_string();
        assert!(check_fields(&user).is_empty());
    }

    #[test]
    fn test_all_field_violations_in_order() {
        let found = check_fields(&User::default());
        assert_eq!(
            found,
            vec![
                messages::FIRST_NAME_REQUIRED,
                messages::LAST_NAME_REQUIRED,
                messages::MINIMUM_AGE,
                messages::EMAIL_FORMAT,
            ]
        );
    }

    #[tokio::test]
    async fn test_duplicate_is_reported_last() {
        let mut mock = MockUserRepository::new();
        mock.expect_exists_by_name_pair()
            .with(eq("John"), eq("Doe"))
            .times(1)
            .returning(|_, _| Ok(true));

        let mut user = valid();
        user.age = 5;
        let found = validator(mock).validate(&user).await.unwrap();

        assert_eq!(found, vec![messages::MINIMUM_AGE, messages::DUPLICATE_NAME]);
    }

    #[tokio::test]
    async fn test_uniqueness_runs_even_with_empty_names() {
        let mut mock = MockUserRepository::new();
        mock.expect_exists_by_name_pair()
            .with(eq(""), eq(""))
            .times(1)
            .returning(|_, _| Ok(false));

        let found = validator(mock).validate(&User::default()).await.unwrap();
        assert_eq!(found.len(), 4);
    }

    #[tokio::test]
    async fn test_store_failure_replaces_violation_list() {
        let mut mock = MockUserRepository::new();
        mock.expect_exists_by_name_pair()
            .returning(|_, _| Err(AppError::internal_error("Database error: gone")));

        let err = validator(mock).validate(&User::default()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ServerError);
        assert_eq!(err.message(), "Database error: gone");
    }

    #[tokio::test]
    async fn test_changes_with_same_name_skip_uniqueness() {
        let mut mock = MockUserRepository::new();
        mock.expect_exists_by_name_pair().never();

        let current = valid().with_id(1);
        let mut candidate = valid();
        candidate.age = 50;

        let found = validator(mock).validate_changes(&candidate, &current).await.unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_changes_with_new_name_check_uniqueness() {
        let mut mock = MockUserRepository::new();
        mock.expect_exists_by_name_pair()
            .with(eq("Zenia"), eq("Brennan"))
            .times(1)
            .returning(|_, _| Ok(true));

        let current = valid().with_id(1);
        let candidate = User::new("Zenia", "Brennan", "z@b.com", 34);

        let found = validator(mock).validate_changes(&candidate, &current).await.unwrap();
        assert_eq!(found, vec![messages::DUPLICATE_NAME]);
    }
}
