use async_trait::async_trait;
use axum_helpers::AppError;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    entity,
    error::{UserResult, messages, user_not_found},
    models::User,
    repository::UserRepository,
};

/// SQL-backed implementation of UserRepository.
///
/// Store failures surface as `server_error` with a `Database error:` prefix.
#[derive(Clone)]
pub struct SqlUserRepository {
    db: DatabaseConnection,
}

impl SqlUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for SqlUserRepository {
    async fn find_all(&self) -> UserResult<Vec<User>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        if models.is_empty() {
            return Err(AppError::not_found(messages::NO_USERS_FOUND));
        }
        Ok(models.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> UserResult<User> {
        entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(User::from)
            .ok_or_else(user_not_found)
    }

    async fn insert(&self, mut user: User) -> UserResult<User> {
        user.id = 0;
        let active_model: entity::ActiveModel = user.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(user_id = model.id, "Created user");
        Ok(model.into())
    }

    async fn update(&self, user: User) -> UserResult<User> {
        let id = user.id;
        let mut active_model: entity::ActiveModel = user.clone().into();
        active_model.id = sea_orm::ActiveValue::NotSet;

        let result = entity::Entity::update_many()
            .set(active_model)
            .filter(entity::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(user_not_found());
        }

        tracing::info!(user_id = id, "Updated user");
        Ok(user)
    }

    async fn delete(&self, id: i64) -> UserResult<()> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(user_not_found());
        }

        tracing::info!(user_id = id, "Deleted user");
        Ok(())
    }

    async fn exists_by_name_pair(&self, first_name: &str, last_name: &str) -> UserResult<bool> {
        let found = entity::Entity::find()
            .filter(entity::Column::FirstName.eq(first_name))
            .filter(entity::Column::LastName.eq(last_name))
            .one(&self.db)
            .await?;

        Ok(found.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_helpers::ErrorKind;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    fn row(id: i64, first_name: &str, last_name: &str) -> entity::Model {
        entity::Model {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: format!("{}@example.com", first_name.to_lowercase()),
            age: 34,
        }
    }

    #[tokio::test]
    async fn test_find_all_empty_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();

        let err = SqlUserRepository::new(db).find_all().await.unwrap_err();
        assert_eq!(err, AppError::not_found("no users found"));
    }

    #[tokio::test]
    async fn test_find_all_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_results([vec![row(1, "John", "Doe"), row(2, "Zenia", "Brennan")]])
            .into_connection();

        let users = SqlUserRepository::new(db).find_all().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].first_name, "Zenia");
    }

    #[tokio::test]
    async fn test_query_failure_is_server_error() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_errors([DbErr::Custom("no such table: users".to_string())])
            .into_connection();

        let err = SqlUserRepository::new(db).find_by_id(1).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ServerError);
        assert!(err.message().starts_with("Database error:"));
    }

    #[tokio::test]
    async fn test_delete_without_rows_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let err = SqlUserRepository::new(db).delete(9).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_exists_by_name_pair() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_results([vec![row(1, "John", "Doe")], vec![]])
            .into_connection();
        let repo = SqlUserRepository::new(db);

        assert!(repo.exists_by_name_pair("John", "Doe").await.unwrap());
        assert!(!repo.exists_by_name_pair("Jane", "Doe").await.unwrap());
    }
}
