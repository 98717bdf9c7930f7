use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DatabaseBackend;

use crate::m20241129_000000_create_users::Users;

const SEED_USERS: [(i64, &str, &str, &str, i64); 5] = [
    (1, "John", "Doe", "john.doe@yahoo.com", 34),
    (2, "Zenia", "Brennan", "ultrices.vivamus.rhoncus@yahoo.ca", 34),
    (3, "Branden", "Spears", "non.lobortis@hotmail.net", 34),
    (4, "Alice", "Wallace", "at@protonmail.couk", 34),
    (5, "Ira", "Francis", "in.lobortis.tellus@protonmail.ca", 34),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert
            .into_table(Users::Table)
            .columns([
                Users::Id,
                Users::FirstName,
                Users::LastName,
                Users::Email,
                Users::Age,
            ])
            .on_conflict(OnConflict::column(Users::Id).do_nothing().to_owned());

        for (id, first_name, last_name, email, age) in SEED_USERS {
            insert
                .values([
                    id.into(),
                    first_name.into(),
                    last_name.into(),
                    email.into(),
                    age.into(),
                ])
                .map_err(|e| DbErr::Migration(format!("Invalid seed row {}: {}", id, e)))?;
        }

        manager.exec_stmt(insert).await?;

        // Explicit ids leave the Postgres identity sequence behind.
        if manager.get_database_backend() == DatabaseBackend::Postgres {
            manager
                .get_connection()
                .execute_unprepared(
                    "SELECT setval(pg_get_serial_sequence('users', 'id'), (SELECT MAX(id) FROM users))",
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(Users::Table)
            .and_where(Expr::col(Users::Id).is_in(SEED_USERS.map(|(id, ..)| id)))
            .to_owned();

        manager.exec_stmt(delete).await
    }
}
