use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::User;

/// Sea-ORM Entity for the users table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            age: model.age,
        }
    }
}

/// Leaves the id unset for `0` so the store assigns one on insert.
impl From<User> for ActiveModel {
    fn from(user: User) -> Self {
        Self {
            id: if user.id == 0 { NotSet } else { Set(user.id) },
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            email: Set(user.email),
            age: Set(user.age),
        }
    }
}
