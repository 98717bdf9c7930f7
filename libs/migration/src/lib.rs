pub use sea_orm_migration::prelude::*;

mod m20241129_000000_create_users;
mod m20241201_000000_seed_initial_data;

pub struct Migrator;

impl Migrator {
    /// Number of leading migrations that only create schema.
    pub const SCHEMA_STEPS: u32 = 1;
}

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241129_000000_create_users::Migration),
            Box::new(m20241201_000000_seed_initial_data::Migration),
        ]
    }
}
