pub use sea_orm_migration::prelude::*;

mod m20241004_000001_create_farmers;
mod m20241004_000002_create_farmlands;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241004_000001_create_farmers::Migration),
            Box::new(m20241004_000002_create_farmlands::Migration),
        ]
    }
}
