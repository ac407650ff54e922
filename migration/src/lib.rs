pub use sea_orm_migration::prelude::*;

mod m20250901_000001_create_users_table;
mod m20250901_000002_create_assignments_table;
mod m20250901_000003_create_submissions_table;
mod m20250901_000004_create_notifications_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_users_table::Migration),
            Box::new(m20250901_000002_create_assignments_table::Migration),
            Box::new(m20250901_000003_create_submissions_table::Migration),
            Box::new(m20250901_000004_create_notifications_table::Migration),
        ]
    }
}
