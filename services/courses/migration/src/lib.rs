use sea_orm_migration::prelude::*;

mod m20261015_000001_create_users;
mod m20261015_000002_create_courses;
mod m20261015_000003_create_votes;
mod m20261015_000004_create_notifications;
mod m20261015_000005_create_merges;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261015_000001_create_users::Migration),
            Box::new(m20261015_000002_create_courses::Migration),
            Box::new(m20261015_000003_create_votes::Migration),
            Box::new(m20261015_000004_create_notifications::Migration),
            Box::new(m20261015_000005_create_merges::Migration),
        ]
    }
}
