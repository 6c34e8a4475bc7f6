use sea_orm_migration::prelude::*;

use coursevote_courses_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
