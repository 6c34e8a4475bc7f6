//! In-memory database for integration tests.

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

/// Open a fresh in-memory SQLite database and apply every migration of `M`.
///
/// The pool is pinned to a single connection: an in-memory database lives
/// only as long as its connection, and SQLite serializes writers anyway.
///
/// Panics if the connection or a migration fails.
pub async fn migrated_sqlite<M: MigratorTrait>() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(opts)
        .await
        .unwrap_or_else(|e| panic!("failed to open in-memory sqlite: {e}"));
    M::up(&db, None)
        .await
        .unwrap_or_else(|e| panic!("failed to apply migrations: {e}"));
    db
}
