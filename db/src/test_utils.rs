use migration::Migrator;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

/// Connects to a fresh in-memory SQLite database and applies all migrations.
///
/// The pool is pinned to a single connection; each pooled connection would
/// otherwise get its own private in-memory database.
pub async fn setup_test_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1);

    let db = Database::connect(opts)
        .await
        .expect("Failed to connect to in-memory db");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}
