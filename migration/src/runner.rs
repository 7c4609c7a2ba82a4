use colored::*;
use sea_orm_migration::prelude::*;
use std::time::Instant;

use migration::Migrator;

pub async fn run_all_migrations(url: &str) {
    let db = sea_orm::Database::connect(url)
        .await
        .expect("DB connection failed");

    println!("Running migrations...");
    let schema_manager = SchemaManager::new(&db);

    for migration in Migrator::migrations() {
        let start = Instant::now();
        match migration.up(&schema_manager).await {
            Ok(()) => {
                let time_str = format!("({:.2?})", start.elapsed()).dimmed();
                println!("  {} {} {}", "applied".green(), migration.name(), time_str);
            }
            Err(err) => {
                println!("  {} {}: {}", "failed".red(), migration.name(), err);
                std::process::exit(1);
            }
        }
    }
}
