//! Migrate command - Schema management for heroes, powers and hero powers.

use sea_orm::DbErr;

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // Connect without auto-running migrations for manual control
    let db = Database::connect_without_migrations(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    match args.action {
        MigrateAction::Up => {
            tracing::info!("Running pending migrations...");
            db.run_migrations().await.map_err(migration_failed)?;
            tracing::info!("Migrations completed successfully");
        }
        MigrateAction::Down => {
            tracing::info!("Rolling back last migration...");
            db.rollback_migration().await.map_err(migration_failed)?;
            tracing::info!("Rollback completed successfully");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await.map_err(migration_failed)?;
            let pending = status.iter().filter(|(_, applied)| !applied).count();

            for (name, applied) in &status {
                println!("{:<45} {}", name, if *applied { "applied" } else { "pending" });
            }
            println!("{} migration(s), {} pending", status.len(), pending);
        }
        MigrateAction::Fresh => {
            tracing::warn!("Dropping heroes, powers and hero_powers and re-running all migrations...");
            db.fresh_migrations().await.map_err(migration_failed)?;
            tracing::info!("Fresh migrations completed successfully");
        }
    }

    Ok(())
}

fn migration_failed(err: DbErr) -> AppError {
    AppError::internal(format!("Migration failed: {}", err))
}
