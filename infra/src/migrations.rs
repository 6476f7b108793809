//! Runner for schema migrations

use std::sync::Arc;

use chrono::Utc;
use lc_core::domain::value_objects::MigrationResult;
use lc_core::services::migration::Migration;
use tracing::{error, info};

use crate::InfrastructureError;

/// Outcome of one executed migration
#[derive(Debug, Clone)]
pub struct MigrationReport {
    pub name: &'static str,
    pub result: MigrationResult,
}

/// Run every migration that reports work to do, in order
///
/// Stops at the first failing migration.
pub async fn run_pending(
    migrations: &[Arc<dyn Migration>],
) -> Result<Vec<MigrationReport>, InfrastructureError> {
    let mut reports = Vec::new();

    for migration in migrations {
        if !migration.should_run().await {
            continue;
        }

        let started = Utc::now();
        let result = migration.run().await.map_err(|e| {
            error!(
                migration = migration.name(),
                error = %e,
                event = "migration_failed",
                "Migration failed"
            );
            e
        })?;

        info!(
            migration = migration.name(),
            message = %result.message,
            duration_ms = (result.executed_at - started).num_milliseconds(),
            event = "migration_executed",
            "Migration executed"
        );
        reports.push(MigrationReport {
            name: migration.name(),
            result,
        });
    }

    Ok(reports)
}
