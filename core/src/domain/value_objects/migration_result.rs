//! Outcome of a schema migration.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Result reported after a migration ran
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationResult {
    pub successful: bool,
    pub message: String,
    pub executed_at: DateTime<Utc>,
}

impl MigrationResult {
    pub fn new(successful: bool, message: impl Into<String>) -> Self {
        Self {
            successful,
            message: message.into(),
            executed_at: Utc::now(),
        }
    }
}
