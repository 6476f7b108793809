use async_trait::async_trait;

use crate::domain::value_objects::MigrationResult;
use crate::errors::DomainResult;

/// A schema migration run by the host's migration runner
#[async_trait]
pub trait Migration: Send + Sync {
    /// Human-readable name shown by the runner
    fn name(&self) -> &'static str;

    /// Whether the migration has work to do; never fails
    async fn should_run(&self) -> bool;

    async fn run(&self) -> DomainResult<MigrationResult>;
}
