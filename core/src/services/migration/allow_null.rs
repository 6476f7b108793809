//! Widen langcode columns to accept NULL
//!
//! Older installations created langcode columns as `NOT NULL default ''`.
//! Empty values are stored as NULL now, so those columns are altered to the
//! current definition.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::value_objects::MigrationResult;
use crate::errors::DomainResult;
use crate::repositories::SchemaInspector;
use crate::services::attribute::LANGCODE_TYPE_NAME;

use super::traits::Migration;

const REQUIRED_TABLES: [&str; 2] = ["tl_metamodel", "tl_metamodel_attribute"];
const COLUMN_DEFINITION: &str = "varchar(5) NULL";

/// Migration altering non-nullable or defaulted langcode columns
pub struct AllowNullMigration {
    schema: Arc<dyn SchemaInspector>,
}

impl AllowNullMigration {
    pub fn new(schema: Arc<dyn SchemaInspector>) -> Self {
        Self { schema }
    }

    /// `(table, column)` pairs that still need altering, with real column names
    async fn columns_to_change(&self) -> DomainResult<Vec<(String, String)>> {
        if !self.schema.tables_exist(&REQUIRED_TABLES).await? {
            return Ok(Vec::new());
        }

        let mut pending = Vec::new();
        for (table, column) in self.schema.attribute_columns(LANGCODE_TYPE_NAME).await? {
            let columns = self.schema.list_columns(&table).await?;
            let Some(info) = columns
                .iter()
                .find(|c| c.name.eq_ignore_ascii_case(&column))
            else {
                continue;
            };
            if !info.nullable || info.default.is_some() {
                pending.push((table, info.name.clone()));
            }
        }
        Ok(pending)
    }
}

#[async_trait]
impl Migration for AllowNullMigration {
    fn name(&self) -> &'static str {
        "Allow null values in MetaModels \"langcode\" attributes."
    }

    async fn should_run(&self) -> bool {
        match self.columns_to_change().await {
            Ok(pending) => !pending.is_empty(),
            Err(e) => {
                warn!(
                    error = %e,
                    event = "migration_check_failed",
                    "Could not inspect langcode columns, skipping migration"
                );
                false
            }
        }
    }

    async fn run(&self) -> DomainResult<MigrationResult> {
        let pending = self.columns_to_change().await?;

        let mut adjusted = Vec::with_capacity(pending.len());
        for (table, column) in pending {
            self.schema
                .alter_column(&table, &column, COLUMN_DEFINITION)
                .await?;
            info!(
                table = %table,
                column = %column,
                event = "langcode_column_altered",
                "Allowed NULL in langcode column"
            );
            adjusted.push(format!("{}.{}", table, column));
        }

        Ok(MigrationResult::new(
            true,
            format!("Adjusted column(s): {}", adjusted.join(", ")),
        ))
    }
}
