//! MySQL implementation of the SchemaInspector trait using `information_schema`.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use lc_core::errors::DomainError;
use lc_core::repositories::{ColumnInfo, SchemaInspector};

use super::{placeholders, quote_identifier, storage_error};

/// MySQL implementation of SchemaInspector for the connected database
pub struct MySqlSchemaInspector {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlSchemaInspector {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SchemaInspector for MySqlSchemaInspector {
    async fn tables_exist(&self, tables: &[&str]) -> Result<bool, DomainError> {
        if tables.is_empty() {
            return Ok(true);
        }

        let query = format!(
            "SELECT COUNT(*) AS found FROM information_schema.tables \
             WHERE table_schema = DATABASE() AND table_name IN ({})",
            placeholders(tables.len())
        );
        let mut q = sqlx::query(&query);
        for table in tables {
            q = q.bind(*table);
        }

        let row = q
            .fetch_one(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to look up tables", e))?;
        let found: i64 = row
            .try_get("found")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get found: {}", e) })?;

        Ok(usize::try_from(found).map_or(false, |found| found == tables.len()))
    }

    async fn attribute_columns(&self, type_name: &str) -> Result<Vec<(String, String)>, DomainError> {
        let query = r#"
            SELECT metamodel.tableName AS table_name, attribute.colname AS column_name
            FROM tl_metamodel_attribute AS attribute
            LEFT JOIN tl_metamodel AS metamodel ON attribute.pid = metamodel.id
            WHERE attribute.type = ?
        "#;

        let rows = sqlx::query(query)
            .bind(type_name)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to list attribute columns", e))?;

        let mut columns = Vec::with_capacity(rows.len());
        for row in &rows {
            let table: Option<String> = row
                .try_get("table_name")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get table_name: {}", e) })?;
            let column: String = row
                .try_get("column_name")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get column_name: {}", e) })?;

            // Attributes of deleted models have no table.
            if let Some(table) = table.filter(|t| !t.is_empty()) {
                columns.push((table, column));
            }
        }
        Ok(columns)
    }

    async fn list_columns(&self, table: &str) -> Result<Vec<ColumnInfo>, DomainError> {
        let query = r#"
            SELECT column_name AS name, is_nullable AS nullable, column_default AS default_value
            FROM information_schema.columns
            WHERE table_schema = DATABASE() AND table_name = ?
            ORDER BY ordinal_position
        "#;

        let rows = sqlx::query(query)
            .bind(table)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to list columns", e))?;

        rows.iter()
            .map(|row| {
                let name: String = row
                    .try_get("name")
                    .map_err(|e| DomainError::Internal { message: format!("Failed to get name: {}", e) })?;
                let nullable: String = row
                    .try_get("nullable")
                    .map_err(|e| DomainError::Internal { message: format!("Failed to get nullable: {}", e) })?;
                let default: Option<String> = row
                    .try_get("default_value")
                    .map_err(|e| DomainError::Internal { message: format!("Failed to get default_value: {}", e) })?;

                Ok(ColumnInfo {
                    name,
                    nullable: nullable.eq_ignore_ascii_case("YES"),
                    // MariaDB reports a NULL default as the literal `NULL`.
                    default: default.filter(|d| d != "NULL"),
                })
            })
            .collect()
    }

    async fn alter_column(&self, table: &str, column: &str, definition: &str) -> Result<(), DomainError> {
        let statement = format!(
            "ALTER TABLE {} MODIFY {} {}",
            quote_identifier(table)?,
            quote_identifier(column)?,
            definition
        );

        sqlx::query(&statement)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to alter column", e))?;

        tracing::info!(table, column, definition, "Altered column");
        Ok(())
    }
}
