//! MySQL implementation of the RecordStore trait.
//!
//! Table and column names cannot be bound as parameters; they are validated
//! as plain identifiers and backtick-quoted before being interpolated.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use lc_core::domain::value_objects::ValueCount;
use lc_core::errors::DomainError;
use lc_core::repositories::RecordStore;

use super::{placeholders, quote_identifier, storage_error};

/// MySQL implementation of RecordStore over model tables
pub struct MySqlRecordStore {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlRecordStore {
    /// Create a new MySQL record store
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_count(row: &sqlx::mysql::MySqlRow) -> Result<ValueCount, DomainError> {
        let value: String = row
            .try_get("value")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get value: {}", e) })?;
        let count: i64 = row
            .try_get("mm_count")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get mm_count: {}", e) })?;

        Ok(ValueCount::new(value, u64::try_from(count).unwrap_or(0)))
    }
}

#[async_trait]
impl RecordStore for MySqlRecordStore {
    async fn count_values(
        &self,
        table: &str,
        column: &str,
        ids: Option<&[u64]>,
    ) -> Result<Vec<ValueCount>, DomainError> {
        let table = quote_identifier(table)?;
        let column = quote_identifier(column)?;

        let rows = match ids {
            Some([]) => return Ok(Vec::new()),
            Some(ids) => {
                let mask = placeholders(ids.len());
                let query = format!(
                    "SELECT {column} AS value, COUNT({column}) AS mm_count \
                     FROM {table} \
                     WHERE id IN ({mask}) AND {column} IS NOT NULL AND {column} <> '' \
                     GROUP BY {column} \
                     ORDER BY MIN(FIELD(id, {mask}))"
                );

                let mut q = sqlx::query(&query);
                for id in ids.iter().chain(ids.iter()) {
                    q = q.bind(*id);
                }
                q.fetch_all(&self.pool)
                    .await
                    .map_err(|e| storage_error("Failed to count values of listed records", e))?
            }
            None => {
                let query = format!(
                    "SELECT {column} AS value, COUNT({column}) AS mm_count \
                     FROM {table} \
                     WHERE {column} IS NOT NULL AND {column} <> '' \
                     GROUP BY {column} \
                     ORDER BY {column}"
                );

                sqlx::query(&query)
                    .fetch_all(&self.pool)
                    .await
                    .map_err(|e| storage_error("Failed to count values", e))?
            }
        };

        rows.iter().map(Self::row_to_count).collect()
    }

    async fn fetch_values(
        &self,
        table: &str,
        column: &str,
        ids: &[u64],
    ) -> Result<Vec<(u64, Option<String>)>, DomainError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let table = quote_identifier(table)?;
        let column = quote_identifier(column)?;
        let mask = placeholders(ids.len());

        let query = format!(
            "SELECT CAST(id AS UNSIGNED) AS id, {column} AS value \
             FROM {table} \
             WHERE id IN ({mask}) \
             ORDER BY FIELD(id, {mask})"
        );

        let mut q = sqlx::query(&query);
        for id in ids.iter().chain(ids.iter()) {
            q = q.bind(*id);
        }
        let rows = q
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to fetch values", e))?;

        rows.iter()
            .map(|row| {
                let id: u64 = row
                    .try_get("id")
                    .map_err(|e| DomainError::Internal { message: format!("Failed to get id: {}", e) })?;
                let value: Option<String> = row
                    .try_get("value")
                    .map_err(|e| DomainError::Internal { message: format!("Failed to get value: {}", e) })?;
                Ok((id, value))
            })
            .collect()
    }

    async fn store_values(
        &self,
        table: &str,
        column: &str,
        values: &[(u64, Option<String>)],
    ) -> Result<(), DomainError> {
        if values.is_empty() {
            return Ok(());
        }
        let table = quote_identifier(table)?;
        let column = quote_identifier(column)?;
        let query = format!("UPDATE {table} SET {column} = ? WHERE id = ?");

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| storage_error("Failed to begin transaction", e))?;

        for (id, value) in values {
            sqlx::query(&query)
                .bind(value.as_deref())
                .bind(*id)
                .execute(&mut *tx)
                .await
                .map_err(|e| storage_error("Failed to store value", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| storage_error("Failed to commit values", e))?;

        tracing::debug!(table = %table, column = %column, records = values.len(), "Stored values");
        Ok(())
    }
}
