//! In-memory implementation of SchemaInspector for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::errors::DomainError;

use super::{ColumnInfo, SchemaInspector};

/// Mock schema with tables, registered attributes and an alteration log
pub struct MockSchemaInspector {
    tables: Arc<Mutex<HashMap<String, Vec<ColumnInfo>>>>,
    attributes: Arc<Mutex<Vec<(String, String, String)>>>,
    altered: Arc<Mutex<Vec<(String, String, String)>>>,
}

impl MockSchemaInspector {
    pub fn new() -> Self {
        Self {
            tables: Arc::new(Mutex::new(HashMap::new())),
            attributes: Arc::new(Mutex::new(Vec::new())),
            altered: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a table with its columns
    pub fn add_table(&self, table: &str, columns: Vec<ColumnInfo>) {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner).insert(table.to_string(), columns);
    }

    /// Register an attribute of `type_name` stored in `table.column`
    pub fn add_attribute(&self, table: &str, column: &str, type_name: &str) {
        self.attributes.lock().unwrap_or_else(PoisonError::into_inner).push((
            table.to_string(),
            column.to_string(),
            type_name.to_string(),
        ));
    }

    /// Alterations performed so far as `(table, column, definition)`
    pub fn altered_columns(&self) -> Vec<(String, String, String)> {
        self.altered.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Default for MockSchemaInspector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SchemaInspector for MockSchemaInspector {
    async fn tables_exist(&self, tables: &[&str]) -> Result<bool, DomainError> {
        let known = self.tables.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(tables.iter().all(|t| known.contains_key(*t)))
    }

    async fn attribute_columns(&self, type_name: &str) -> Result<Vec<(String, String)>, DomainError> {
        Ok(self
            .attributes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|(_, _, t)| t == type_name)
            .map(|(table, column, _)| (table.clone(), column.clone()))
            .collect())
    }

    async fn list_columns(&self, table: &str) -> Result<Vec<ColumnInfo>, DomainError> {
        Ok(self
            .tables
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(table)
            .cloned()
            .unwrap_or_default())
    }

    async fn alter_column(&self, table: &str, column: &str, definition: &str) -> Result<(), DomainError> {
        let mut tables = self.tables.lock().unwrap_or_else(PoisonError::into_inner);
        let info = tables
            .get_mut(table)
            .and_then(|columns| columns.iter_mut().find(|c| c.name == column))
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("{}.{}", table, column),
            })?;
        info.nullable = true;
        info.default = None;

        self.altered.lock().unwrap_or_else(PoisonError::into_inner).push((
            table.to_string(),
            column.to_string(),
            definition.to_string(),
        ));
        Ok(())
    }
}
