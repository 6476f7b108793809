//! Schema inspector trait: read-only table metadata plus column alteration.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Physical column metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,
    pub nullable: bool,
    /// Column default; `None` when the default is SQL `NULL` or absent
    pub default: Option<String>,
}

impl ColumnInfo {
    pub fn new(name: impl Into<String>, nullable: bool, default: Option<&str>) -> Self {
        Self {
            name: name.into(),
            nullable,
            default: default.map(str::to_string),
        }
    }
}

/// Access to the database schema for migrations
#[async_trait]
pub trait SchemaInspector: Send + Sync {
    /// Whether all given tables exist
    async fn tables_exist(&self, tables: &[&str]) -> Result<bool, DomainError>;

    /// `(model table, column)` of every attribute registered with `type_name`
    async fn attribute_columns(&self, type_name: &str) -> Result<Vec<(String, String)>, DomainError>;

    /// Columns of a table with their real (case-preserved) names
    async fn list_columns(&self, table: &str) -> Result<Vec<ColumnInfo>, DomainError>;

    /// Change a column to the given SQL definition, e.g. `varchar(5) NULL`
    async fn alter_column(&self, table: &str, column: &str, definition: &str) -> Result<(), DomainError>;
}
