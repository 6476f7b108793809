//! Tests for AllowNullMigration

use std::sync::Arc;

use crate::repositories::{ColumnInfo, MockSchemaInspector};
use crate::services::migration::{AllowNullMigration, Migration};

fn schema_with_framework_tables() -> Arc<MockSchemaInspector> {
    let schema = Arc::new(MockSchemaInspector::new());
    schema.add_table("tl_metamodel", vec![ColumnInfo::new("id", false, None)]);
    schema.add_table("tl_metamodel_attribute", vec![ColumnInfo::new("id", false, None)]);
    schema
}

#[test]
fn test_name() {
    let migration = AllowNullMigration::new(Arc::new(MockSchemaInspector::new()));
    assert_eq!(
        migration.name(),
        "Allow null values in MetaModels \"langcode\" attributes."
    );
}

#[tokio::test]
async fn test_does_not_run_without_framework_tables() {
    let schema = Arc::new(MockSchemaInspector::new());
    schema.add_table("tl_metamodel", vec![]);
    schema.add_table("mm_books", vec![ColumnInfo::new("language", false, Some(""))]);
    schema.add_attribute("mm_books", "language", "langcode");

    let migration = AllowNullMigration::new(schema);
    assert!(!migration.should_run().await);
}

#[tokio::test]
async fn test_does_not_run_without_langcode_columns() {
    let schema = schema_with_framework_tables();
    schema.add_table("mm_books", vec![ColumnInfo::new("title", false, Some(""))]);
    schema.add_attribute("mm_books", "title", "text");

    let migration = AllowNullMigration::new(schema);
    assert!(!migration.should_run().await);
}

#[tokio::test]
async fn test_does_not_run_when_columns_already_nullable() {
    let schema = schema_with_framework_tables();
    schema.add_table("mm_books", vec![ColumnInfo::new("language", true, None)]);
    schema.add_attribute("mm_books", "language", "langcode");

    let migration = AllowNullMigration::new(schema);
    assert!(!migration.should_run().await);
}

#[tokio::test]
async fn test_runs_and_reports_adjusted_columns() {
    let schema = schema_with_framework_tables();
    schema.add_table(
        "mm_books",
        vec![
            ColumnInfo::new("id", false, None),
            ColumnInfo::new("Language", false, Some("")),
            ColumnInfo::new("origin", true, None),
        ],
    );
    schema.add_table("mm_films", vec![ColumnInfo::new("audio", true, Some("en"))]);
    schema.add_attribute("mm_books", "language", "langcode");
    schema.add_attribute("mm_books", "origin", "langcode");
    schema.add_attribute("mm_films", "audio", "langcode");
    schema.add_attribute("mm_films", "subtitles", "langcode");

    let migration = AllowNullMigration::new(schema.clone());
    assert!(migration.should_run().await);

    let result = migration.run().await.unwrap();
    assert!(result.successful);
    assert_eq!(result.message, "Adjusted column(s): mm_books.Language, mm_films.audio");

    let altered = schema.altered_columns();
    assert_eq!(altered.len(), 2);
    assert!(altered
        .iter()
        .all(|(_, _, definition)| definition == "varchar(5) NULL"));

    assert!(!migration.should_run().await);
}
