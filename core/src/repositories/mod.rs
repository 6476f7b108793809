//! Repository interfaces and their in-memory implementations.

pub mod record;
pub mod schema;

pub use record::{MockRecordStore, RecordStore};
pub use schema::{ColumnInfo, MockSchemaInspector, SchemaInspector};
