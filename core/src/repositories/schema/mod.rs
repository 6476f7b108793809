//! Schema inspection module used by migrations.

mod r#trait;
pub use r#trait::{ColumnInfo, SchemaInspector};

mod mock;
pub use mock::MockSchemaInspector;
