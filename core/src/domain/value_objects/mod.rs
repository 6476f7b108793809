//! Value objects representing immutable domain concepts.

pub mod field_definition;
pub mod filter_options;
pub mod language_names;
pub mod locale_pair;
pub mod migration_result;

// Re-export commonly used types
pub use field_definition::{FieldDefinition, InputType};
pub use filter_options::{FilterOptions, ValueCount};
pub use language_names::{LocaleNameTable, ResolvedLanguageMap};
pub use locale_pair::LocalePair;
pub use migration_result::MigrationResult;
