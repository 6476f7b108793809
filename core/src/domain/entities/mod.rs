//! Domain entities: the owning model and the attribute's stored configuration.

pub mod attribute_information;
pub mod field_configuration;
pub mod meta_model;


// Re-export commonly used types
pub use attribute_information::AttributeInformation;
pub use field_configuration::{FieldConfiguration, LANGCODE_SETTING_NAMES};
pub use meta_model::MetaModelInfo;
