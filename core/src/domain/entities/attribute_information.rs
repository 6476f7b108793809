//! Attribute information record as stored by the framework.

use serde::{Deserialize, Serialize};

use super::field_configuration::FieldConfiguration;

/// One row of the attribute table: identity plus type-specific settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeInformation {
    pub id: u64,

    /// Column holding the attribute's value in the model table
    #[serde(rename = "colname")]
    pub col_name: String,

    /// Human-readable attribute name
    #[serde(default)]
    pub name: String,

    /// Registered attribute type name
    #[serde(rename = "type")]
    pub type_name: String,

    #[serde(flatten)]
    pub config: FieldConfiguration,
}

impl AttributeInformation {
    pub fn new(id: u64, col_name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            id,
            col_name: col_name.into(),
            name: String::new(),
            type_name: type_name.into(),
            config: FieldConfiguration::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_config(mut self, config: FieldConfiguration) -> Self {
        self.config = config;
        self
    }
}
