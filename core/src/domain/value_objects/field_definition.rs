//! Edit widget definition of an attribute.

use indexmap::IndexMap;
use serde::Serialize;

/// Widget used to edit a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Select,
    Text,
    Checkbox,
}

/// Definition handed to the edit form renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub label: String,
    pub input_type: InputType,
    /// Enhanced, searchable select widget
    pub chosen: bool,
    pub mandatory: bool,
    pub include_blank_option: bool,
    /// Selectable options, code to display name, in display order
    pub options: IndexMap<String, String>,
}
