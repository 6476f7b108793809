//! Behaviour shared by all attribute types

use async_trait::async_trait;

use crate::domain::value_objects::{FieldDefinition, FilterOptions};
use crate::errors::DomainResult;

use super::palette::SettingsPalette;

/// Setting names every attribute type understands
pub const BASE_SETTING_NAMES: [&str; 2] = ["tl_class", "be_template"];

/// One attribute (field) of a model
///
/// Values are exchanged in their stored form: `None` is SQL `NULL`.
#[async_trait]
pub trait Attribute: Send + Sync {
    /// Registered type name, e.g. `langcode`
    fn type_name(&self) -> &'static str;

    /// Column holding the values in the model table
    fn col_name(&self) -> &str;

    /// Column definition used when the column is created or altered
    fn sql_data_type(&self) -> &'static str;

    /// Names of all settings this attribute reads from its information record
    fn attribute_setting_names(&self) -> Vec<&'static str>;

    /// Settings form layout; `frontend_editing` tells whether frontend editing is installed
    fn settings_palette(&self, frontend_editing: bool) -> SettingsPalette;

    /// Edit widget definition
    fn field_definition(&self) -> FieldDefinition;

    /// Human-readable rendition of a stored value
    fn render_value(&self, stored: Option<&str>) -> String;

    /// Convert widget input to the stored form
    fn widget_to_value(&self, widget: &str) -> Option<String>;

    /// Convert a stored value to widget input
    fn value_to_widget(&self, value: Option<&str>) -> String;

    /// Stored values of the given records
    async fn get_data_for(&self, ids: &[u64]) -> DomainResult<Vec<(u64, Option<String>)>>;

    /// Store values for the given records
    async fn set_data_for(&self, values: &[(u64, Option<String>)]) -> DomainResult<()>;

    /// Options for a filter widget, optionally restricted to records and to used values
    async fn filter_options(
        &self,
        id_filter: Option<&[u64]>,
        used_only: bool,
    ) -> DomainResult<FilterOptions>;
}
