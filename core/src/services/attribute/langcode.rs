//! The langcode attribute
//!
//! Stores a short language code per record and displays it as a localized
//! language name. Names come from the [`LanguageNameResolver`], filter
//! counts from the [`RecordStore`].

use std::sync::Arc;

use async_trait::async_trait;
use indexmap::IndexMap;
use lc_shared::types::{normalize_stored_value, LanguageCode};
use tracing::{debug, error};

use crate::domain::entities::{AttributeInformation, MetaModelInfo, LANGCODE_SETTING_NAMES};
use crate::domain::value_objects::{
    FieldDefinition, FilterOptions, InputType, LocalePair, ValueCount,
};
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::RecordStore;
use crate::services::resolver::LanguageNameResolver;

use super::factory::LANGCODE_TYPE_NAME;
use super::palette::SettingsPalette;
use super::traits::{Attribute, BASE_SETTING_NAMES};

/// Column definition of langcode attributes
pub(crate) const LANGCODE_SQL_TYPE: &str = "varchar(5) NULL";

/// Langcode attribute bound to one model
pub struct LangCodeAttribute {
    info: AttributeInformation,
    model: MetaModelInfo,
    record_store: Arc<dyn RecordStore>,
    resolver: Arc<LanguageNameResolver>,
}

impl LangCodeAttribute {
    /// Use [`super::LangCodeAttributeBuilder`] outside of this module
    pub(crate) fn new(
        info: AttributeInformation,
        model: MetaModelInfo,
        record_store: Arc<dyn RecordStore>,
        resolver: Arc<LanguageNameResolver>,
    ) -> Self {
        Self {
            info,
            model,
            record_store,
            resolver,
        }
    }

    pub fn information(&self) -> &AttributeInformation {
        &self.info
    }

    pub fn meta_model(&self) -> &MetaModelInfo {
        &self.model
    }

    pub fn locales(&self) -> LocalePair {
        self.model.locales()
    }

    /// Display name of a stored code in the model's languages
    pub fn resolve_value(&self, code: Option<&str>) -> String {
        self.resolver.resolve_one(&self.locales(), code)
    }

    /// Forget resolved names, e.g. after the language tables changed
    pub fn invalidate_names(&self) {
        self.resolver.invalidate();
    }

    /// Allowed codes in display order; codes without a name keep configured order at the end
    fn allowed_options(&self) -> IndexMap<String, String> {
        let names = self.resolver.resolve_all(&self.locales());
        let allowed = self.info.config.allowed_set();

        let mut options: IndexMap<String, String> = names
            .iter()
            .filter(|(code, _)| allowed.contains(code))
            .map(|(code, name)| (code.to_string(), name.to_string()))
            .collect();

        for code in &self.info.config.langcodes {
            if !options.contains_key(code) {
                options.insert(code.clone(), code.clone());
            }
        }
        options
    }

    fn options_from_counts(&self, groups: Vec<ValueCount>) -> FilterOptions {
        let names = self.resolver.resolve_all(&self.locales());
        let mut labels = IndexMap::with_capacity(groups.len());
        let mut counts = IndexMap::with_capacity(groups.len());

        for group in groups.into_iter().filter(|g| !g.value.is_empty()) {
            let label = names.get(&group.value).unwrap_or(group.value.as_str()).to_string();
            labels.insert(group.value.clone(), label);
            counts.insert(group.value, group.count);
        }

        FilterOptions {
            labels,
            counts: Some(counts),
        }
    }

    fn validate(values: &[(u64, Option<String>)]) -> DomainResult<Vec<(u64, Option<String>)>> {
        values
            .iter()
            .map(|(id, value)| {
                let normalized = normalize_stored_value(value.as_deref());
                match normalized {
                    Some(code) => LanguageCode::parse(&code)
                        .map(|code| (*id, Some(String::from(code))))
                        .map_err(|_| DomainError::from(ValidationError::InvalidLanguageCode { code })),
                    None => Ok((*id, None)),
                }
            })
            .collect()
    }
}

#[async_trait]
impl Attribute for LangCodeAttribute {
    fn type_name(&self) -> &'static str {
        LANGCODE_TYPE_NAME
    }

    fn col_name(&self) -> &str {
        &self.info.col_name
    }

    fn sql_data_type(&self) -> &'static str {
        LANGCODE_SQL_TYPE
    }

    fn attribute_setting_names(&self) -> Vec<&'static str> {
        BASE_SETTING_NAMES
            .iter()
            .chain(LANGCODE_SETTING_NAMES.iter())
            .copied()
            .collect()
    }

    fn settings_palette(&self, frontend_editing: bool) -> SettingsPalette {
        SettingsPalette::langcode(frontend_editing)
    }

    fn field_definition(&self) -> FieldDefinition {
        let names = self.resolver.resolve_all(&self.locales());
        let allowed = self.info.config.allowed_set();
        let options = names
            .iter()
            .filter(|(code, _)| allowed.contains(code))
            .map(|(code, name)| (code.to_string(), name.to_string()))
            .collect();

        let label = if self.info.name.is_empty() {
            self.info.col_name.clone()
        } else {
            self.info.name.clone()
        };

        FieldDefinition {
            label,
            input_type: InputType::Select,
            chosen: true,
            mandatory: self.info.config.mandatory,
            include_blank_option: self.info.config.include_blank_option,
            options,
        }
    }

    fn render_value(&self, stored: Option<&str>) -> String {
        self.resolve_value(stored)
    }

    fn widget_to_value(&self, widget: &str) -> Option<String> {
        normalize_stored_value(Some(widget))
    }

    fn value_to_widget(&self, value: Option<&str>) -> String {
        value.unwrap_or_default().to_string()
    }

    async fn get_data_for(&self, ids: &[u64]) -> DomainResult<Vec<(u64, Option<String>)>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.record_store
            .fetch_values(&self.model.table_name, &self.info.col_name, ids)
            .await
    }

    async fn set_data_for(&self, values: &[(u64, Option<String>)]) -> DomainResult<()> {
        if values.is_empty() {
            return Ok(());
        }

        let values = Self::validate(values)?;
        self.record_store
            .store_values(&self.model.table_name, &self.info.col_name, &values)
            .await
            .map_err(|e| {
                error!(
                    table = %self.model.table_name,
                    column = %self.info.col_name,
                    error = %e,
                    event = "langcode_store_failed",
                    "Failed to store language codes"
                );
                e
            })?;

        debug!(
            table = %self.model.table_name,
            column = %self.info.col_name,
            records = values.len(),
            "Stored language codes"
        );
        Ok(())
    }

    async fn filter_options(
        &self,
        id_filter: Option<&[u64]>,
        used_only: bool,
    ) -> DomainResult<FilterOptions> {
        let table = &self.model.table_name;
        let column = &self.info.col_name;

        let groups = match id_filter {
            Some([]) => return Ok(FilterOptions::empty()),
            Some(ids) => self.record_store.count_values(table, column, Some(ids)).await?,
            None if used_only => self.record_store.count_values(table, column, None).await?,
            None => {
                return Ok(FilterOptions {
                    labels: self.allowed_options(),
                    counts: None,
                })
            }
        };

        Ok(self.options_from_counts(groups))
    }
}
