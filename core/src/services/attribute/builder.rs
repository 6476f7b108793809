//! Builder collecting the collaborators of a langcode attribute

use std::sync::Arc;

use lc_shared::utils::is_valid_identifier;

use crate::domain::entities::{AttributeInformation, MetaModelInfo};
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::RecordStore;
use crate::services::locale::{CanonicalCodeTable, LocaleContext};
use crate::services::resolver::LanguageNameResolver;

use super::factory::LANGCODE_TYPE_NAME;
use super::langcode::LangCodeAttribute;

/// Builder for [`LangCodeAttribute`]
///
/// Every collaborator is required; `build` names the first one missing.
#[derive(Default)]
pub struct LangCodeAttributeBuilder {
    information: Option<AttributeInformation>,
    meta_model: Option<MetaModelInfo>,
    record_store: Option<Arc<dyn RecordStore>>,
    locale_context: Option<Arc<dyn LocaleContext>>,
    canonical: Option<Arc<CanonicalCodeTable>>,
}

impl LangCodeAttributeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn information(mut self, information: AttributeInformation) -> Self {
        self.information = Some(information);
        self
    }

    pub fn meta_model(mut self, meta_model: MetaModelInfo) -> Self {
        self.meta_model = Some(meta_model);
        self
    }

    pub fn record_store(mut self, record_store: Arc<dyn RecordStore>) -> Self {
        self.record_store = Some(record_store);
        self
    }

    pub fn locale_context(mut self, locale_context: Arc<dyn LocaleContext>) -> Self {
        self.locale_context = Some(locale_context);
        self
    }

    pub fn canonical(mut self, canonical: Arc<CanonicalCodeTable>) -> Self {
        self.canonical = Some(canonical);
        self
    }

    pub fn build(self) -> DomainResult<LangCodeAttribute> {
        let information = self
            .information
            .ok_or(DomainError::MissingDependency { name: "information" })?;
        let meta_model = self
            .meta_model
            .ok_or(DomainError::MissingDependency { name: "meta_model" })?;
        let record_store = self
            .record_store
            .ok_or(DomainError::MissingDependency { name: "record_store" })?;
        let locale_context = self
            .locale_context
            .ok_or(DomainError::MissingDependency { name: "locale_context" })?;
        let canonical = self
            .canonical
            .ok_or(DomainError::MissingDependency { name: "canonical" })?;

        if information.type_name != LANGCODE_TYPE_NAME {
            return Err(ValidationError::AttributeTypeMismatch {
                expected: LANGCODE_TYPE_NAME.to_string(),
                actual: information.type_name,
            }
            .into());
        }
        for identifier in [&information.col_name, &meta_model.table_name] {
            if !is_valid_identifier(identifier) {
                return Err(ValidationError::InvalidIdentifier {
                    identifier: identifier.clone(),
                }
                .into());
            }
        }

        let resolver = Arc::new(LanguageNameResolver::new(locale_context, canonical));
        Ok(LangCodeAttribute::new(
            information,
            meta_model,
            record_store,
            resolver,
        ))
    }
}
