//! Attribute type factories

use std::sync::Arc;

use crate::domain::entities::{AttributeInformation, MetaModelInfo};
use crate::errors::DomainResult;
use crate::repositories::RecordStore;
use crate::services::locale::{CanonicalCodeTable, LocaleContext};

use super::builder::LangCodeAttributeBuilder;
use super::traits::Attribute;

/// Type name the langcode attribute is registered under
pub const LANGCODE_TYPE_NAME: &str = "langcode";

/// Icon shown next to langcode attributes in the backend
pub const LANGCODE_TYPE_ICON: &str = "bundles/metamodelsattributelangcode/langcode.png";

/// Creates attribute instances of one type
pub trait AttributeTypeFactory: Send + Sync {
    fn type_name(&self) -> &'static str;

    fn type_icon(&self) -> &'static str;

    /// Create an attribute from its information record for the given model
    fn create_instance(
        &self,
        information: AttributeInformation,
        meta_model: MetaModelInfo,
    ) -> DomainResult<Arc<dyn Attribute>>;
}

/// Factory of langcode attributes
pub struct LangCodeTypeFactory {
    record_store: Arc<dyn RecordStore>,
    locale_context: Arc<dyn LocaleContext>,
    canonical: Arc<CanonicalCodeTable>,
}

impl LangCodeTypeFactory {
    pub fn new(
        record_store: Arc<dyn RecordStore>,
        locale_context: Arc<dyn LocaleContext>,
        canonical: Arc<CanonicalCodeTable>,
    ) -> Self {
        Self {
            record_store,
            locale_context,
            canonical,
        }
    }
}

impl AttributeTypeFactory for LangCodeTypeFactory {
    fn type_name(&self) -> &'static str {
        LANGCODE_TYPE_NAME
    }

    fn type_icon(&self) -> &'static str {
        LANGCODE_TYPE_ICON
    }

    fn create_instance(
        &self,
        information: AttributeInformation,
        meta_model: MetaModelInfo,
    ) -> DomainResult<Arc<dyn Attribute>> {
        let attribute = LangCodeAttributeBuilder::new()
            .information(information)
            .meta_model(meta_model)
            .record_store(Arc::clone(&self.record_store))
            .locale_context(Arc::clone(&self.locale_context))
            .canonical(Arc::clone(&self.canonical))
            .build()?;
        Ok(Arc::new(attribute))
    }
}
