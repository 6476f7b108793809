//! Registry of attribute type factories

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::domain::entities::{AttributeInformation, MetaModelInfo};
use crate::errors::{DomainResult, ValidationError};

use super::factory::AttributeTypeFactory;
use super::traits::Attribute;

/// Attribute type factories by type name, in registration order
#[derive(Default)]
pub struct AttributeTypeRegistry {
    factories: IndexMap<&'static str, Arc<dyn AttributeTypeFactory>>,
}

impl AttributeTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory; a factory for the same type name is replaced
    pub fn register(&mut self, factory: Arc<dyn AttributeTypeFactory>) -> &mut Self {
        let type_name = factory.type_name();
        if self.factories.insert(type_name, factory).is_some() {
            warn!(type_name, "Replaced attribute type factory");
        } else {
            debug!(type_name, "Registered attribute type factory");
        }
        self
    }

    pub fn get(&self, type_name: &str) -> Option<Arc<dyn AttributeTypeFactory>> {
        self.factories.get(type_name).cloned()
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.factories.contains_key(type_name)
    }

    pub fn type_names(&self) -> Vec<&'static str> {
        self.factories.keys().copied().collect()
    }

    /// Type names whose columns the schema manager creates and alters
    pub fn managed_schema_type_names(&self) -> Vec<&'static str> {
        self.type_names()
    }

    /// Create an attribute through the factory registered for its type
    pub fn create(
        &self,
        information: AttributeInformation,
        meta_model: MetaModelInfo,
    ) -> DomainResult<Arc<dyn Attribute>> {
        let factory = self.factories.get(information.type_name.as_str()).ok_or_else(|| {
            ValidationError::UnknownAttributeType {
                type_name: information.type_name.clone(),
            }
        })?;
        factory.create_instance(information, meta_model)
    }
}
