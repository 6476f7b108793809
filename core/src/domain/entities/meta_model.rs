//! The model (content table) an attribute belongs to.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::LocalePair;

/// Table and language information of the model owning an attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaModelInfo {
    /// Physical table holding the model's records
    pub table_name: String,

    /// Language the model is currently rendered in
    pub active_language: String,

    /// Language used when the active one lacks a translation
    pub fallback_language: String,
}

impl MetaModelInfo {
    pub fn new(
        table_name: impl Into<String>,
        active_language: impl Into<String>,
        fallback_language: impl Into<String>,
    ) -> Self {
        Self {
            table_name: table_name.into(),
            active_language: active_language.into(),
            fallback_language: fallback_language.into(),
        }
    }

    /// Locale pair used to resolve language names for this model
    pub fn locales(&self) -> LocalePair {
        LocalePair::new(self.active_language.clone(), self.fallback_language.clone())
    }
}
