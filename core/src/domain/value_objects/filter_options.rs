//! Facet options for filter widgets.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Occurrence count of one stored value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueCount {
    pub value: String,
    pub count: u64,
}

impl ValueCount {
    pub fn new(value: impl Into<String>, count: u64) -> Self {
        Self {
            value: value.into(),
            count,
        }
    }
}

/// Ordered code to label mapping with optional per-code counts
///
/// `counts` is `None` when the options were not derived from stored records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub labels: IndexMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counts: Option<IndexMap<String, u64>>,
}

impl FilterOptions {
    /// No options and no counts, as for an empty record selection
    pub fn empty() -> Self {
        Self {
            labels: IndexMap::new(),
            counts: Some(IndexMap::new()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn label(&self, code: &str) -> Option<&str> {
        self.labels.get(code).map(String::as_str)
    }

    pub fn count(&self, code: &str) -> Option<u64> {
        self.counts.as_ref().and_then(|c| c.get(code).copied())
    }

    /// Codes in option order
    pub fn codes(&self) -> Vec<&str> {
        self.labels.keys().map(String::as_str).collect()
    }
}
