//! Language-name tables: per-locale input and the resolved, ordered output.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Code to display name mapping of one locale
///
/// Tables of translated locales are usually partial. Empty names count as
/// missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleNameTable(HashMap<String, String>);

impl LocaleNameTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Non-empty display name of a code
    pub fn get(&self, code: &str) -> Option<&str> {
        self.0
            .get(code)
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }

    pub fn insert(&mut self, code: impl Into<String>, name: impl Into<String>) {
        self.0.insert(code.into(), name.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocaleNameTable {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Code to display name mapping ordered by folded display name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedLanguageMap(IndexMap<String, String>);

impl ResolvedLanguageMap {
    /// Wrap an already ordered map
    pub fn from_ordered(names: IndexMap<String, String>) -> Self {
        Self(names)
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.0.get(code).map(String::as_str)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.0.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in display order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Codes in display order
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}
