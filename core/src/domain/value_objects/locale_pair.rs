//! Active/fallback locale pair.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two locales a resolution runs against; also the resolver cache key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalePair {
    active: String,
    fallback: String,
}

impl LocalePair {
    pub fn new(active: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            active: active.into(),
            fallback: fallback.into(),
        }
    }

    /// Pair whose fallback equals the active locale
    pub fn single(locale: impl Into<String>) -> Self {
        let locale = locale.into();
        Self::new(locale.clone(), locale)
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Whether a distinct fallback locale has to be consulted
    pub fn has_distinct_fallback(&self) -> bool {
        !self.fallback.is_empty() && self.fallback != self.active
    }
}

impl fmt::Display for LocalePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}>{}", self.active, self.fallback)
    }
}
