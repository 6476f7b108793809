//! Memo slot for the last resolved language map

use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::value_objects::{LocalePair, ResolvedLanguageMap};

/// Single-entry cache keyed by the locale pair the map was resolved for
///
/// A lookup for a different pair misses; storing replaces the slot.
#[derive(Debug, Default)]
pub struct LanguageCache {
    slot: RwLock<Option<(LocalePair, Arc<ResolvedLanguageMap>)>>,
}

impl LanguageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached map for `locales`, if the slot holds that pair
    pub fn get(&self, locales: &LocalePair) -> Option<Arc<ResolvedLanguageMap>> {
        let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner);
        slot.as_ref()
            .filter(|(key, _)| key == locales)
            .map(|(_, map)| Arc::clone(map))
    }

    pub fn store(&self, locales: LocalePair, map: Arc<ResolvedLanguageMap>) {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some((locales, map));
    }

    pub fn invalidate(&self) {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        *slot = None;
    }

    pub fn is_empty(&self) -> bool {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }
}
