//! Language-name resolver
//!
//! Merges the active locale's names, the fallback locale's names and the
//! canonical table into one map ordered by display name. Precedence is
//! active, then fallback, then canonical; the canonical table keeps the
//! result total.

use std::sync::Arc;

use indexmap::IndexMap;
use lc_shared::utils::sort_key;
use tracing::{debug, warn};

use crate::domain::value_objects::{LocaleNameTable, LocalePair, ResolvedLanguageMap};
use crate::services::locale::{CanonicalCodeTable, LocaleContext, LocaleScope};

use super::cache::LanguageCache;

/// Resolver of language codes to localized display names
pub struct LanguageNameResolver {
    /// Loader of per-locale name tables
    locale_context: Arc<dyn LocaleContext>,
    /// Baseline names for every known code
    canonical: Arc<CanonicalCodeTable>,
    cache: LanguageCache,
}

impl LanguageNameResolver {
    pub fn new(locale_context: Arc<dyn LocaleContext>, canonical: Arc<CanonicalCodeTable>) -> Self {
        Self {
            locale_context,
            canonical,
            cache: LanguageCache::new(),
        }
    }

    pub fn canonical(&self) -> &CanonicalCodeTable {
        &self.canonical
    }

    /// All canonical codes mapped to display names, ordered by folded name
    ///
    /// The locale context's current locale is the same before and after the
    /// call. A locale whose table cannot be loaded contributes no names.
    pub fn resolve_all(&self, locales: &LocalePair) -> Arc<ResolvedLanguageMap> {
        if let Some(cached) = self.cache.get(locales) {
            return cached;
        }

        let resolved = Arc::new(self.build(locales));
        debug!(
            locales = %locales,
            languages = resolved.len(),
            "Resolved language names"
        );
        self.cache.store(locales.clone(), Arc::clone(&resolved));
        resolved
    }

    /// Display name of one stored code; `""` for null, empty or unknown codes
    pub fn resolve_one(&self, locales: &LocalePair, code: Option<&str>) -> String {
        match code {
            Some(code) if !code.is_empty() => self
                .resolve_all(locales)
                .get(code)
                .map(str::to_string)
                .unwrap_or_default(),
            _ => String::new(),
        }
    }

    /// Drop the memoized map
    pub fn invalidate(&self) {
        self.cache.invalidate();
    }

    fn build(&self, locales: &LocalePair) -> ResolvedLanguageMap {
        let scope = LocaleScope::enter(self.locale_context.as_ref());

        let mut chosen: IndexMap<&str, (String, String)> =
            IndexMap::with_capacity(self.canonical.len());

        let active = load_or_empty(&scope, locales.active());
        for code in self.canonical.codes() {
            if let Some(name) = active.get(code) {
                chosen.insert(code, (sort_key(name), name.to_string()));
            }
        }

        if chosen.len() < self.canonical.len() && locales.has_distinct_fallback() {
            let fallback = load_or_empty(&scope, locales.fallback());
            for code in self.canonical.codes() {
                if chosen.contains_key(code) {
                    continue;
                }
                if let Some(name) = fallback.get(code) {
                    chosen.insert(code, (sort_key(name), name.to_string()));
                }
            }
        }
        drop(scope);

        for (code, name) in self.canonical.iter() {
            if !chosen.contains_key(code) {
                chosen.insert(code, (sort_key(name), name.to_string()));
            }
        }

        // Stable: equal keys keep canonical order.
        let mut entries: Vec<(&str, (String, String))> = chosen.into_iter().collect();
        entries.sort_by(|(_, (a, _)), (_, (b, _))| a.cmp(b));

        ResolvedLanguageMap::from_ordered(
            entries
                .into_iter()
                .map(|(code, (_, name))| (code.to_string(), name))
                .collect(),
        )
    }
}

fn load_or_empty(scope: &LocaleScope<'_>, locale: &str) -> LocaleNameTable {
    match scope.load(locale) {
        Ok(table) => table,
        Err(e) => {
            warn!(
                locale = %locale,
                error = %e,
                event = "locale_load_failed",
                "Language names unavailable, continuing without them"
            );
            LocaleNameTable::new()
        }
    }
}
