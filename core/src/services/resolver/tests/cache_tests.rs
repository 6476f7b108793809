use std::sync::Arc;

use indexmap::IndexMap;

use crate::domain::value_objects::{LocalePair, ResolvedLanguageMap};
use crate::services::resolver::LanguageCache;

fn map(name: &str) -> Arc<ResolvedLanguageMap> {
    let mut names = IndexMap::new();
    names.insert("en".to_string(), name.to_string());
    Arc::new(ResolvedLanguageMap::from_ordered(names))
}

#[test]
fn test_get_matches_exact_pair_only() {
    let cache = LanguageCache::new();
    cache.store(LocalePair::new("de", "en"), map("Englisch"));

    assert!(cache.get(&LocalePair::new("de", "en")).is_some());
    assert!(cache.get(&LocalePair::new("de", "fr")).is_none());
    assert!(cache.get(&LocalePair::single("de")).is_none());
}

#[test]
fn test_store_replaces_slot() {
    let cache = LanguageCache::new();
    cache.store(LocalePair::single("de"), map("Englisch"));
    cache.store(LocalePair::single("en"), map("English"));

    assert!(cache.get(&LocalePair::single("de")).is_none());
    let hit = cache.get(&LocalePair::single("en")).unwrap();
    assert_eq!(hit.get("en"), Some("English"));
}

#[test]
fn test_invalidate() {
    let cache = LanguageCache::new();
    assert!(cache.is_empty());
    cache.store(LocalePair::single("de"), map("Englisch"));
    assert!(!cache.is_empty());

    cache.invalidate();
    assert!(cache.is_empty());
}
