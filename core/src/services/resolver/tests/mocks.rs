//! Shared fixtures for resolver tests

use std::sync::Arc;

use crate::services::locale::{CanonicalCodeTable, StaticLocaleContext};
use crate::services::resolver::LanguageNameResolver;

pub fn canonical() -> Arc<CanonicalCodeTable> {
    Arc::new(CanonicalCodeTable::from_pairs([
        ("en", "English"),
        ("fr", "French"),
        ("es", "Spanish"),
        ("it", "Italian"),
    ]))
}

/// German active table, partial English fallback table, current locale `nl`
pub fn context() -> StaticLocaleContext {
    StaticLocaleContext::new("nl")
        .with_table(
            "de",
            [("en", "Englisch"), ("fr", "Französisch")].into_iter().collect(),
        )
        .with_table(
            "en",
            [("en", "English"), ("fr", "French"), ("es", "Spanish")]
                .into_iter()
                .collect(),
        )
}

pub fn resolver(context: Arc<StaticLocaleContext>) -> LanguageNameResolver {
    LanguageNameResolver::new(context, canonical())
}
