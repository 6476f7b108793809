//! Trait for the host's locale string-table loader

use std::sync::Mutex;

use crate::domain::value_objects::LocaleNameTable;
use crate::errors::DomainResult;

/// Loader of per-locale language-name tables with a notion of the current locale
///
/// Loading a table makes its locale the current one, the same way the host
/// swaps its global string tables. Callers that load a foreign locale must
/// restore the previous one; [`super::LocaleScope`] does that on drop.
pub trait LocaleContext: Send + Sync {
    /// Lock held by a [`super::LocaleScope`] for its whole lifetime
    ///
    /// Scopes on one context run one at a time, so a scope never mistakes
    /// another scope's switched locale for the original one.
    fn switch_lock(&self) -> &Mutex<()>;

    /// Locale whose tables are loaded right now
    fn current_locale(&self) -> String;

    /// Load the language-name table of `locale` and make it current
    fn load(&self, locale: &str) -> DomainResult<LocaleNameTable>;

    /// Make `locale` current again
    fn restore(&self, locale: &str) -> DomainResult<()> {
        self.load(locale).map(|_| ())
    }
}
