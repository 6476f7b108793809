//! Scoped locale switch with guaranteed restore

use std::sync::{MutexGuard, PoisonError};

use tracing::{debug, error};

use crate::domain::value_objects::LocaleNameTable;
use crate::errors::DomainResult;

use super::traits::LocaleContext;

/// Guard remembering the current locale and restoring it when dropped
///
/// Restoration also happens when the scope is left through `?` or a panic.
/// Entering blocks while another scope on the same context is open; scopes
/// must not be nested on one thread.
pub struct LocaleScope<'a> {
    context: &'a dyn LocaleContext,
    original: String,
    // Released after `drop` has restored the locale
    _exclusive: MutexGuard<'a, ()>,
}

impl<'a> LocaleScope<'a> {
    /// Enter a scope, remembering the locale that is current now
    pub fn enter(context: &'a dyn LocaleContext) -> Self {
        let exclusive = context
            .switch_lock()
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let original = context.current_locale();
        Self {
            context,
            original,
            _exclusive: exclusive,
        }
    }

    /// Locale that will be restored
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Load a locale's table inside the scope
    pub fn load(&self, locale: &str) -> DomainResult<LocaleNameTable> {
        self.context.load(locale)
    }
}

impl Drop for LocaleScope<'_> {
    fn drop(&mut self) {
        if self.context.current_locale() == self.original {
            return;
        }
        match self.context.restore(&self.original) {
            Ok(()) => debug!(locale = %self.original, "Restored locale after language-name lookup"),
            Err(e) => error!(
                locale = %self.original,
                error = %e,
                event = "locale_restore_failed",
                "Failed to restore locale after language-name lookup"
            ),
        }
    }
}
