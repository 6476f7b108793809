//! In-memory locale context

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, PoisonError};

use crate::domain::value_objects::LocaleNameTable;
use crate::errors::{DomainError, DomainResult};

use super::traits::LocaleContext;

/// Locale context over fixed tables
///
/// Useful for embedding and tests: every `load` is recorded, and locales can
/// be marked as failing. A failing load still switches the current locale,
/// the way a half-finished load leaves the host's tables behind.
pub struct StaticLocaleContext {
    tables: HashMap<String, LocaleNameTable>,
    current: Mutex<String>,
    failing: HashSet<String>,
    loads: Mutex<Vec<String>>,
    switch_lock: Mutex<()>,
}

impl StaticLocaleContext {
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            tables: HashMap::new(),
            current: Mutex::new(current.into()),
            failing: HashSet::new(),
            loads: Mutex::new(Vec::new()),
            switch_lock: Mutex::new(()),
        }
    }

    pub fn with_table(mut self, locale: impl Into<String>, table: LocaleNameTable) -> Self {
        self.tables.insert(locale.into(), table);
        self
    }

    /// Make every load of `locale` fail
    pub fn with_failing(mut self, locale: impl Into<String>) -> Self {
        self.failing.insert(locale.into());
        self
    }

    /// Locales passed to `load`/`restore`, in call order
    pub fn loads(&self) -> Vec<String> {
        self.loads
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn switch(&self, locale: &str) {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = locale.to_string();
        self.loads
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(locale.to_string());
    }
}

impl LocaleContext for StaticLocaleContext {
    fn switch_lock(&self) -> &Mutex<()> {
        &self.switch_lock
    }

    fn current_locale(&self) -> String {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn load(&self, locale: &str) -> DomainResult<LocaleNameTable> {
        self.switch(locale);
        if self.failing.contains(locale) {
            return Err(DomainError::Locale {
                locale: locale.to_string(),
                message: "language table could not be loaded".to_string(),
            });
        }
        Ok(self.tables.get(locale).cloned().unwrap_or_default())
    }

    fn restore(&self, locale: &str) -> DomainResult<()> {
        self.switch(locale);
        Ok(())
    }
}
