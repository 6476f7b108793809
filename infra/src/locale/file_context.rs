//! File-backed locale context
//!
//! Reads `<translations_dir>/<locale>/languages.toml`:
//!
//! ```toml
//! [languages]
//! en = "Englisch"
//! fr = "Französisch"
//! ```
//!
//! `en` and `de` tables are built in and used when no file exists for them.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError, RwLock};

use serde::Deserialize;
use tracing::debug;

use lc_core::domain::value_objects::LocaleNameTable;
use lc_core::errors::{DomainError, DomainResult};
use lc_core::services::locale::LocaleContext;
use lc_shared::config::LocaleConfig;
use lc_shared::utils::is_valid_language_code;

use crate::InfrastructureError;

const TABLE_FILE: &str = "languages.toml";

const BUILTIN_EN: &str = include_str!("../../translations/en/languages.toml");
const BUILTIN_DE: &str = include_str!("../../translations/de/languages.toml");

#[derive(Debug, Deserialize)]
struct LanguagesFile {
    #[serde(default)]
    languages: HashMap<String, String>,
}

/// Locale context over per-locale TOML tables, cached after the first load
pub struct FileLocaleContext {
    translations_dir: PathBuf,
    current: RwLock<String>,
    tables: RwLock<HashMap<String, LocaleNameTable>>,
    switch_lock: Mutex<()>,
}

impl FileLocaleContext {
    pub fn new(translations_dir: impl Into<PathBuf>, current_locale: impl Into<String>) -> Self {
        Self {
            translations_dir: translations_dir.into(),
            current: RwLock::new(current_locale.into()),
            tables: RwLock::new(HashMap::new()),
            switch_lock: Mutex::new(()),
        }
    }

    pub fn from_config(config: &LocaleConfig) -> Self {
        Self::new(&config.translations_dir, config.default_locale.clone())
    }

    pub fn translations_dir(&self) -> &Path {
        &self.translations_dir
    }

    /// Drop cached tables so the next load reads the files again
    pub fn invalidate(&self) {
        self.tables
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn cached(&self, locale: &str) -> Option<LocaleNameTable> {
        self.tables
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(locale)
            .cloned()
    }

    fn switch(&self, locale: &str) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = locale.to_string();
    }

    /// Read a table from disk, falling back to the built-in tables
    fn read_table(&self, locale: &str) -> Result<LocaleNameTable, InfrastructureError> {
        if !is_valid_language_code(locale) {
            return Err(InfrastructureError::Config(format!("Invalid locale: {:?}", locale)));
        }

        let path = self.translations_dir.join(locale).join(TABLE_FILE);
        let source = match std::fs::read_to_string(&path) {
            Ok(source) => {
                debug!(locale, path = %path.display(), "Loaded language table");
                source
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => match builtin(locale) {
                Some(source) => {
                    debug!(locale, "Using built-in language table");
                    source.to_string()
                }
                None => return Err(e.into()),
            },
            Err(e) => return Err(e.into()),
        };

        let file: LanguagesFile = toml::from_str(&source)?;
        Ok(file.languages.into_iter().collect())
    }
}

fn builtin(locale: &str) -> Option<&'static str> {
    match locale {
        "en" => Some(BUILTIN_EN),
        "de" => Some(BUILTIN_DE),
        _ => None,
    }
}

impl LocaleContext for FileLocaleContext {
    fn switch_lock(&self) -> &Mutex<()> {
        &self.switch_lock
    }

    fn current_locale(&self) -> String {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn load(&self, locale: &str) -> DomainResult<LocaleNameTable> {
        self.switch(locale);

        if let Some(table) = self.cached(locale) {
            return Ok(table);
        }

        let table = self.read_table(locale).map_err(|e| DomainError::Locale {
            locale: locale.to_string(),
            message: e.to_string(),
        })?;

        self.tables
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(locale.to_string(), table.clone());
        Ok(table)
    }

    /// Only the current locale is global here; no table has to be read
    fn restore(&self, locale: &str) -> DomainResult<()> {
        self.switch(locale);
        Ok(())
    }
}
