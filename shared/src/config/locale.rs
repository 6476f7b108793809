//! Locale configuration: where language-name tables live and which locales to use

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Locale settings for language-name resolution
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocaleConfig {
    /// Directory holding `<locale>/languages.toml` tables
    pub translations_dir: PathBuf,

    /// Locale that is active when nothing else was loaded
    #[serde(default = "default_locale")]
    pub default_locale: String,

    /// Fallback locale used for names the active locale lacks
    #[serde(default = "default_locale")]
    pub fallback_locale: String,

    /// Frontend editing is installed; adds `fe_template` to the settings palette
    #[serde(default)]
    pub frontend_editing: bool,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            translations_dir: PathBuf::from("translations"),
            default_locale: default_locale(),
            fallback_locale: default_locale(),
            frontend_editing: false,
        }
    }
}

impl LocaleConfig {
    /// Create from `LOCALE_*` environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            translations_dir: std::env::var("LOCALE_TRANSLATIONS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.translations_dir),
            default_locale: std::env::var("LOCALE_DEFAULT").unwrap_or(defaults.default_locale),
            fallback_locale: std::env::var("LOCALE_FALLBACK").unwrap_or(defaults.fallback_locale),
            frontend_editing: std::env::var("LOCALE_FRONTEND_EDITING")
                .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }
}

fn default_locale() -> String {
    String::from("en")
}
