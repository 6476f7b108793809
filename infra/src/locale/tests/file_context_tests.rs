//! Tests for FileLocaleContext using temporary translation directories

use std::fs;
use std::path::Path;
use std::sync::Arc;

use lc_core::domain::value_objects::LocalePair;
use lc_core::errors::DomainError;
use lc_core::services::locale::{CanonicalCodeTable, LocaleContext};
use lc_core::services::resolver::LanguageNameResolver;
use lc_shared::config::LocaleConfig;
use tempfile::TempDir;

use crate::locale::FileLocaleContext;

fn write_table(dir: &Path, locale: &str, body: &str) {
    let locale_dir = dir.join(locale);
    fs::create_dir_all(&locale_dir).unwrap();
    fs::write(locale_dir.join("languages.toml"), body).unwrap();
}

#[test]
fn test_loads_table_from_file() {
    let dir = TempDir::new().unwrap();
    write_table(
        dir.path(),
        "fr",
        "[languages]\nen = \"Anglais\"\nde = \"Allemand\"\n",
    );
    let context = FileLocaleContext::new(dir.path(), "en");

    let table = context.load("fr").unwrap();

    assert_eq!(table.get("en"), Some("Anglais"));
    assert_eq!(table.get("de"), Some("Allemand"));
    assert_eq!(table.len(), 2);
    assert_eq!(context.current_locale(), "fr");
}

#[test]
fn test_file_overrides_builtin_table() {
    let dir = TempDir::new().unwrap();
    write_table(dir.path(), "de", "[languages]\nen = \"Englische Sprache\"\n");
    let context = FileLocaleContext::new(dir.path(), "en");

    let table = context.load("de").unwrap();
    assert_eq!(table.get("en"), Some("Englische Sprache"));
    assert_eq!(table.get("fr"), None);
}

#[test]
fn test_builtin_tables_without_files() {
    let dir = TempDir::new().unwrap();
    let context = FileLocaleContext::new(dir.path(), "en");

    let german = context.load("de").unwrap();
    assert_eq!(german.get("fr"), Some("Französisch"));
    assert_eq!(german.get("pt-BR"), Some("Brasilianisches Portugiesisch"));

    let english = context.load("en").unwrap();
    assert_eq!(english.get("de"), Some("German"));
}

#[test]
fn test_missing_locale_fails_but_switches() {
    let dir = TempDir::new().unwrap();
    let context = FileLocaleContext::new(dir.path(), "en");

    let result = context.load("nl");

    assert!(matches!(result, Err(DomainError::Locale { ref locale, .. }) if locale == "nl"));
    assert_eq!(context.current_locale(), "nl");
    context.restore("en").unwrap();
    assert_eq!(context.current_locale(), "en");
}

#[test]
fn test_malformed_table_fails() {
    let dir = TempDir::new().unwrap();
    write_table(dir.path(), "fr", "[languages\nen = ");
    let context = FileLocaleContext::new(dir.path(), "en");

    assert!(context.load("fr").is_err());
}

#[test]
fn test_rejects_path_like_locales() {
    let dir = TempDir::new().unwrap();
    let context = FileLocaleContext::new(dir.path(), "en");

    assert!(context.load("../etc").is_err());
}

#[test]
fn test_tables_are_cached_until_invalidated() {
    let dir = TempDir::new().unwrap();
    write_table(dir.path(), "fr", "[languages]\nen = \"Anglais\"\n");
    let context = FileLocaleContext::new(dir.path(), "en");

    context.load("fr").unwrap();
    write_table(dir.path(), "fr", "[languages]\nen = \"Langue anglaise\"\n");
    assert_eq!(context.load("fr").unwrap().get("en"), Some("Anglais"));

    context.invalidate();
    assert_eq!(context.load("fr").unwrap().get("en"), Some("Langue anglaise"));
}

#[test]
fn test_from_config() {
    let dir = TempDir::new().unwrap();
    let config = LocaleConfig {
        translations_dir: dir.path().to_path_buf(),
        default_locale: "de".to_string(),
        ..LocaleConfig::default()
    };

    let context = FileLocaleContext::from_config(&config);

    assert_eq!(context.current_locale(), "de");
    assert_eq!(context.translations_dir(), dir.path());
}

#[test]
fn test_resolver_over_file_tables() {
    let dir = TempDir::new().unwrap();
    write_table(dir.path(), "fr", "[languages]\nen = \"Anglais\"\n");
    let context = Arc::new(FileLocaleContext::new(dir.path(), "it"));
    let resolver = LanguageNameResolver::new(context.clone(), CanonicalCodeTable::builtin());

    let locales = LocalePair::new("fr", "de");
    assert_eq!(resolver.resolve_one(&locales, Some("en")), "Anglais");
    assert_eq!(resolver.resolve_one(&locales, Some("fr")), "Französisch");
    assert_eq!(resolver.resolve_one(&locales, Some("yo")), "Yoruba");
    assert_eq!(context.current_locale(), "it");
}
