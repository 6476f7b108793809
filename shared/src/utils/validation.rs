//! Validation helpers for language codes and SQL identifiers

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum stored width of a language code column
pub const LANGUAGE_CODE_MAX_LEN: usize = 5;

/// Two or three letters, optionally followed by a two-letter region
static LANGUAGE_CODE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}(?:[-_][A-Za-z]{2})?$").expect("language code pattern is valid")
});

/// Table and column names the framework generates
static IDENTIFIER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]{0,63}$").expect("identifier pattern is valid"));

/// Check whether a string has the shape of a storable language code
pub fn is_valid_language_code(value: &str) -> bool {
    value.len() >= 2 && value.len() <= LANGUAGE_CODE_MAX_LEN && LANGUAGE_CODE_PATTERN.is_match(value)
}

/// Check whether a string is safe to interpolate as a quoted SQL identifier
pub fn is_valid_identifier(value: &str) -> bool {
    IDENTIFIER_PATTERN.is_match(value)
}
