//! Language code value type and storage normalization

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::validation::is_valid_language_code;

/// A short language code such as `en`, `de` or `pt-BR`
///
/// The code is kept exactly as written; lookups in language-name tables are
/// case-sensitive, matching how the tables are keyed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Parse and validate a language code
    pub fn parse(value: &str) -> Result<Self, String> {
        let trimmed = value.trim();
        if is_valid_language_code(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(format!("Invalid language code: {:?}", value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for LanguageCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<LanguageCode> for String {
    fn from(code: LanguageCode) -> Self {
        code.0
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Normalize a raw value before it is persisted
///
/// Empty and whitespace-only input becomes `None` (stored as SQL `NULL`);
/// anything else is kept trimmed.
pub fn normalize_stored_value(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_codes() {
        assert_eq!(LanguageCode::parse("en").unwrap().as_str(), "en");
        assert_eq!(LanguageCode::parse(" de ").unwrap().as_str(), "de");
        assert_eq!("pt-BR".parse::<LanguageCode>().unwrap().to_string(), "pt-BR");
    }

    #[test]
    fn test_parse_invalid_codes() {
        assert!(LanguageCode::parse("").is_err());
        assert!(LanguageCode::parse("english").is_err());
        assert!(LanguageCode::parse("12").is_err());
    }

    #[test]
    fn test_serde_validates() {
        let code: LanguageCode = serde_json::from_str("\"es\"").unwrap();
        assert_eq!(code.as_str(), "es");
        assert!(serde_json::from_str::<LanguageCode>("\"not a code\"").is_err());
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"es\"");
    }

    #[test]
    fn test_normalize_stored_value() {
        assert_eq!(normalize_stored_value(Some("")), None);
        assert_eq!(normalize_stored_value(Some("   ")), None);
        assert_eq!(normalize_stored_value(None), None);
        assert_eq!(normalize_stored_value(Some(" en")), Some("en".to_string()));
    }
}
