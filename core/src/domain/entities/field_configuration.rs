//! Stored settings of a langcode attribute.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

/// Setting names specific to the langcode attribute
pub const LANGCODE_SETTING_NAMES: [&str; 5] = [
    "langcodes",
    "filterable",
    "searchable",
    "mandatory",
    "includeBlankOption",
];

/// Configuration of one langcode field
///
/// Flags arrive from the attribute table in several shapes (`true`, `1`,
/// `"1"`, `""`), all of which are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfiguration {
    /// Codes a record may hold, in configured order
    #[serde(default, deserialize_with = "deserialize_codes")]
    pub langcodes: Vec<String>,

    #[serde(default, deserialize_with = "deserialize_flag")]
    pub filterable: bool,

    #[serde(default, deserialize_with = "deserialize_flag")]
    pub searchable: bool,

    #[serde(default, deserialize_with = "deserialize_flag")]
    pub mandatory: bool,

    #[serde(default, deserialize_with = "deserialize_flag")]
    pub include_blank_option: bool,
}

impl FieldConfiguration {
    /// Configuration allowing the given codes with all flags off
    pub fn with_langcodes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            langcodes: codes.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Whether a code belongs to the allowed set
    pub fn allows(&self, code: &str) -> bool {
        self.langcodes.iter().any(|c| c == code)
    }

    /// The allowed codes as a set
    pub fn allowed_set(&self) -> HashSet<&str> {
        self.langcodes.iter().map(String::as_str).collect()
    }
}

fn deserialize_codes<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let codes: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(codes
        .unwrap_or_default()
        .into_iter()
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect())
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Bool(b) => b,
        serde_json::Value::Number(n) => n.as_i64().map_or(false, |n| n != 0),
        serde_json::Value::String(s) => !matches!(s.trim(), "" | "0" | "false"),
        _ => false,
    })
}
