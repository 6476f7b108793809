//! Type definitions
//!
//! - `language` - The language code value type and storage normalization

pub mod language;

pub use language::{normalize_stored_value, LanguageCode};
