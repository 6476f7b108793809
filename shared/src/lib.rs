//! Shared utilities and common types for the langcode attribute
//!
//! This crate provides common functionality used across the workspace:
//! - Configuration types and layered loading
//! - The `LanguageCode` value type
//! - ASCII folding for display-name sort keys
//! - Identifier and language code validation

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, DatabaseConfig, Environment, LocaleConfig, LogFormat, LoggingConfig};
pub use types::{normalize_stored_value, LanguageCode};
pub use utils::{fold, validation};
