//! # Langcode Core
//!
//! Core domain layer of the langcode attribute: domain entities and value
//! objects, the language-name resolver, the attribute implementation with its
//! registration, the allow-null migration, repository interfaces and error
//! types.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
