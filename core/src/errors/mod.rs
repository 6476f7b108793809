//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

pub use types::ValidationError;

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// A required collaborator was not supplied at construction time
    #[error("Missing dependency: {name}")]
    MissingDependency { name: &'static str },

    #[error("Locale error for {locale}: {message}")]
    Locale { locale: String, message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

pub type DomainResult<T> = Result<T, DomainError>;
