//! Validation error types for attribute values and configuration

use thiserror::Error;

/// Validation failures raised before anything reaches storage
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid language code: {code}")]
    InvalidLanguageCode { code: String },

    #[error("Invalid SQL identifier: {identifier}")]
    InvalidIdentifier { identifier: String },

    #[error("Unknown attribute type: {type_name}")]
    UnknownAttributeType { type_name: String },

    #[error("Attribute type mismatch: expected {expected}, got {actual}")]
    AttributeTypeMismatch { expected: String, actual: String },
}

impl ValidationError {
    /// Stable machine-readable code for the error
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::InvalidLanguageCode { .. } => "INVALID_LANGUAGE_CODE",
            ValidationError::InvalidIdentifier { .. } => "INVALID_IDENTIFIER",
            ValidationError::UnknownAttributeType { .. } => "UNKNOWN_ATTRIBUTE_TYPE",
            ValidationError::AttributeTypeMismatch { .. } => "ATTRIBUTE_TYPE_MISMATCH",
        }
    }
}
