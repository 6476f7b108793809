//! Unit tests for domain error types

use crate::errors::{DomainError, ValidationError};

#[test]
fn test_validation_error_messages() {
    let error = ValidationError::InvalidLanguageCode {
        code: "english".to_string(),
    };
    assert_eq!(error.to_string(), "Invalid language code: english");
    assert_eq!(error.code(), "INVALID_LANGUAGE_CODE");
}

#[test]
fn test_validation_error_bridges_into_domain_error() {
    let error: DomainError = ValidationError::UnknownAttributeType {
        type_name: "geo".to_string(),
    }
    .into();

    match &error {
        DomainError::ValidationErr(ValidationError::UnknownAttributeType { type_name }) => {
            assert_eq!(type_name, "geo");
        }
        other => panic!("Expected bridged validation error, got {:?}", other),
    }
    assert_eq!(error.to_string(), "Unknown attribute type: geo");
}

#[test]
fn test_missing_dependency_message() {
    let error = DomainError::MissingDependency { name: "locale_context" };
    assert_eq!(error.to_string(), "Missing dependency: locale_context");
}
