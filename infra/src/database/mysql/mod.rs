//! MySQL implementations of the core repository traits.

mod record_store_impl;
mod schema_inspector_impl;

pub use record_store_impl::MySqlRecordStore;
pub use schema_inspector_impl::MySqlSchemaInspector;

use lc_core::errors::{DomainError, ValidationError};
use lc_shared::utils::is_valid_identifier;

/// Backtick-quote a framework identifier after validating it
pub(crate) fn quote_identifier(identifier: &str) -> Result<String, DomainError> {
    if !is_valid_identifier(identifier) {
        return Err(ValidationError::InvalidIdentifier {
            identifier: identifier.to_string(),
        }
        .into());
    }
    Ok(format!("`{}`", identifier))
}

/// `?, ?, ?` for `count` bind parameters
pub(crate) fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}

/// Map a driver error into a storage error, logging it with context
pub(crate) fn storage_error(context: &str, e: sqlx::Error) -> DomainError {
    tracing::error!(error = %e, event = "storage_query_failed", "{}", context);
    DomainError::Storage {
        message: format!("{}: {}", context, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_identifier() {
        assert_eq!(quote_identifier("mm_books").unwrap(), "`mm_books`");
        assert!(matches!(
            quote_identifier("mm_books`; DROP TABLE x"),
            Err(DomainError::ValidationErr(ValidationError::InvalidIdentifier { .. }))
        ));
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(placeholders(1), "?");
        assert_eq!(placeholders(3), "?, ?, ?");
    }
}
