//! Common utility functions

pub mod fold;
pub mod validation;

pub use fold::{fold_to_ascii, sort_key};
pub use validation::{is_valid_identifier, is_valid_language_code, LANGUAGE_CODE_MAX_LEN};
