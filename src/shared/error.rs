//! Shared Error Types
//!
//! This module defines error types that are shared between the storage layer,
//! the HTTP handlers and the form types. They describe input that was rejected
//! before it reached the datastore.
//!
//! # Error Categories
//!
//! - `ValidationError` - A form field was missing, blank or too long
//!
//! # Usage
//!
//! ```rust
//! use members_only::shared::error::SharedError;
//!
//! let error = SharedError::validation("title", "Title is required");
//! assert!(error.to_string().contains("title"));
//! ```
use thiserror::Error;

/// Shared error types raised while validating user input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            Self::ValidationError { field, .. } => field,
        }
    }
}

/// Check that a form field is present after trimming and within `max_len` chars.
///
/// Returns the trimmed value.
pub fn require_field(field: &str, value: &str, max_len: usize) -> Result<String, SharedError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SharedError::validation(field, format!("{} is required", field)));
    }
    if trimmed.chars().count() > max_len {
        return Err(SharedError::validation(
            field,
            format!("{} must be at most {} characters", field, max_len),
        ));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = SharedError::validation("username", "username is required");
        match error {
            SharedError::ValidationError { field, message } => {
                assert_eq!(field, "username");
                assert_eq!(message, "username is required");
            }
        }
    }

    #[test]
    fn test_error_display() {
        let error = SharedError::validation("title", "Test error");
        let display = format!("{}", error);
        assert!(display.contains("Validation error"));
        assert!(display.contains("'title'"));
    }

    #[test]
    fn test_require_field_trims() {
        assert_eq!(require_field("title", "  hi  ", 10).unwrap(), "hi");
    }

    #[test]
    fn test_require_field_rejects_blank() {
        let err = require_field("title", "   ", 10).unwrap_err();
        assert_eq!(err.field(), "title");
    }

    #[test]
    fn test_require_field_counts_chars_not_bytes() {
        assert!(require_field("title", "ééééé", 5).is_ok());
        assert!(require_field("title", "éééééé", 5).is_err());
    }
}
