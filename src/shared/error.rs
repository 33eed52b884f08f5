//! Shared Error Types
//!
//! Errors raised while checking request payloads before they reach the
//! services. They never involve the database, so they can be produced (and
//! tested) without a running server.
//!
//! # Usage
//!
//! ```
//! use mdd::shared::error::SharedError;
//!
//! let error = SharedError::validation("name", "Topic name is required");
//! assert_eq!(error.field(), "name");
//! ```
use thiserror::Error;

/// Input rejected before any persistence work happened
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

/// Fails with a validation error when `value` is empty or only whitespace.
pub fn require_non_blank(field: &str, value: &str, message: &str) -> Result<(), SharedError> {
    if value.trim().is_empty() {
        return Err(SharedError::validation(field, message));
    }
    Ok(())
}

/// Fails with a validation error when `value` holds more than `max` characters.
pub fn require_max_chars(field: &str, value: &str, max: usize) -> Result<(), SharedError> {
    if value.chars().count() > max {
        return Err(SharedError::validation(
            field,
            format!("must not exceed {} characters", max),
        ));
    }
    Ok(())
}

/// Basic email shape check; the store's unique index does the rest.
pub fn require_email(field: &str, value: &str) -> Result<(), SharedError> {
    require_non_blank(field, value, "Email is required")?;
    if !value.contains('@') {
        return Err(SharedError::validation(field, "Invalid email format"));
    }
    Ok(())
}
