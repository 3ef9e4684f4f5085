//! Error types for the domain layer.

use thiserror::Error;

/// Errors raised when caller input violates a stated constraint.
///
/// Every variant names the offending field so the HTTP layer can report it
/// alongside a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must have at least {min} characters, got {actual}")]
    TooShort {
        field: String,
        min: usize,
        actual: usize,
    },

    #[error("Field '{field}' must have at most {max} characters, got {actual}")]
    TooLong {
        field: String,
        max: usize,
        actual: usize,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Field '{field}' accepts at most {max} items, got {actual}")]
    TooManyItems {
        field: String,
        max: usize,
        actual: usize,
    },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
        }
    }

    /// Creates a minimum length validation error.
    pub fn too_short(field: impl Into<String>, min: usize, actual: usize) -> Self {
        ValidationError::TooShort {
            field: field.into(),
            min,
            actual,
        }
    }

    /// Creates a maximum length validation error.
    pub fn too_long(field: impl Into<String>, max: usize, actual: usize) -> Self {
        ValidationError::TooLong {
            field: field.into(),
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a collection size validation error.
    pub fn too_many_items(field: impl Into<String>, max: usize, actual: usize) -> Self {
        ValidationError::TooManyItems {
            field: field.into(),
            max,
            actual,
        }
    }

    /// Name of the field that failed validation.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::TooShort { field, .. }
            | ValidationError::TooLong { field, .. }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::TooManyItems { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("prompt");
        assert_eq!(format!("{}", err), "Field 'prompt' cannot be empty");
    }

    #[test]
    fn validation_error_too_short_displays_correctly() {
        let err = ValidationError::too_short("prompt", 10, 3);
        assert_eq!(
            format!("{}", err),
            "Field 'prompt' must have at least 10 characters, got 3"
        );
    }

    #[test]
    fn validation_error_too_long_displays_correctly() {
        let err = ValidationError::too_long("instruction", 500, 501);
        assert_eq!(
            format!("{}", err),
            "Field 'instruction' must have at most 500 characters, got 501"
        );
    }

    #[test]
    fn validation_error_invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("current_document", "not HTML");
        assert_eq!(
            format!("{}", err),
            "Field 'current_document' has invalid format: not HTML"
        );
    }

    #[test]
    fn validation_error_exposes_field_for_every_variant() {
        assert_eq!(ValidationError::empty_field("a").field(), "a");
        assert_eq!(ValidationError::too_short("b", 1, 0).field(), "b");
        assert_eq!(ValidationError::too_long("c", 1, 2).field(), "c");
        assert_eq!(ValidationError::invalid_format("d", "x").field(), "d");
        assert_eq!(ValidationError::too_many_items("e", 10, 11).field(), "e");
    }
}
