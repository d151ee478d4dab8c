//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur during value object construction or state transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("Invalid state transition: {reason}")]
    InvalidTransition { reason: String },
}

impl DomainError {
    /// Creates an empty field error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        DomainError::EmptyField {
            field: field.into(),
        }
    }

    /// Creates an out of range error.
    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        DomainError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid transition error.
    pub fn invalid_transition(reason: impl Into<String>) -> Self {
        DomainError::InvalidTransition {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_displays_field_name() {
        let err = DomainError::empty_field("answer");
        assert_eq!(err.to_string(), "Field 'answer' cannot be empty");
    }

    #[test]
    fn out_of_range_displays_bounds() {
        let err = DomainError::out_of_range("question_index", 0, 8, 12);
        assert_eq!(
            err.to_string(),
            "Field 'question_index' must be between 0 and 8, got 12"
        );
    }
}
