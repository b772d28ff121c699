//! Record error types

use thiserror::Error;

use super::form::FieldErrors;

/// Errors that can occur when mutating records
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    /// No record with the given id exists in the store
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Form input failed validation
    #[error(transparent)]
    Validation(#[from] FieldErrors),
}

/// Result type alias for record operations
pub type RecordResult<T> = Result<T, RecordError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::form::{FieldError, FormField};

    #[test]
    fn test_error_display() {
        let err = RecordError::NotFound("abc".to_string());
        assert_eq!(err.to_string(), "Record not found: abc");

        let err: RecordError = FieldErrors(vec![FieldError::new(
            FormField::Date,
            "Please select a date",
        )])
        .into();
        assert_eq!(err.to_string(), "date: Please select a date");
    }
}
