//! Validation error types for FaultForge models
//!
//! These errors describe malformed captured events, separate from the
//! general application errors. The formatter itself is total and never
//! produces them; they exist for hosts that validate events at the
//! capture boundary.

use std::fmt;
use thiserror::Error;

/// Main validation error type
#[derive(Error, Debug, Clone)]
pub struct ValidationError {
    /// The kind of validation error
    pub kind: ValidationErrorKind,
    /// The field that failed validation
    pub field: String,
    /// Optional additional context
    pub context: Option<String>,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(kind: ValidationErrorKind, field: impl Into<String>) -> Self {
        Self {
            kind,
            field: field.into(),
            context: None,
        }
    }

    /// Create a validation error with additional context
    pub fn with_context(
        kind: ValidationErrorKind,
        field: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            field: field.into(),
            context: Some(context.into()),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.context {
            Some(ctx) => write!(
                f,
                "Validation failed for field '{}': {} - {}",
                self.field, self.kind, ctx
            ),
            None => write!(
                f,
                "Validation failed for field '{}': {}",
                self.field, self.kind
            ),
        }
    }
}

/// Specific validation error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Field is required to be non-empty
    #[error("Field must not be empty")]
    EmptyField,

    /// Catch-all for custom validation failures
    #[error("{0}")]
    Custom(String),
}

/// A collection of validation errors accumulated across fields
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an error to the collection
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// True if no errors were recorded
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Access the recorded errors
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Return `Ok(value)` if empty, otherwise `Err(self)`
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Joined on "; " so multi-field failures stay on one log line
        let joined = self
            .errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}", joined)
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let error = ValidationError::new(ValidationErrorKind::EmptyField, "kind");
        assert_eq!(
            error.to_string(),
            "Validation failed for field 'kind': Field must not be empty"
        );
    }

    #[test]
    fn test_validation_error_display_with_context() {
        let error = ValidationError::with_context(
            ValidationErrorKind::EmptyField,
            "message",
            "capture produced no description",
        );
        assert!(error.to_string().contains("capture produced no description"));
    }

    #[test]
    fn test_validation_errors_into_result() {
        let empty = ValidationErrors::new();
        assert!(empty.into_result(()).is_ok());

        let mut errors = ValidationErrors::new();
        errors.add(ValidationError::new(ValidationErrorKind::EmptyField, "kind"));
        assert!(errors.into_result(()).is_err());
    }
}
