//! Input validation error types.

/// A single rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{}: {}", field, message)]
pub struct FieldViolation {
    /// Name of the offending field
    pub field: String,
    /// Human-readable reason
    pub message: String,
}

impl FieldViolation {
    /// Create a violation for `field`.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validation error carrying every violated field.
///
/// # Examples
///
/// ```
/// use promptcraft_error::{FieldViolation, ValidationError};
///
/// let err = ValidationError::new(vec![FieldViolation::new(
///     "num_samples",
///     "Field 'num_samples' must be at least 2",
/// )]);
/// assert_eq!(err.violations.len(), 1);
/// assert!(err.to_string().contains("num_samples"));
/// ```
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rejected fields, in the order they were checked
    pub violations: Vec<FieldViolation>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError at the current location.
    #[track_caller]
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            violations,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Returns the violation for `field`, if any.
    pub fn violation(&self, field: &str) -> Option<&FieldViolation> {
        self.violations.iter().find(|v| v.field == field)
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let details = self
            .violations
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        write!(
            f,
            "Validation Error: {} at line {} in {}",
            details, self.line, self.file
        )
    }
}

impl std::error::Error for ValidationError {}
