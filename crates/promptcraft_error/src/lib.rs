//! Error types for the Promptcraft library.
//!
//! This crate provides the error taxonomy shared by every Promptcraft crate:
//! generation failures (timeout, rate limit, remote failure), configuration
//! errors and input validation errors, unified under [`PromptcraftError`].

mod config;
mod generation;
mod validation;

pub use config::{API_KEY_VAR, ConfigError};
pub use generation::{GenerationError, GenerationErrorKind, GenerationResult, RetryableError};
pub use validation::{FieldViolation, ValidationError};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum PromptcraftErrorKind {
    /// A generation call failed
    Generation(GenerationError),
    /// Configuration error
    Config(ConfigError),
    /// Input rejected before any generation call was issued
    Validation(ValidationError),
}

impl std::fmt::Display for PromptcraftErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptcraftErrorKind::Generation(e) => write!(f, "{}", e),
            PromptcraftErrorKind::Config(e) => write!(f, "{}", e),
            PromptcraftErrorKind::Validation(e) => write!(f, "{}", e),
        }
    }
}

/// Promptcraft error with kind discrimination.
#[derive(Debug)]
pub struct PromptcraftError(Box<PromptcraftErrorKind>);

impl PromptcraftError {
    /// Create a new error from a kind.
    pub fn new(kind: PromptcraftErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PromptcraftErrorKind {
        &self.0
    }

    /// Returns the underlying generation error, if that is what failed.
    pub fn as_generation(&self) -> Option<&GenerationError> {
        match self.kind() {
            PromptcraftErrorKind::Generation(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the underlying validation error, if the input was rejected.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self.kind() {
            PromptcraftErrorKind::Validation(e) => Some(e),
            _ => None,
        }
    }
}

impl std::fmt::Display for PromptcraftError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Promptcraft Error: {}", self.0)
    }
}

impl std::error::Error for PromptcraftError {}

// Generic From implementation for any type that converts to PromptcraftErrorKind
impl<T> From<T> for PromptcraftError
where
    T: Into<PromptcraftErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Promptcraft operations.
pub type PromptcraftResult<T> = std::result::Result<T, PromptcraftError>;
