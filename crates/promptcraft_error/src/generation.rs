//! Generation error types and retry classification.

use std::time::Duration;

/// Failure conditions of a single generation call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GenerationErrorKind {
    /// The call did not finish within its time bound
    Timeout {
        /// The bound that was exceeded
        limit: Duration,
    },
    /// The remote model reported quota exhaustion (HTTP 429 / RESOURCE_EXHAUSTED)
    RateLimited(String),
    /// Any other remote-side or transport failure
    GenerationFailed(String),
}

impl std::fmt::Display for GenerationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationErrorKind::Timeout { limit } => write!(
                f,
                "Request timed out after {:.3} seconds",
                limit.as_secs_f64()
            ),
            GenerationErrorKind::RateLimited(msg) => {
                write!(f, "Rate limit exceeded: {}", msg)
            }
            GenerationErrorKind::GenerationFailed(msg) => {
                write!(f, "Failed to generate response: {}", msg)
            }
        }
    }
}

impl GenerationErrorKind {
    /// Check if a caller may reasonably retry after this error.
    ///
    /// The client itself never retries; this only classifies.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            GenerationErrorKind::Timeout { .. } | GenerationErrorKind::RateLimited(_)
        )
    }

    /// Suggested retry parameters as `(initial_backoff_ms, max_retries, max_delay_secs)`.
    pub fn retry_strategy_params(&self) -> (u64, usize, u64) {
        match self {
            GenerationErrorKind::RateLimited(_) => (5000, 3, 60),
            GenerationErrorKind::Timeout { .. } => (1000, 2, 20),
            GenerationErrorKind::GenerationFailed(_) => (2000, 0, 0),
        }
    }
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use promptcraft_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::RateLimited("quota".to_string()));
/// assert!(err.is_rate_limited());
/// assert!(format!("{}", err).contains("Rate limit exceeded"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    kind: GenerationErrorKind,
    line: u32,
    file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for a [`GenerationErrorKind::Timeout`] error.
    #[track_caller]
    pub fn timeout(limit: Duration) -> Self {
        Self::new(GenerationErrorKind::Timeout { limit })
    }

    /// Shorthand for a [`GenerationErrorKind::RateLimited`] error.
    #[track_caller]
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(GenerationErrorKind::RateLimited(message.into()))
    }

    /// Shorthand for a [`GenerationErrorKind::GenerationFailed`] error.
    #[track_caller]
    pub fn failed(message: impl Into<String>) -> Self {
        Self::new(GenerationErrorKind::GenerationFailed(message.into()))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GenerationErrorKind {
        &self.kind
    }

    /// Line number where the error was created.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// File where the error was created.
    pub fn file(&self) -> &'static str {
        self.file
    }

    /// True when the remote signalled quota exhaustion.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self.kind, GenerationErrorKind::RateLimited(_))
    }

    /// True when the call exceeded its time bound.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, GenerationErrorKind::Timeout { .. })
    }
}

impl From<GenerationErrorKind> for GenerationError {
    #[track_caller]
    fn from(kind: GenerationErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Result type for single generation calls.
pub type GenerationResult<T> = Result<T, GenerationError>;

/// Trait for errors that support retry classification.
///
/// Retry policy is the caller's responsibility. Implementors only report
/// whether a retry makes sense and with which parameters.
///
/// # Examples
///
/// ```
/// use promptcraft_error::{GenerationError, RetryableError};
/// use std::time::Duration;
///
/// let err = GenerationError::timeout(Duration::from_secs(20));
/// assert!(err.is_retryable());
///
/// let err = GenerationError::failed("bad request");
/// assert!(!err.is_retryable());
/// ```
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    fn is_retryable(&self) -> bool;

    /// Returns `(initial_backoff_ms, max_retries, max_delay_secs)`.
    fn retry_strategy_params(&self) -> (u64, usize, u64) {
        (2000, 3, 60)
    }
}

impl RetryableError for GenerationError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }

    fn retry_strategy_params(&self) -> (u64, usize, u64) {
        self.kind.retry_strategy_params()
    }
}
