//! Wall-clock bound on generation calls.

use async_trait::async_trait;
use promptcraft_core::GenerationRequest;
use promptcraft_error::{GenerationError, GenerationResult};
use promptcraft_interface::PromptDriver;
use std::time::Duration;
use tracing::{error, instrument};

/// Bound applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Driver wrapper that fails any call exceeding `limit`.
///
/// The inner future is dropped on expiry, so an abandoned call produces no
/// further effects. No retry is attempted.
///
/// # Examples
///
/// ```
/// use promptcraft_models::{GeminiClient, TimeoutDriver};
/// use std::time::Duration;
///
/// let client = GeminiClient::new("key", "gemini-2.5-flash");
/// let bounded = TimeoutDriver::new(client, Duration::from_secs(5));
/// assert_eq!(bounded.limit(), Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct TimeoutDriver<D> {
    inner: D,
    limit: Duration,
}

impl<D> TimeoutDriver<D> {
    /// Wraps `inner` with the given bound.
    pub fn new(inner: D, limit: Duration) -> Self {
        Self { inner, limit }
    }

    /// Wraps `inner` with [`DEFAULT_TIMEOUT`].
    pub fn with_default_limit(inner: D) -> Self {
        Self::new(inner, DEFAULT_TIMEOUT)
    }

    /// The wrapped driver.
    pub fn inner(&self) -> &D {
        &self.inner
    }

    /// The configured bound.
    pub fn limit(&self) -> Duration {
        self.limit
    }
}

#[async_trait]
impl<D: PromptDriver> PromptDriver for TimeoutDriver<D> {
    #[instrument(skip(self, request), fields(provider = self.inner.provider_name(), limit_ms = self.limit.as_millis() as u64))]
    async fn generate(&self, request: &GenerationRequest) -> GenerationResult<String> {
        match tokio::time::timeout(self.limit, self.inner.generate(request)).await {
            Ok(result) => result,
            Err(_) => {
                error!(
                    limit_secs = self.limit.as_secs_f64(),
                    "Generation call timed out"
                );
                Err(GenerationError::timeout(self.limit))
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        self.inner.provider_name()
    }

    fn model_name(&self) -> &str {
        self.inner.model_name()
    }
}
