//! Trait definitions for the Promptcraft reasoning library.
//!
//! [`PromptDriver`] is the seam between the reasoning core and a remote model.
//! A single driver instance is constructed at process start and shared by
//! every concurrent branch, so implementations must be safe to call
//! concurrently and hold no per-request state.

use async_trait::async_trait;
use promptcraft_core::GenerationRequest;
use promptcraft_error::GenerationResult;
use std::sync::Arc;

/// A text-generation backend.
#[async_trait]
pub trait PromptDriver: Send + Sync {
    /// Issue one generation call and return the model's raw text.
    ///
    /// # Errors
    ///
    /// Returns `RateLimited` on quota exhaustion, `Timeout` when a bounded
    /// wrapper gives up waiting, and `GenerationFailed` for anything else.
    async fn generate(&self, request: &GenerationRequest) -> GenerationResult<String>;

    /// Name of the provider, for logging.
    fn provider_name(&self) -> &'static str;

    /// Model identifier reported in result metadata.
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<D> PromptDriver for Arc<D>
where
    D: PromptDriver + ?Sized,
{
    async fn generate(&self, request: &GenerationRequest) -> GenerationResult<String> {
        (**self).generate(request).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
