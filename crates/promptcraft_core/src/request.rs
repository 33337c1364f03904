//! Generation request type.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A single generation call: prompt text plus sampling parameters.
///
/// Requests are immutable once built; fan-out clones them per branch.
///
/// # Examples
///
/// ```
/// use promptcraft_core::GenerationRequest;
///
/// let request = GenerationRequest::builder()
///     .prompt("Summarize the problem")
///     .temperature(0.3)
///     .thinking_budget(Some(2000))
///     .build()
///     .expect("valid request");
///
/// assert_eq!(request.prompt(), "Summarize the problem");
/// assert_eq!(*request.thinking_budget(), Some(2000));
/// assert!(GenerationRequest::builder().prompt("x").temperature(1.5).build().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, Builder)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct GenerationRequest {
    /// Prompt text sent as a single user turn
    #[builder(setter(into))]
    prompt: String,
    /// Sampling temperature in `0.0..=1.0`
    temperature: f32,
    /// Reasoning budget; `None` defers to the client's default
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    thinking_budget: Option<u32>,
    /// Upper bound on generated tokens
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

impl GenerationRequest {
    /// Creates a request with no explicit budget or output limit.
    pub fn new(prompt: impl Into<String>, temperature: f32) -> Self {
        Self {
            prompt: prompt.into(),
            temperature,
            thinking_budget: None,
            max_output_tokens: None,
        }
    }

    /// Returns a builder for constructing a GenerationRequest.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }

    /// Returns a copy of this request with the given thinking budget.
    pub fn with_thinking_budget(self, budget: Option<u32>) -> Self {
        Self {
            thinking_budget: budget,
            ..self
        }
    }
}

impl GenerationRequestBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.temperature {
            Some(temperature) if !(0.0..=1.0).contains(&temperature) => Err(format!(
                "temperature must be within 0.0..=1.0, got {}",
                temperature
            )),
            _ => Ok(()),
        }
    }
}
