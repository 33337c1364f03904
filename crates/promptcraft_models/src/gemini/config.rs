//! Gemini client configuration.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Default Gemini REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Settings for [`GeminiClient`](crate::GeminiClient).
///
/// The API key is never serialized back out.
#[derive(Clone, PartialEq, Serialize, Deserialize, Getters, Builder)]
pub struct GeminiConfig {
    /// API key; usually supplied through `GEMINI_API_KEY`
    #[serde(default, skip_serializing)]
    #[builder(default)]
    api_key: Option<String>,
    /// Model identifier
    #[serde(default = "default_model")]
    #[builder(default = "default_model()", setter(into))]
    model: String,
    /// REST base URL, without trailing slash
    #[serde(default = "default_base_url")]
    #[builder(default = "default_base_url()", setter(into))]
    base_url: String,
    /// Temperature for the connection check; every other request sets its own
    #[serde(default = "default_temperature")]
    #[builder(default = "default_temperature()")]
    default_temperature: f32,
    /// Thinking budget applied when a request carries none
    #[serde(default = "default_thinking_budget")]
    #[builder(default = "default_thinking_budget()")]
    default_thinking_budget: u32,
    /// Wall-clock bound on each generation call, in seconds
    #[serde(default = "default_timeout_secs")]
    #[builder(default = "default_timeout_secs()")]
    timeout_secs: u64,
}

impl GeminiConfig {
    /// Returns a builder for constructing a GeminiConfig.
    pub fn builder() -> GeminiConfigBuilder {
        GeminiConfigBuilder::default()
    }

    /// Returns a copy with the API key replaced.
    pub fn with_api_key(self, api_key: Option<String>) -> Self {
        Self { api_key, ..self }
    }

    /// Returns a copy with the model replaced.
    pub fn with_model(self, model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..self
        }
    }

    /// The per-call timeout as a [`std::time::Duration`].
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            default_temperature: default_temperature(),
            default_thinking_budget: default_thinking_budget(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("default_temperature", &self.default_temperature)
            .field("default_thinking_budget", &self.default_thinking_budget)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_thinking_budget() -> u32 {
    5000
}

fn default_timeout_secs() -> u64 {
    20
}
