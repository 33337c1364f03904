//! Gemini REST client.

use crate::gemini::{
    ApiErrorResponse, Content, GeminiConfig, GenerateContentRequest, GenerateContentResponse,
    GenerationConfig, ThinkingConfig, DEFAULT_BASE_URL,
};
use crate::{ConnectionReport, ModelInfo, check_connection};
use async_trait::async_trait;
use promptcraft_core::GenerationRequest;
use promptcraft_error::{ConfigError, GenerationError, GenerationResult};
use promptcraft_interface::PromptDriver;
use reqwest::{Client, StatusCode};
use tracing::{debug, error, info, instrument, warn};

/// Client for Google's Gemini `generateContent` API.
///
/// Holds only static configuration, so one instance can be shared by any
/// number of concurrent callers. Calls are not time-bounded here; wrap the
/// client in [`TimeoutDriver`](crate::TimeoutDriver) for that.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    default_temperature: f32,
    default_thinking_budget: u32,
}

impl GeminiClient {
    /// Creates a client with default endpoint and sampling settings.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let defaults = GeminiConfig::default();
        let model = model.into();
        debug!(model = %model, "Created Gemini client");
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
            default_temperature: *defaults.default_temperature(),
            default_thinking_budget: *defaults.default_thinking_budget(),
        }
    }

    /// Creates a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is configured.
    #[instrument(skip(config), fields(model = %config.model()))]
    pub fn from_config(config: &GeminiConfig) -> Result<Self, ConfigError> {
        let api_key = config
            .api_key()
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ConfigError::missing_api_key())?;

        info!(model = %config.model(), "Gemini client initialized");

        Ok(Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            model: config.model().clone(),
            base_url: config.base_url().trim_end_matches('/').to_string(),
            default_temperature: *config.default_temperature(),
            default_thinking_budget: *config.default_thinking_budget(),
        })
    }

    /// Points the client at a different base URL.
    pub fn with_base_url(self, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..self
        }
    }

    /// Temperature for the connection check, also reported in [`ModelInfo`].
    ///
    /// Ordinary requests always carry their own temperature, so this value
    /// never overrides one.
    pub fn default_temperature(&self) -> f32 {
        self.default_temperature
    }

    /// Thinking budget applied when a request carries none.
    pub fn default_thinking_budget(&self) -> u32 {
        self.default_thinking_budget
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn to_wire(&self, request: &GenerationRequest) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content::user_text(request.prompt().clone())],
            generation_config: GenerationConfig {
                temperature: *request.temperature(),
                max_output_tokens: *request.max_output_tokens(),
                thinking_config: ThinkingConfig {
                    thinking_budget: request
                        .thinking_budget()
                        .unwrap_or(self.default_thinking_budget),
                },
            },
        }
    }

    /// Runs [`check_connection`] at the default temperature.
    ///
    /// The call is not time-bounded; the CLI runs the check through its
    /// [`TimeoutDriver`](crate::TimeoutDriver) instead.
    pub async fn test_connection(&self) -> ConnectionReport {
        check_connection(self, self.default_temperature).await
    }

    /// Static information about this client's model and defaults.
    pub fn model_info(&self) -> ModelInfo {
        ModelInfo::new(
            &self.model,
            self.default_temperature,
            self.default_thinking_budget,
            !self.api_key.is_empty(),
        )
    }
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("default_temperature", &self.default_temperature)
            .field("default_thinking_budget", &self.default_thinking_budget)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl PromptDriver for GeminiClient {
    #[instrument(skip(self, request), fields(model = %self.model, prompt_chars = request.prompt().len()))]
    async fn generate(&self, request: &GenerationRequest) -> GenerationResult<String> {
        let body = self.to_wire(request);

        debug!(
            temperature = body.generation_config.temperature,
            thinking_budget = body.generation_config.thinking_config.thinking_budget,
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                GenerationError::failed(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "Gemini API error");
            return Err(classify_failure(status, &error_text));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            GenerationError::failed(format!("Failed to parse JSON: {}", e))
        })?;

        let text = parsed.first_text().ok_or_else(|| {
            let reason = parsed
                .candidates
                .first()
                .and_then(|c| c.finish_reason.clone())
                .unwrap_or_else(|| "no candidates".to_string());
            warn!(reason = %reason, "Response carried no text");
            GenerationError::failed(format!("Response contained no text ({})", reason))
        })?;

        if let Some(usage) = &parsed.usage_metadata {
            debug!(
                prompt_tokens = ?usage.prompt_token_count,
                output_tokens = ?usage.candidates_token_count,
                thought_tokens = ?usage.thoughts_token_count,
                "Received response"
            );
        }

        Ok(text)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// Maps a non-success response onto the generation error taxonomy.
fn classify_failure(status: StatusCode, body: &str) -> GenerationError {
    let detail = serde_json::from_str::<ApiErrorResponse>(body).ok();
    let message = detail
        .as_ref()
        .map(|d| d.error.message.clone())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| body.to_string());
    let exhausted = body.contains("RESOURCE_EXHAUSTED")
        || detail
            .as_ref()
            .and_then(|d| d.error.status.as_deref())
            .is_some_and(|s| s == "RESOURCE_EXHAUSTED");

    if status == StatusCode::TOO_MANY_REQUESTS || exhausted {
        GenerationError::rate_limited(message)
    } else {
        GenerationError::failed(format!("HTTP {}: {}", status.as_u16(), message))
    }
}
