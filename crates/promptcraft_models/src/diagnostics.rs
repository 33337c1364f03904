//! Connection checks and prompt inspection.

use derive_getters::Getters;
use promptcraft_core::GenerationRequest;
use promptcraft_interface::PromptDriver;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Prompt sent by [`check_connection`].
pub const CONNECTION_TEST_PROMPT: &str = "Respond with exactly: 'Connection test successful'";

const MAX_PROMPT_CHARS: usize = 30_000;
const MIN_PROMPT_CHARS: usize = 5;

/// Outcome of a live connection test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ConnectionReport {
    /// Whether the model answered with the expected phrase
    #[serde(rename = "gemini_api")]
    connected: bool,
    /// Model that was contacted
    model: String,
    /// Raw reply, when the call succeeded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    response: Option<String>,
    /// Failure description, when the call failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    /// Summary line
    message: String,
}

impl ConnectionReport {
    /// Report for a call that returned text.
    pub fn from_response(model: impl Into<String>, response: String) -> Self {
        let connected = response.to_lowercase().contains("successful");
        Self {
            connected,
            model: model.into(),
            response: Some(response),
            error: None,
            message: if connected {
                "Connection successful".to_string()
            } else {
                "Connection failed".to_string()
            },
        }
    }

    /// Report for a call that failed.
    pub fn from_error(model: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            connected: false,
            model: model.into(),
            response: None,
            error: Some(error.into()),
            message: "Connection failed".to_string(),
        }
    }
}

/// Sends [`CONNECTION_TEST_PROMPT`] through `driver` and reports whether the
/// model answered as expected.
///
/// The request carries no thinking budget, so the driver's default applies.
/// Models that require thinking (e.g. `gemini-2.5-pro`) reject a budget of 0.
///
/// Never fails; errors are folded into the report. Pass a
/// [`TimeoutDriver`](crate::TimeoutDriver) to bound the check.
#[instrument(skip(driver), fields(model = %driver.model_name()))]
pub async fn check_connection<D>(driver: &D, temperature: f32) -> ConnectionReport
where
    D: PromptDriver + ?Sized,
{
    info!("Testing API connection");
    let request = GenerationRequest::new(CONNECTION_TEST_PROMPT, temperature);

    match driver.generate(&request).await {
        Ok(response) => {
            let report = ConnectionReport::from_response(driver.model_name(), response);
            info!(connected = report.connected(), "Connection test finished");
            report
        }
        Err(e) => {
            warn!(error = %e, "Connection test failed");
            ConnectionReport::from_error(driver.model_name(), e.kind().to_string())
        }
    }
}

/// Static model and client settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct ModelInfo {
    /// Model identifier
    model_name: String,
    /// Default sampling temperature
    default_temperature: f32,
    /// Default thinking budget
    default_thinking_budget: u32,
    /// Whether an API key is present
    api_key_configured: bool,
}

impl ModelInfo {
    /// Creates model info.
    pub fn new(
        model_name: impl Into<String>,
        default_temperature: f32,
        default_thinking_budget: u32,
        api_key_configured: bool,
    ) -> Self {
        Self {
            model_name: model_name.into(),
            default_temperature,
            default_thinking_budget,
            api_key_configured,
        }
    }
}

/// Pre-flight findings for a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct PromptInspection {
    /// True when no issues were found
    valid: bool,
    /// Human-readable findings
    issues: Vec<String>,
    /// Prompt length in characters
    length: usize,
    /// Rough token estimate (four characters per token)
    estimated_tokens: usize,
}

/// Checks a prompt for obvious problems before it is sent.
///
/// # Examples
///
/// ```
/// use promptcraft_models::inspect_prompt;
///
/// let report = inspect_prompt("Explain {topic");
/// assert!(!report.valid());
/// assert_eq!(report.issues(), &vec!["Unmatched curly braces in prompt".to_string()]);
/// ```
pub fn inspect_prompt(prompt: &str) -> PromptInspection {
    let length = prompt.chars().count();
    let mut issues = Vec::new();

    if prompt.trim().is_empty() {
        issues.push("Prompt is empty".to_string());
    }
    if length > MAX_PROMPT_CHARS {
        issues.push("Prompt may be too long".to_string());
    }
    if length < MIN_PROMPT_CHARS {
        issues.push("Prompt may be too short".to_string());
    }
    if prompt.contains('{') && !prompt.contains('}') {
        issues.push("Unmatched curly braces in prompt".to_string());
    }

    PromptInspection {
        valid: issues.is_empty(),
        issues,
        length,
        estimated_tokens: length / 4,
    }
}
