//! Sampling settings for the reasoning techniques.

use crate::prompts::PREVIEW_CHARS;
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Temperatures and limits used by [`ReasoningService`](crate::ReasoningService).
///
/// # Examples
///
/// ```
/// use promptcraft_reasoning::ReasoningConfig;
///
/// let config = ReasoningConfig::builder()
///     .evaluation_temperature(0.0)
///     .build()
///     .expect("valid config");
/// assert_eq!(*config.evaluation_temperature(), 0.0);
/// assert_eq!(*config.branch_temperature(), 0.6);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, Builder)]
pub struct ReasoningConfig {
    /// Temperature for each tree-of-thought branch
    #[serde(default = "default_branch_temperature")]
    #[builder(default = "default_branch_temperature()")]
    branch_temperature: f32,
    /// Temperature for self-consistency samples; higher for diversity
    #[serde(default = "default_sample_temperature")]
    #[builder(default = "default_sample_temperature()")]
    sample_temperature: f32,
    /// Temperature for the tree-of-thought evaluation call
    #[serde(default = "default_evaluation_temperature")]
    #[builder(default = "default_evaluation_temperature()")]
    evaluation_temperature: f32,
    /// Temperature for the consistency analysis call
    #[serde(default = "default_analysis_temperature")]
    #[builder(default = "default_analysis_temperature()")]
    analysis_temperature: f32,
    /// Characters of each candidate shown to the evaluation call
    #[serde(default = "default_preview_chars")]
    #[builder(default = "default_preview_chars()")]
    preview_chars: usize,
    /// Thinking budget for every call; `None` uses the client default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    thinking_budget: Option<u32>,
}

impl ReasoningConfig {
    /// Returns a builder for constructing a ReasoningConfig.
    pub fn builder() -> ReasoningConfigBuilder {
        ReasoningConfigBuilder::default()
    }
}

impl Default for ReasoningConfig {
    fn default() -> Self {
        Self {
            branch_temperature: default_branch_temperature(),
            sample_temperature: default_sample_temperature(),
            evaluation_temperature: default_evaluation_temperature(),
            analysis_temperature: default_analysis_temperature(),
            preview_chars: default_preview_chars(),
            thinking_budget: None,
        }
    }
}

fn default_branch_temperature() -> f32 {
    0.6
}

fn default_sample_temperature() -> f32 {
    0.7
}

fn default_evaluation_temperature() -> f32 {
    0.3
}

fn default_analysis_temperature() -> f32 {
    0.2
}

fn default_preview_chars() -> usize {
    PREVIEW_CHARS
}
