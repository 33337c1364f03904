//! Tree-of-thought and self-consistency over a shared prompt driver.
//!
//! Both techniques follow the same shape: a [`FanOutExecutor`] issues N
//! generation calls concurrently, then an [`Aggregator`] issues one
//! synthesis call over the results. [`ReasoningService`] validates input
//! and wraps the outcome in a [`TechniqueResult`](promptcraft_core::TechniqueResult).
//!
//! The driver is injected once at construction and shared by every branch.

mod aggregator;
mod config;
mod fan_out;
mod prompts;
mod service;
mod validation;

pub use aggregator::{Aggregator, extract_most_consistent_answer};
pub use config::{ReasoningConfig, ReasoningConfigBuilder};
pub use fan_out::FanOutExecutor;
pub use prompts::{
    APPROACH_NAMES, PREVIEW_CHARS, analysis_prompt, approach_prompt, consistency_prompt,
    evaluation_prompt, truncate_chars,
};
pub use service::ReasoningService;
pub use validation::{
    MAX_APPROACHES_RANGE, NUM_SAMPLES_RANGE, PROBLEM_LENGTH, QUESTION_LENGTH,
    validate_consistency, validate_exploration,
};
