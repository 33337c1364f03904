//! Per-request results and their metadata.

use crate::{Candidate, ConsistencySynthesis, TreeOfThoughtSynthesis};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Prompting technique that produced a result.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::AsRefStr,
)]
pub enum Technique {
    /// Parallel named approaches followed by a best-pick evaluation
    #[serde(rename = "Tree-of-Thought")]
    #[strum(serialize = "Tree-of-Thought")]
    TreeOfThought,
    /// Repeated sampling followed by an agreement analysis
    #[serde(rename = "Self-Consistency")]
    #[strum(serialize = "Self-Consistency")]
    SelfConsistency,
}

impl Technique {
    /// Task label reported alongside the technique.
    pub fn task(&self) -> &'static str {
        match self {
            Technique::TreeOfThought => "multi_approach_exploration",
            Technique::SelfConsistency => "consistency_validation",
        }
    }
}

/// Output of `explore`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Exploration {
    /// Candidates in submission order
    #[serde(rename = "explored_approaches")]
    approaches: Vec<Candidate>,
    /// Best-pick evaluation
    #[serde(rename = "best_approach")]
    synthesis: TreeOfThoughtSynthesis,
    /// Number of candidates actually generated
    #[serde(rename = "total_approaches")]
    count: usize,
}

impl Exploration {
    /// Creates an exploration; `count` is derived from `approaches`.
    pub fn new(approaches: Vec<Candidate>, synthesis: TreeOfThoughtSynthesis) -> Self {
        let count = approaches.len();
        Self {
            approaches,
            synthesis,
            count,
        }
    }
}

/// Output of `validate_consistency`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ConsistencyValidation {
    /// Raw sample texts
    #[serde(rename = "all_responses")]
    samples: Vec<String>,
    /// Agreement analysis
    #[serde(rename = "consistency_analysis")]
    synthesis: ConsistencySynthesis,
    /// Copy of the synthesis' most consistent answer
    final_answer: String,
    /// Number of samples requested
    num_samples: usize,
}

impl ConsistencyValidation {
    /// Creates a validation; `final_answer` mirrors the synthesis.
    pub fn new(samples: Vec<String>, synthesis: ConsistencySynthesis) -> Self {
        let final_answer = synthesis.most_consistent_answer().clone();
        let num_samples = samples.len();
        Self {
            samples,
            synthesis,
            final_answer,
            num_samples,
        }
    }
}

/// Timing and model metadata attached to every technique result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct RunMetadata {
    /// Wall-clock seconds, rounded to milliseconds
    processing_time: f64,
    /// Model that served the generation calls
    model: String,
    /// Technique-specific parameters (e.g. `max_approaches`)
    #[serde(flatten)]
    parameters: BTreeMap<String, serde_json::Value>,
}

impl RunMetadata {
    /// Creates metadata from an elapsed duration.
    pub fn new(elapsed: Duration, model: impl Into<String>) -> Self {
        Self {
            processing_time: (elapsed.as_secs_f64() * 1000.0).round() / 1000.0,
            model: model.into(),
            parameters: BTreeMap::new(),
        }
    }

    /// Adds a named parameter.
    pub fn with_parameter(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }
}

/// Result of one technique invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechniqueResult<T> {
    /// Technique that produced the output
    technique: Technique,
    /// Task label
    task: String,
    /// The caller's input, as given
    input: String,
    /// Technique output
    output: T,
    /// Timing and model metadata
    metadata: RunMetadata,
}

impl<T> TechniqueResult<T> {
    /// Creates a result for `technique`.
    pub fn new(
        technique: Technique,
        input: impl Into<String>,
        output: T,
        metadata: RunMetadata,
    ) -> Self {
        Self {
            technique,
            task: technique.task().to_string(),
            input: input.into(),
            output,
            metadata,
        }
    }

    /// Technique that produced the output.
    pub fn technique(&self) -> Technique {
        self.technique
    }

    /// Task label.
    pub fn task(&self) -> &str {
        &self.task
    }

    /// The caller's input.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Technique output.
    pub fn output(&self) -> &T {
        &self.output
    }

    /// Timing and model metadata.
    pub fn metadata(&self) -> &RunMetadata {
        &self.metadata
    }

    /// Consumes the result, returning the technique output.
    pub fn into_output(self) -> T {
        self.output
    }
}
