//! Tree-of-thought candidates and evaluation criteria.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// One explored approach, reported in generation order.
///
/// Serialized with the field names API consumers already know
/// (`approach_number`, `approach_name`, `solution`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Candidate {
    /// 1-based ordinal of the approach
    #[serde(rename = "approach_number")]
    index: usize,
    /// Name of the approach, e.g. "Direct Analytical Method"
    #[serde(rename = "approach_name")]
    name: String,
    /// Generated solution text
    #[serde(rename = "solution")]
    text: String,
}

impl Candidate {
    /// Creates a new candidate.
    pub fn new(index: usize, name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Criteria the synthesis call ranks candidates by.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumCount,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EvaluationCriterion {
    /// Effectiveness in solving the problem
    Effectiveness,
    /// Feasibility of implementation
    Feasibility,
    /// Completeness of the solution
    Completeness,
    /// Innovation and creativity
    Innovation,
}

impl EvaluationCriterion {
    /// All criteria in ranking order.
    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }

    /// The phrasing used when asking the model to rank by this criterion.
    pub fn description(&self) -> &'static str {
        match self {
            EvaluationCriterion::Effectiveness => "Effectiveness in solving the problem",
            EvaluationCriterion::Feasibility => "Feasibility of implementation",
            EvaluationCriterion::Completeness => "Completeness of the solution",
            EvaluationCriterion::Innovation => "Innovation and creativity",
        }
    }
}
