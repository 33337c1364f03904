//! Aggregation summaries produced by the synthesis call.

use crate::EvaluationCriterion;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Returned when no line of a consistency analysis qualifies as an answer.
pub const INCONCLUSIVE_ANSWER: &str = "Analysis inconclusive";

/// Ranking of tree-of-thought candidates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct TreeOfThoughtSynthesis {
    /// Model output, verbatim apart from surrounding whitespace
    evaluation: String,
    /// The fixed criteria the model was asked to rank by
    selection_criteria: Vec<EvaluationCriterion>,
}

impl TreeOfThoughtSynthesis {
    /// Creates a synthesis carrying the standard four criteria.
    pub fn new(evaluation: impl Into<String>) -> Self {
        Self {
            evaluation: evaluation.into(),
            selection_criteria: EvaluationCriterion::all(),
        }
    }
}

/// Agreement analysis across self-consistency samples.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct ConsistencySynthesis {
    /// Model output, verbatim apart from surrounding whitespace
    analysis: String,
    /// Number of samples the analysis covered
    response_count: usize,
    /// Line picked out of `analysis` by the answer heuristic
    most_consistent_answer: String,
}

impl ConsistencySynthesis {
    /// Creates a new consistency synthesis.
    pub fn new(
        analysis: impl Into<String>,
        response_count: usize,
        most_consistent_answer: impl Into<String>,
    ) -> Self {
        Self {
            analysis: analysis.into(),
            response_count,
            most_consistent_answer: most_consistent_answer.into(),
        }
    }

    /// True when the heuristic fell through to the inconclusive sentinel.
    pub fn is_inconclusive(&self) -> bool {
        self.most_consistent_answer == INCONCLUSIVE_ANSWER
    }
}
