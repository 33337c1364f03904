//! Synthesis over fan-out results.

use crate::ReasoningConfig;
use crate::prompts::{analysis_prompt, evaluation_prompt};
use promptcraft_core::{
    Candidate, ConsistencySynthesis, GenerationRequest, INCONCLUSIVE_ANSWER,
    TreeOfThoughtSynthesis,
};
use promptcraft_error::GenerationResult;
use promptcraft_interface::PromptDriver;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Lines shorter than this never serve as a fallback answer.
const MIN_ANSWER_CHARS: usize = 10;

/// Issues the single synthesis call that follows a fan-out.
#[derive(Debug)]
pub struct Aggregator<D: ?Sized> {
    driver: Arc<D>,
    config: ReasoningConfig,
}

impl<D> Aggregator<D>
where
    D: PromptDriver + ?Sized,
{
    /// Creates an aggregator using `driver` for synthesis calls.
    pub fn new(driver: Arc<D>, config: ReasoningConfig) -> Self {
        Self { driver, config }
    }

    /// The request [`evaluate`](Self::evaluate) would send.
    pub fn evaluation_request(&self, problem: &str, candidates: &[Candidate]) -> GenerationRequest {
        GenerationRequest::new(
            evaluation_prompt(problem, candidates, *self.config.preview_chars()),
            *self.config.evaluation_temperature(),
        )
        .with_thinking_budget(*self.config.thinking_budget())
    }

    /// Asks the model to rank the candidates by the four fixed criteria.
    ///
    /// # Errors
    ///
    /// Propagates the synthesis call's error unchanged.
    #[instrument(skip_all, fields(candidates = candidates.len()))]
    pub async fn evaluate(
        &self,
        problem: &str,
        candidates: &[Candidate],
    ) -> GenerationResult<TreeOfThoughtSynthesis> {
        let request = self.evaluation_request(problem, candidates);
        let evaluation = self.driver.generate(&request).await?;
        debug!(chars = evaluation.len(), "Evaluation received");
        Ok(TreeOfThoughtSynthesis::new(evaluation.trim()))
    }

    /// The request [`analyze`](Self::analyze) would send.
    pub fn analysis_request(&self, question: &str, samples: &[String]) -> GenerationRequest {
        GenerationRequest::new(
            analysis_prompt(question, samples),
            *self.config.analysis_temperature(),
        )
        .with_thinking_budget(*self.config.thinking_budget())
    }

    /// Asks the model for agreement across samples and extracts one answer.
    ///
    /// # Errors
    ///
    /// Propagates the synthesis call's error unchanged.
    #[instrument(skip_all, fields(samples = samples.len()))]
    pub async fn analyze(
        &self,
        question: &str,
        samples: &[String],
    ) -> GenerationResult<ConsistencySynthesis> {
        let request = self.analysis_request(question, samples);
        let analysis = self.driver.generate(&request).await?;
        let answer = extract_most_consistent_answer(&analysis);
        debug!(answer = %answer, "Consistency analysis received");
        Ok(ConsistencySynthesis::new(
            analysis.trim(),
            samples.len(),
            answer,
        ))
    }
}

/// Picks the answer line out of a consistency analysis.
///
/// Returns the first line mentioning "most consistent" or "most reliable"
/// (case-insensitive), else the last line longer than ten characters, else
/// [`INCONCLUSIVE_ANSWER`]. Returned lines are trimmed.
///
/// # Examples
///
/// ```
/// use promptcraft_reasoning::extract_most_consistent_answer;
///
/// let analysis = "All agree.\nThe most consistent answer is 42\nDone.";
/// assert_eq!(extract_most_consistent_answer(analysis), "The most consistent answer is 42");
/// assert_eq!(extract_most_consistent_answer("ok\n\n"), "Analysis inconclusive");
/// ```
pub fn extract_most_consistent_answer(analysis: &str) -> String {
    let lines: Vec<&str> = analysis.split('\n').collect();

    if let Some(line) = lines.iter().find(|line| {
        let lower = line.to_lowercase();
        lower.contains("most consistent") || lower.contains("most reliable")
    }) {
        return line.trim().to_string();
    }

    lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| line.chars().count() > MIN_ANSWER_CHARS)
        .next_back()
        .map(str::to_string)
        .unwrap_or_else(|| INCONCLUSIVE_ANSWER.to_string())
}
