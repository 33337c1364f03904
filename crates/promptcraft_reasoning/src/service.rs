//! The `explore` and `validate_consistency` entry points.

use crate::prompts::{APPROACH_NAMES, approach_prompt, consistency_prompt};
use crate::validation::{validate_consistency, validate_exploration};
use crate::{Aggregator, FanOutExecutor, ReasoningConfig};
use promptcraft_core::{
    Candidate, ConsistencyValidation, Exploration, GenerationRequest, RunMetadata, Technique,
    TechniqueResult,
};
use promptcraft_error::PromptcraftResult;
use promptcraft_interface::PromptDriver;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, instrument, warn};

/// Runs tree-of-thought exploration and self-consistency validation.
///
/// Holds no per-request state; one instance serves any number of
/// concurrent callers. Every run is a fan-out followed by exactly one
/// synthesis call, and any failure aborts the whole run.
///
/// # Examples
///
/// ```no_run
/// use promptcraft_models::{GeminiClient, TimeoutDriver};
/// use promptcraft_reasoning::{ReasoningConfig, ReasoningService};
/// use std::sync::Arc;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let client = TimeoutDriver::with_default_limit(GeminiClient::new("key", "gemini-2.5-flash"));
/// let service = ReasoningService::new(Arc::new(client), ReasoningConfig::default());
///
/// let result = service.explore("How can we reduce plastic waste?", 3).await?;
/// println!("{}", result.output().synthesis().evaluation());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ReasoningService<D: ?Sized> {
    driver: Arc<D>,
    executor: FanOutExecutor<D>,
    aggregator: Aggregator<D>,
    config: ReasoningConfig,
}

impl<D> ReasoningService<D>
where
    D: PromptDriver + ?Sized + 'static,
{
    /// Creates a service sharing `driver` between fan-out and synthesis.
    pub fn new(driver: Arc<D>, config: ReasoningConfig) -> Self {
        Self {
            executor: FanOutExecutor::new(Arc::clone(&driver)),
            aggregator: Aggregator::new(Arc::clone(&driver), config.clone()),
            driver,
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &ReasoningConfig {
        &self.config
    }

    /// Explores up to `max_approaches` named approaches and ranks them.
    ///
    /// Requests beyond the number of named approaches are capped, not
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns a validation error before any call is made if the input is
    /// out of bounds, otherwise the first generation error encountered.
    #[instrument(skip(self, problem), fields(problem_chars = problem.len()))]
    pub async fn explore(
        &self,
        problem: &str,
        max_approaches: usize,
    ) -> PromptcraftResult<TechniqueResult<Exploration>> {
        validate_exploration(problem, max_approaches)?;
        let started = Instant::now();

        let count = max_approaches.min(APPROACH_NAMES.len());
        if count < max_approaches {
            warn!(
                requested = max_approaches,
                available = APPROACH_NAMES.len(),
                "Capping approaches to the named approach list"
            );
        }

        let requests = APPROACH_NAMES
            .iter()
            .take(count)
            .enumerate()
            .map(|(i, name)| {
                let request = GenerationRequest::new(
                    approach_prompt(problem, i + 1, name),
                    *self.config.branch_temperature(),
                )
                .with_thinking_budget(*self.config.thinking_budget());
                ((i + 1, *name), request)
            })
            .collect();

        let candidates: Vec<Candidate> = self
            .executor
            .run_parallel(requests)
            .await?
            .into_iter()
            .map(|((index, name), text)| Candidate::new(index, name, text.trim()))
            .collect();

        let synthesis = self.aggregator.evaluate(problem, &candidates).await?;
        let exploration = Exploration::new(candidates, synthesis);

        let mut metadata = RunMetadata::new(started.elapsed(), self.driver.model_name())
            .with_parameter("max_approaches", max_approaches)
            .with_parameter("thinking_budget", *self.config.thinking_budget());
        if count < max_approaches {
            metadata = metadata.with_parameter("approaches_explored", count);
        }

        info!(
            approaches = exploration.count(),
            elapsed_secs = metadata.processing_time(),
            "Exploration complete"
        );

        Ok(TechniqueResult::new(
            Technique::TreeOfThought,
            problem,
            exploration,
            metadata,
        ))
    }

    /// Samples `num_samples` answers to one prompt and analyses agreement.
    ///
    /// # Errors
    ///
    /// Returns a validation error before any call is made if the input is
    /// out of bounds, otherwise the first generation error encountered.
    #[instrument(skip(self, question), fields(question_chars = question.len()))]
    pub async fn validate_consistency(
        &self,
        question: &str,
        num_samples: usize,
    ) -> PromptcraftResult<TechniqueResult<ConsistencyValidation>> {
        validate_consistency(question, num_samples)?;
        let started = Instant::now();

        let request = GenerationRequest::new(
            consistency_prompt(question),
            *self.config.sample_temperature(),
        )
        .with_thinking_budget(*self.config.thinking_budget());

        let samples = self.executor.sample(&request, num_samples).await?;
        let synthesis = self.aggregator.analyze(question, &samples).await?;
        let validation = ConsistencyValidation::new(samples, synthesis);

        let metadata = RunMetadata::new(started.elapsed(), self.driver.model_name())
            .with_parameter("num_samples", num_samples)
            .with_parameter("thinking_budget", *self.config.thinking_budget());

        info!(
            samples = num_samples,
            inconclusive = validation.synthesis().is_inconclusive(),
            elapsed_secs = metadata.processing_time(),
            "Consistency validation complete"
        );

        Ok(TechniqueResult::new(
            Technique::SelfConsistency,
            question,
            validation,
            metadata,
        ))
    }
}
