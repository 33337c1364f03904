//! Core data types for the Promptcraft reasoning library.
//!
//! Every type here is created fresh per request and never mutated after
//! construction.

mod candidate;
mod request;
mod result;
mod synthesis;

pub use candidate::{Candidate, EvaluationCriterion};
pub use request::{GenerationRequest, GenerationRequestBuilder, GenerationRequestBuilderError};
pub use result::{ConsistencyValidation, Exploration, RunMetadata, Technique, TechniqueResult};
pub use synthesis::{ConsistencySynthesis, INCONCLUSIVE_ANSWER, TreeOfThoughtSynthesis};
