//! Input checks for the two entry points.
//!
//! Each field yields at most one violation. A text field that is blank
//! after trimming is reported as empty and not length-checked.

use promptcraft_error::{FieldViolation, ValidationError};
use std::ops::RangeInclusive;

/// Accepted length of an exploration problem, in characters.
pub const PROBLEM_LENGTH: RangeInclusive<usize> = 10..=2000;
/// Accepted number of requested approaches.
pub const MAX_APPROACHES_RANGE: RangeInclusive<usize> = 1..=5;
/// Accepted length of a consistency question, in characters.
pub const QUESTION_LENGTH: RangeInclusive<usize> = 5..=1000;
/// Accepted number of consistency samples.
pub const NUM_SAMPLES_RANGE: RangeInclusive<usize> = 2..=5;

/// Checks the arguments of [`explore`](crate::ReasoningService::explore).
///
/// # Errors
///
/// Returns every violated field at once.
#[track_caller]
pub fn validate_exploration(problem: &str, max_approaches: usize) -> Result<(), ValidationError> {
    let violations: Vec<_> = [
        check_text("problem", problem, &PROBLEM_LENGTH),
        check_count("max_approaches", max_approaches, &MAX_APPROACHES_RANGE),
    ]
    .into_iter()
    .flatten()
    .collect();

    finish(violations)
}

/// Checks the arguments of
/// [`validate_consistency`](crate::ReasoningService::validate_consistency).
///
/// # Errors
///
/// Returns every violated field at once.
#[track_caller]
pub fn validate_consistency(question: &str, num_samples: usize) -> Result<(), ValidationError> {
    let violations: Vec<_> = [
        check_text("question", question, &QUESTION_LENGTH),
        check_count("num_samples", num_samples, &NUM_SAMPLES_RANGE),
    ]
    .into_iter()
    .flatten()
    .collect();

    finish(violations)
}

#[track_caller]
fn finish(violations: Vec<FieldViolation>) -> Result<(), ValidationError> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(violations))
    }
}

fn check_text(field: &str, value: &str, bounds: &RangeInclusive<usize>) -> Option<FieldViolation> {
    if value.trim().is_empty() {
        return Some(FieldViolation::new(
            field,
            format!("Field '{}' cannot be empty", field),
        ));
    }

    let length = value.chars().count();
    if length < *bounds.start() {
        Some(FieldViolation::new(
            field,
            format!(
                "Field '{}' must be at least {} characters long",
                field,
                bounds.start()
            ),
        ))
    } else if length > *bounds.end() {
        Some(FieldViolation::new(
            field,
            format!(
                "Field '{}' must be at most {} characters long",
                field,
                bounds.end()
            ),
        ))
    } else {
        None
    }
}

fn check_count(field: &str, value: usize, bounds: &RangeInclusive<usize>) -> Option<FieldViolation> {
    if value < *bounds.start() {
        Some(FieldViolation::new(
            field,
            format!("Field '{}' must be at least {}", field, bounds.start()),
        ))
    } else if value > *bounds.end() {
        Some(FieldViolation::new(
            field,
            format!("Field '{}' must be at most {}", field, bounds.end()),
        ))
    } else {
        None
    }
}
