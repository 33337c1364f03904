//! Prompt templates for the fan-out and synthesis calls.
//!
//! Every template is a pure function of its inputs, so the same inputs
//! always yield byte-identical prompt text.

use promptcraft_core::{Candidate, EvaluationCriterion};

/// Named approaches explored by tree-of-thought, in branch order.
pub const APPROACH_NAMES: [&str; 3] = [
    "Direct Analytical Method",
    "Creative Innovation Method",
    "Systematic Process Method",
];

/// Characters of each candidate shown to the evaluation call.
pub const PREVIEW_CHARS: usize = 200;

/// Prompt for branch `index` (1-based) exploring `name`.
pub fn approach_prompt(problem: &str, index: usize, name: &str) -> String {
    format!(
        "Problem: {problem}\n\n\
         I'll use approach {index}: {name}\n\n\
         Let me work through this step by step:\n\
         1. First, I'll analyze the problem from this perspective\n\
         2. Then I'll develop a solution strategy\n\
         3. Finally, I'll evaluate the effectiveness\n\n\
         Working through approach {index}:"
    )
}

/// Prompt sent identically to every self-consistency sample.
pub fn consistency_prompt(question: &str) -> String {
    format!(
        "Please answer this question carefully and accurately.\n\n\
         Question: {question}\n\n\
         Think through this step by step and provide your best answer. \
         Be clear and specific in your response."
    )
}

/// Synthesis prompt ranking tree-of-thought candidates.
///
/// Each solution is cut to `preview_chars` characters.
pub fn evaluation_prompt(problem: &str, candidates: &[Candidate], preview_chars: usize) -> String {
    let listing = candidates
        .iter()
        .map(|c| {
            format!(
                "Approach {}: {}\nSolution: {}...",
                c.index(),
                c.name(),
                truncate_chars(c.text(), preview_chars)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    let criteria = EvaluationCriterion::all()
        .iter()
        .enumerate()
        .map(|(i, criterion)| format!("{}. {}", i + 1, criterion.description()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Problem: {problem}\n\n\
         I have explored these different approaches:\n\n\
         {listing}\n\n\
         Please evaluate these approaches and select the best one based on:\n\
         {criteria}\n\n\
         Best approach selection:"
    )
}

/// Synthesis prompt analysing agreement among samples. Samples are not truncated.
pub fn analysis_prompt(question: &str, samples: &[String]) -> String {
    let listing = samples
        .iter()
        .enumerate()
        .map(|(i, sample)| format!("Response {}: {}", i + 1, sample))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Question: {question}\n\n\
         I have these {count} different responses:\n\n\
         {listing}\n\n\
         Please analyze these responses for consistency:\n\
         1. What are the common themes or answers?\n\
         2. What are the main differences?\n\
         3. Which response seems most accurate and complete?\n\
         4. What is the most consistent answer across all responses?\n\n\
         Consistency analysis:",
        count = samples.len()
    )
}

/// The first `max_chars` characters of `text`, never splitting a character.
///
/// # Examples
///
/// ```
/// use promptcraft_reasoning::truncate_chars;
///
/// assert_eq!(truncate_chars("héllo", 2), "hé");
/// assert_eq!(truncate_chars("hi", 200), "hi");
/// ```
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
