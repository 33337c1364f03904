//! Tests for synthesis prompts and answer extraction.

mod test_utils;

use promptcraft_core::{Candidate, EvaluationCriterion, INCONCLUSIVE_ANSWER};
use promptcraft_reasoning::{
    Aggregator, ReasoningConfig, analysis_prompt, approach_prompt, consistency_prompt,
    extract_most_consistent_answer,
};
use test_utils::{MockDriver, MockReply};

fn candidates() -> Vec<Candidate> {
    vec![
        Candidate::new(1, "Direct Analytical Method", "A"),
        Candidate::new(2, "Creative Innovation Method", "B"),
        Candidate::new(3, "Systematic Process Method", "C"),
    ]
}

#[test]
fn test_extract_returns_first_keyword_line() {
    let analysis = "Common themes: all say 4.\n  The most consistent answer is 4.  \nMost reliable: 4";
    assert_eq!(
        extract_most_consistent_answer(analysis),
        "The most consistent answer is 4."
    );
}

#[test]
fn test_extract_keyword_match_ignores_case() {
    let analysis = "Differences are minor.\nMOST RELIABLE response: number two";
    assert_eq!(
        extract_most_consistent_answer(analysis),
        "MOST RELIABLE response: number two"
    );
}

#[test]
fn test_extract_falls_back_to_last_long_line() {
    let analysis = "Responses mostly agree.\nThe answer is Paris.\nyes\n\n";
    assert_eq!(extract_most_consistent_answer(analysis), "The answer is Paris.");
}

#[test]
fn test_extract_returns_sentinel_when_nothing_qualifies() {
    assert_eq!(extract_most_consistent_answer(""), INCONCLUSIVE_ANSWER);
    assert_eq!(
        extract_most_consistent_answer("ok\n  short  \n1234567890"),
        INCONCLUSIVE_ANSWER
    );
}

#[test]
fn test_evaluation_request_is_deterministic() {
    let config = ReasoningConfig::builder()
        .evaluation_temperature(0.0)
        .build()
        .expect("valid config");
    let aggregator = Aggregator::new(MockDriver::echo(), config);

    let first = aggregator.evaluation_request("How can we reduce plastic waste?", &candidates());
    let second = aggregator.evaluation_request("How can we reduce plastic waste?", &candidates());

    assert_eq!(first, second);
    assert_eq!(first.prompt().as_bytes(), second.prompt().as_bytes());
    assert_eq!(*first.temperature(), 0.0);
}

#[test]
fn test_evaluation_prompt_layout() {
    let aggregator = Aggregator::new(MockDriver::echo(), ReasoningConfig::default());
    let request = aggregator.evaluation_request("Problem text here", &candidates()[..2]);

    let expected = "Problem: Problem text here\n\n\
        I have explored these different approaches:\n\n\
        Approach 1: Direct Analytical Method\nSolution: A...\n\
        Approach 2: Creative Innovation Method\nSolution: B...\n\n\
        Please evaluate these approaches and select the best one based on:\n\
        1. Effectiveness in solving the problem\n\
        2. Feasibility of implementation\n\
        3. Completeness of the solution\n\
        4. Innovation and creativity\n\n\
        Best approach selection:";
    assert_eq!(request.prompt(), expected);
    assert_eq!(*request.temperature(), 0.3);
    assert_eq!(EvaluationCriterion::all().len(), 4);
}

#[test]
fn test_evaluation_truncates_long_solutions_by_character() {
    let aggregator = Aggregator::new(MockDriver::echo(), ReasoningConfig::default());
    let long = vec![
        Candidate::new(1, "Direct Analytical Method", "x".repeat(300)),
        Candidate::new(2, "Creative Innovation Method", "é".repeat(250)),
    ];
    let prompt = aggregator.evaluation_request("problem", &long).prompt().clone();

    assert!(prompt.contains(&format!("Solution: {}...\n", "x".repeat(200))));
    assert!(!prompt.contains(&"x".repeat(201)));
    assert!(prompt.contains(&format!("Solution: {}...\n", "é".repeat(200))));
    assert!(!prompt.contains(&"é".repeat(201)));
}

#[test]
fn test_analysis_prompt_lists_full_samples() {
    let samples = vec![
        "y".repeat(400),
        "Second answer".to_string(),
        "Third answer".to_string(),
    ];
    let prompt = analysis_prompt("What is the capital?", &samples);

    assert!(prompt.starts_with("Question: What is the capital?\n\nI have these 3 different responses:\n\n"));
    assert!(prompt.contains(&format!("Response 1: {}\nResponse 2: Second answer\nResponse 3: Third answer\n\n", "y".repeat(400))));
    assert!(prompt.ends_with("4. What is the most consistent answer across all responses?\n\nConsistency analysis:"));
}

#[test]
fn test_branch_and_sample_prompts() {
    assert_eq!(
        approach_prompt("Fix the leak", 2, "Creative Innovation Method"),
        "Problem: Fix the leak\n\nI'll use approach 2: Creative Innovation Method\n\n\
         Let me work through this step by step:\n\
         1. First, I'll analyze the problem from this perspective\n\
         2. Then I'll develop a solution strategy\n\
         3. Finally, I'll evaluate the effectiveness\n\n\
         Working through approach 2:"
    );
    assert_eq!(
        consistency_prompt("Why is the sky blue?"),
        "Please answer this question carefully and accurately.\n\n\
         Question: Why is the sky blue?\n\n\
         Think through this step by step and provide your best answer. Be clear and specific in your response."
    );
}

#[tokio::test]
async fn test_evaluate_trims_model_output() {
    let driver = MockDriver::scripted(|_, _| MockReply::text("\n  Approach 2 is best  \n"));
    let aggregator = Aggregator::new(driver.clone(), ReasoningConfig::default());

    let synthesis = aggregator
        .evaluate("problem", &candidates())
        .await
        .expect("synthesis succeeds");

    assert_eq!(synthesis.evaluation(), "Approach 2 is best");
    assert_eq!(synthesis.selection_criteria(), &EvaluationCriterion::all());
    assert_eq!(driver.requests().len(), 1);
}

#[tokio::test]
async fn test_analyze_extracts_answer_and_counts_samples() {
    let driver = MockDriver::scripted(|_, _| {
        MockReply::text("Themes agree.\nThe most consistent answer is blue light scattering.\n")
    });
    let aggregator = Aggregator::new(driver.clone(), ReasoningConfig::default());
    let samples = vec!["one".to_string(), "two".to_string()];

    let synthesis = aggregator
        .analyze("Why is the sky blue?", &samples)
        .await
        .expect("synthesis succeeds");

    assert_eq!(*synthesis.response_count(), 2);
    assert_eq!(
        synthesis.most_consistent_answer(),
        "The most consistent answer is blue light scattering."
    );
    assert_eq!(
        synthesis.analysis(),
        "Themes agree.\nThe most consistent answer is blue light scattering."
    );
    assert_eq!(*driver.requests()[0].temperature(), 0.2);
}
