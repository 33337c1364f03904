//! Tests for the core data model.

use promptcraft_core::{
    Candidate, ConsistencySynthesis, ConsistencyValidation, EvaluationCriterion, Exploration,
    GenerationRequest, INCONCLUSIVE_ANSWER, RunMetadata, Technique, TechniqueResult,
    TreeOfThoughtSynthesis,
};
use serde_json::json;
use std::time::Duration;

#[test]
fn test_criteria_are_fixed_and_ordered() {
    let criteria = EvaluationCriterion::all();
    assert_eq!(
        criteria,
        vec![
            EvaluationCriterion::Effectiveness,
            EvaluationCriterion::Feasibility,
            EvaluationCriterion::Completeness,
            EvaluationCriterion::Innovation,
        ]
    );
    let names: Vec<String> = criteria.iter().map(|c| c.to_string()).collect();
    assert_eq!(
        names,
        vec!["effectiveness", "feasibility", "completeness", "innovation"]
    );
}

#[test]
fn test_exploration_serializes_with_api_field_names() {
    let exploration = Exploration::new(
        vec![
            Candidate::new(1, "Direct Analytical Method", "A"),
            Candidate::new(2, "Creative Innovation Method", "B"),
        ],
        TreeOfThoughtSynthesis::new("Approach 2 is best"),
    );

    let value = serde_json::to_value(&exploration).expect("serializable");
    assert_eq!(
        value,
        json!({
            "explored_approaches": [
                {"approach_number": 1, "approach_name": "Direct Analytical Method", "solution": "A"},
                {"approach_number": 2, "approach_name": "Creative Innovation Method", "solution": "B"}
            ],
            "best_approach": {
                "evaluation": "Approach 2 is best",
                "selection_criteria": ["effectiveness", "feasibility", "completeness", "innovation"]
            },
            "total_approaches": 2
        })
    );
}

#[test]
fn test_consistency_validation_mirrors_final_answer() {
    let synthesis = ConsistencySynthesis::new(
        "Themes...\nThe most consistent answer is 42",
        3,
        "The most consistent answer is 42",
    );
    let validation = ConsistencyValidation::new(
        vec!["42".to_string(), "42".to_string(), "41".to_string()],
        synthesis,
    );

    assert_eq!(validation.final_answer(), "The most consistent answer is 42");
    assert_eq!(*validation.num_samples(), 3);
    assert!(!validation.synthesis().is_inconclusive());

    let value = serde_json::to_value(&validation).expect("serializable");
    assert_eq!(value["all_responses"], json!(["42", "42", "41"]));
    assert_eq!(value["consistency_analysis"]["response_count"], json!(3));
}

#[test]
fn test_inconclusive_sentinel() {
    let synthesis = ConsistencySynthesis::new("", 2, INCONCLUSIVE_ANSWER);
    assert!(synthesis.is_inconclusive());
}

#[test]
fn test_metadata_rounds_and_flattens_parameters() {
    let metadata = RunMetadata::new(Duration::from_micros(1_234_567), "gemini-2.5-flash")
        .with_parameter("max_approaches", 3usize);

    assert_eq!(*metadata.processing_time(), 1.235);

    let result = TechniqueResult::new(Technique::TreeOfThought, "problem", json!({}), metadata);
    assert_eq!(result.task(), "multi_approach_exploration");
    assert_eq!(result.technique().to_string(), "Tree-of-Thought");

    let value = serde_json::to_value(&result).expect("serializable");
    assert_eq!(value["technique"], json!("Tree-of-Thought"));
    assert_eq!(value["metadata"]["model"], json!("gemini-2.5-flash"));
    assert_eq!(value["metadata"]["max_approaches"], json!(3));
}

#[test]
fn test_request_builder_rejects_out_of_range_temperature() {
    assert!(
        GenerationRequest::builder()
            .prompt("hello")
            .temperature(-0.1)
            .build()
            .is_err()
    );
    assert!(GenerationRequest::builder().prompt("hello").build().is_err());

    let request = GenerationRequest::builder()
        .prompt("hello")
        .temperature(1.0)
        .max_output_tokens(Some(256))
        .build()
        .expect("valid request");
    assert_eq!(*request.max_output_tokens(), Some(256));
    assert_eq!(*request.thinking_budget(), None);
}

#[test]
fn test_with_thinking_budget_keeps_prompt() {
    let request = GenerationRequest::new("prompt", 0.0).with_thinking_budget(Some(0));
    assert_eq!(request.prompt(), "prompt");
    assert_eq!(*request.thinking_budget(), Some(0));
}
