//! Live tests against the Gemini API.
//!
//! Require `GEMINI_API_KEY` in the environment or a `.env` file.
//!
//! Run with: cargo test --package promptcraft_models --features api

use promptcraft_core::GenerationRequest;
use promptcraft_interface::PromptDriver;
use promptcraft_models::{GeminiClient, GeminiConfig, TimeoutDriver, check_connection};

fn live_config() -> GeminiConfig {
    let _ = dotenvy::dotenv();
    GeminiConfig::default().with_api_key(std::env::var("GEMINI_API_KEY").ok())
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_live_connection() -> Result<(), Box<dyn std::error::Error>> {
    let config = live_config();
    let client = TimeoutDriver::new(GeminiClient::from_config(&config)?, config.timeout());
    let report = check_connection(&client, *config.default_temperature()).await;
    assert!(*report.connected(), "connection report: {:?}", report);
    Ok(())
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_live_bounded_generation() -> Result<(), Box<dyn std::error::Error>> {
    let config = live_config();
    let client = TimeoutDriver::new(GeminiClient::from_config(&config)?, config.timeout());

    let request = GenerationRequest::new("Reply with the single word: hello", 0.0)
        .with_thinking_budget(Some(0));
    let text = client.generate(&request).await?;

    assert!(text.to_lowercase().contains("hello"));
    Ok(())
}
