//! Model clients for Promptcraft.
//!
//! Currently one provider is supported:
//! - Google Gemini via [`GeminiClient`]
//!
//! Wrap a client in [`TimeoutDriver`] to bound every call. The wrapped client
//! implements [`PromptDriver`](promptcraft_interface::PromptDriver) and is what
//! the reasoning layer consumes.
//!
//! # Example
//!
//! ```no_run
//! use promptcraft_core::GenerationRequest;
//! use promptcraft_interface::PromptDriver;
//! use promptcraft_models::{GeminiClient, GeminiConfig, TimeoutDriver};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GeminiConfig::default().with_api_key(std::env::var("GEMINI_API_KEY").ok());
//! let client = TimeoutDriver::new(GeminiClient::from_config(&config)?, config.timeout());
//! let text = client.generate(&GenerationRequest::new("Say hello", 0.7)).await?;
//! println!("{}", text);
//! # Ok(())
//! # }
//! ```

mod diagnostics;
mod gemini;
mod timeout;

pub use diagnostics::{
    CONNECTION_TEST_PROMPT, ConnectionReport, ModelInfo, PromptInspection, check_connection,
    inspect_prompt,
};
pub use gemini::*;
pub use timeout::{DEFAULT_TIMEOUT, TimeoutDriver};
