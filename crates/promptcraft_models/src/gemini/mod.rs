//! Google Gemini client.
//!
//! Talks to the `generateContent` REST endpoint directly over reqwest. Each
//! call sends one user turn with a temperature and a thinking budget and
//! returns the concatenated text of the first candidate.

mod client;
mod config;
mod dto;

pub use client::GeminiClient;
pub use config::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiConfig, GeminiConfigBuilder};
pub use dto::{
    ApiErrorDetail, ApiErrorResponse, Content, GenerateContentRequest, GenerateContentResponse,
    GenerationConfig, Part, ResponseCandidate, ThinkingConfig, UsageMetadata,
};
