//! Promptcraft: tree-of-thought and self-consistency prompting.
//!
//! This crate re-exports the workspace crates and adds configuration
//! loading and tracing setup.
//!
//! # Example
//!
//! ```no_run
//! use promptcraft::PromptcraftConfig;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PromptcraftConfig::load(None)?;
//! let service = config.service()?;
//!
//! let result = service.validate_consistency("What is the boiling point of water?", 3).await?;
//! println!("{}", result.output().final_answer());
//! # Ok(())
//! # }
//! ```

mod config;
mod observability;

pub use crate::config::{GeminiDriver, PromptcraftConfig};
pub use observability::init_tracing;

pub use promptcraft_core::*;
pub use promptcraft_error::*;
pub use promptcraft_interface::*;
pub use promptcraft_models::*;
pub use promptcraft_reasoning::*;
