//! Layered configuration.
//!
//! Sources, lowest precedence first:
//! 1. built-in defaults
//! 2. an optional TOML file
//! 3. `PROMPTCRAFT__`-prefixed environment variables, e.g. `PROMPTCRAFT__GEMINI__MODEL`
//! 4. `GEMINI_API_KEY` and `GEMINI_MODEL`
//!
//! A `.env` file in the working directory is loaded first.

use config::{Config, Environment, File, FileFormat};
use derive_getters::Getters;
use promptcraft_error::{API_KEY_VAR, ConfigError, PromptcraftResult};
use promptcraft_models::{GeminiClient, GeminiConfig, TimeoutDriver};
use promptcraft_reasoning::{ReasoningConfig, ReasoningService};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Driver type the binary wires into the reasoning service.
pub type GeminiDriver = TimeoutDriver<GeminiClient>;

/// Top-level configuration.
///
/// # Examples
///
/// ```
/// use promptcraft::PromptcraftConfig;
///
/// let config = PromptcraftConfig::from_toml_str(
///     r#"
///     [gemini]
///     model = "gemini-2.5-pro"
///
///     [reasoning]
///     sample_temperature = 0.9
///     "#,
/// )
/// .expect("valid config");
///
/// assert_eq!(config.gemini().model(), "gemini-2.5-pro");
/// assert_eq!(*config.reasoning().sample_temperature(), 0.9);
/// assert_eq!(*config.reasoning().branch_temperature(), 0.6);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters)]
pub struct PromptcraftConfig {
    /// Remote model settings
    #[serde(default)]
    gemini: GeminiConfig,
    /// Technique settings
    #[serde(default)]
    reasoning: ReasoningConfig,
}

impl PromptcraftConfig {
    /// Loads configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is given but cannot be read or parsed, or
    /// if any source holds a value of the wrong type.
    #[instrument]
    pub fn load(path: Option<&Path>) -> PromptcraftResult<Self> {
        if let Ok(env_file) = dotenvy::dotenv() {
            debug!(path = ?env_file, "Loaded .env file");
        }

        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        builder = builder.add_source(
            Environment::with_prefix("PROMPTCRAFT")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = Self::deserialize_from(builder.build(), path)?;
        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Parses configuration from TOML text alone.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or holds values of the
    /// wrong type.
    pub fn from_toml_str(toml: &str) -> PromptcraftResult<Self> {
        Self::deserialize_from(
            Config::builder()
                .add_source(File::from_str(toml, FileFormat::Toml))
                .build(),
            None,
        )
    }

    /// Applies `GEMINI_API_KEY` and `GEMINI_MODEL` as resolved by `lookup`.
    ///
    /// Blank values are ignored.
    pub fn with_overrides<F>(self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut gemini = self.gemini;
        if let Some(api_key) = present(API_KEY_VAR) {
            gemini = gemini.with_api_key(Some(api_key));
        }
        if let Some(model) = present("GEMINI_MODEL") {
            gemini = gemini.with_model(model);
        }

        Self { gemini, ..self }
    }

    /// Renders the effective configuration as TOML. The API key is omitted.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml_string(&self) -> PromptcraftResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to render configuration: {}", e)).into())
    }

    /// Builds the time-bounded Gemini driver.
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is configured.
    pub fn driver(&self) -> PromptcraftResult<GeminiDriver> {
        let client = GeminiClient::from_config(&self.gemini)?;
        Ok(TimeoutDriver::new(client, self.gemini.timeout()))
    }

    /// Builds a reasoning service around a fresh driver.
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is configured.
    pub fn service(&self) -> PromptcraftResult<ReasoningService<GeminiDriver>> {
        Ok(ReasoningService::new(
            Arc::new(self.driver()?),
            self.reasoning.clone(),
        ))
    }

    fn deserialize_from(
        built: Result<Config, config::ConfigError>,
        path: Option<&Path>,
    ) -> PromptcraftResult<Self> {
        built
            .and_then(|config| config.try_deserialize::<Self>())
            .map_err(|e| {
                let message = format!("Failed to load configuration: {}", e);
                match path {
                    Some(path) => ConfigError::in_file(path, message),
                    None => ConfigError::new(message),
                }
                .into()
            })
    }
}
