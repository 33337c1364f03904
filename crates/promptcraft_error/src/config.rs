//! Configuration error types.

use std::path::{Path, PathBuf};

/// Environment variable holding the Gemini API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Configuration failure, tagged with the settings file involved (if any)
/// and the source location that raised it.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// What went wrong
    pub message: String,
    /// Settings file being read or written when the error occurred
    pub source_path: Option<PathBuf>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            source_path: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// No usable Gemini API key was found in the configuration or environment.
    ///
    /// # Examples
    ///
    /// ```
    /// use promptcraft_error::ConfigError;
    ///
    /// let err = ConfigError::missing_api_key();
    /// assert_eq!(err.message, "GEMINI_API_KEY environment variable not set");
    /// assert!(err.source_path.is_none());
    /// ```
    #[track_caller]
    pub fn missing_api_key() -> Self {
        Self::new(format!("{} environment variable not set", API_KEY_VAR))
    }

    /// A settings file could not be loaded.
    ///
    /// # Examples
    ///
    /// ```
    /// use promptcraft_error::ConfigError;
    ///
    /// let err = ConfigError::in_file("promptcraft.toml", "missing field `model`");
    /// assert!(err.to_string().contains("(promptcraft.toml)"));
    /// ```
    #[track_caller]
    pub fn in_file(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self {
            source_path: Some(path.as_ref().to_path_buf()),
            ..Self::new(message)
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration Error: {}", self.message)?;
        if let Some(path) = &self.source_path {
            write!(f, " ({})", path.display())?;
        }
        write!(f, " at line {} in {}", self.line, self.file)
    }
}

impl std::error::Error for ConfigError {}
