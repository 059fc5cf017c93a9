use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::model::gap_buffer::DEFAULT_CAPACITY;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Editor behavior settings
    #[serde(default)]
    pub editor: EditorConfig,

    /// Default tracing filter (e.g. "info", "hunt=debug").
    /// The HUNT_LOG environment variable takes precedence.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

/// Editor behavior configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Capacity in bytes of a freshly loaded document's buffer
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,

    /// Longest line number accepted by the goto-line command, in digits
    #[serde(default = "default_goto_line_max_digits")]
    pub goto_line_max_digits: usize,
}

fn default_initial_capacity() -> usize {
    DEFAULT_CAPACITY
}

fn default_goto_line_max_digits() -> usize {
    32
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            initial_capacity: default_initial_capacity(),
            goto_line_max_digits: default_goto_line_max_digits(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            editor: EditorConfig::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        let config: Config =
            serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Load the config at `path` if it exists, otherwise use defaults.
    ///
    /// Used for the implicit per-user location, where a missing file is normal.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path.as_ref(), contents).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.editor.initial_capacity == 0 {
            return Err(ConfigError::ValidationError(
                "editor.initial_capacity must be at least 1".to_string(),
            ));
        }
        if self.editor.goto_line_max_digits == 0 {
            return Err(ConfigError::ValidationError(
                "editor.goto_line_max_digits must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Per-user config location, `<config dir>/hunt/config.json`.
    /// Only `main` should call this; everything else receives a `Config`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("hunt").join("config.json"))
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Serialize error: {0}")]
    SerializeError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
}
