//! Runtime configuration
//!
//! One optional TOML file holding the shell prompt and logging settings.
//! No file means defaults; a malformed file is a startup error.

use crate::error::SetupError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Prompt printed before each input line.
    #[serde(default = "default_prompt")]
    pub prompt: String,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_prompt() -> String {
    "> ".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file, or defaults when no path is
    /// given.
    pub fn load(path: Option<&Path>) -> Result<Self, SetupError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path).map_err(|e| SetupError::ConfigRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        toml::from_str(&text).map_err(|e| SetupError::ConfigParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}
