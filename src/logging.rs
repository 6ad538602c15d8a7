//! Logging System
//!
//! Structured logging via the `tracing` crate. The REPL owns stdout, so
//! log output goes to stderr; level and format come from configuration
//! with `ARBOR_LOG` / `ARBOR_LOG_FORMAT` environment overrides taking
//! precedence.

use crate::error::SetupError;
use serde::{Deserialize, Serialize};
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level or filter directives: trace, debug, info, warn, error, off
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Enable colored output (text format only)
    #[serde(default = "default_true")]
    pub ansi: bool,
}

fn default_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
            ansi: default_true(),
        }
    }
}

/// Initialize the logging system.
///
/// Precedence (highest to lowest): `ARBOR_LOG` / `ARBOR_LOG_FORMAT`
/// environment variables, then the supplied configuration, then defaults.
pub fn init_logging(config: &LoggingConfig) -> Result<(), SetupError> {
    let filter = build_env_filter(config)?;
    let format = determine_format(config)?;

    let base = Registry::default().with(filter);
    if format == "json" {
        base.with(
            fmt::layer()
                .json()
                .with_target(true)
                .with_timer(ChronoUtc::rfc_3339())
                .with_writer(std::io::stderr),
        )
        .init();
    } else {
        base.with(
            fmt::layer()
                .with_target(true)
                .with_timer(ChronoUtc::rfc_3339())
                .with_ansi(config.ansi)
                .with_writer(std::io::stderr),
        )
        .init();
    }
    Ok(())
}

/// Build the filter from the ARBOR_LOG environment variable or the config.
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, SetupError> {
    if let Ok(filter) = EnvFilter::try_from_env("ARBOR_LOG") {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.level)
        .map_err(|e| SetupError::InvalidLogDirective(e.to_string()))
}

/// Determine the output format from the environment or the config.
fn determine_format(config: &LoggingConfig) -> Result<String, SetupError> {
    if let Ok(format) = std::env::var("ARBOR_LOG_FORMAT") {
        if format == "json" || format == "text" {
            return Ok(format);
        }
    }
    let format = config.format.as_str();
    if format != "json" && format != "text" {
        return Err(SetupError::InvalidLogFormat(format.to_string()));
    }
    Ok(format.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_logging_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "warn");
        assert_eq!(config.format, "text");
        assert!(config.ansi);
    }

    #[test]
    fn filter_accepts_levels_and_directives() {
        let mut config = LoggingConfig::default();
        config.level = "debug".to_string();
        assert!(build_env_filter(&config).is_ok());
        config.level = "warn,arbor=trace".to_string();
        assert!(build_env_filter(&config).is_ok());
        config.level = "arbor=notalevel".to_string();
        assert!(build_env_filter(&config).is_err());
    }

    #[test]
    fn format_must_be_json_or_text() {
        let mut config = LoggingConfig::default();
        config.format = "yaml".to_string();
        assert!(matches!(
            determine_format(&config),
            Err(SetupError::InvalidLogFormat(_))
        ));
        config.format = "json".to_string();
        assert_eq!(determine_format(&config).unwrap(), "json");
    }
}
