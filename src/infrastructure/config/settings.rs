//! Application configuration loading and validation.
//!
//! Configuration is optional. It is read from the file given on the command
//! line, or from `viewfinder.toml` in the working directory when present;
//! otherwise built-in defaults apply.
//!
//! # Example
//!
//! ```
//! use viewfinder::infrastructure::config::settings::{Config, OutputFormat};
//!
//! let config = Config::parse_toml("[output]\nformat = \"table\"\n").unwrap();
//! assert_eq!(config.output.format, OutputFormat::Table);
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::logging::{LogLevel, LoggingConfig, FORMAT_JSON, FORMAT_PRETTY};
use crate::error::{ConfigError, Result};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "viewfinder.toml";

/// How view points are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON array
    #[default]
    Json,
    /// Human-readable table
    Table,
}

/// Output settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging and tracing configuration.
    pub logging: LoggingConfig,

    /// Result output configuration.
    pub output: OutputConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed, or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load the explicitly requested file, else [`DEFAULT_CONFIG_FILE`] if
    /// it exists, else defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a selected file cannot be loaded.
    #[allow(clippy::result_large_err)]
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            debug!(path = DEFAULT_CONFIG_FILE, "using config from working directory");
            return Self::load(fallback);
        }

        Ok(Self::default())
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if LogLevel::parse(&self.logging.level).is_none() {
            let names: Vec<&str> = LogLevel::ALL.iter().map(|level| level.as_str()).collect();
            return Err(ConfigError::InvalidValue {
                field: "logging.level",
                reason: format!("expected one of {}", names.join(", ")),
            }
            .into());
        }
        if self.logging.format != FORMAT_PRETTY && self.logging.format != FORMAT_JSON {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("expected \"{FORMAT_PRETTY}\" or \"{FORMAT_JSON}\""),
            }
            .into());
        }
        Ok(())
    }
}
