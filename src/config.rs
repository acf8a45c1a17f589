//! TOML-based run configuration.
//!
//! Only how a run is paced and presented is configurable. The node set, power
//! ranges, iteration count and stability margin are fixed.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Default pause between iterations, in milliseconds.
pub const DEFAULT_PAUSE_MS: u64 = 2000;

/// Top-level run configuration parsed from TOML.
///
/// Every field has a default, so an empty file yields the same run as no file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Seeding and pacing.
    #[serde(default)]
    pub run: RunSection,
    /// Report presentation.
    #[serde(default)]
    pub output: OutputSection,
}

/// Seeding and pacing.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunSection {
    /// Seed for the reading source; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Pause between iterations (ms).
    pub pause_ms: u64,
}

impl Default for RunSection {
    fn default() -> Self {
        Self {
            seed: None,
            pause_ms: DEFAULT_PAUSE_MS,
        }
    }
}

/// Report presentation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSection {
    /// Console rendering: `"text"` or `"json"`.
    pub format: String,
}

/// Console rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Parses a format name; empty means the default.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "" | "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"output.format"`).
    pub field: String,
    pub message: String,
}

impl RunConfig {
    /// Parses a run configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a run configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if OutputFormat::parse(&self.output.format).is_none() {
            errors.push(ConfigError {
                field: "output.format".into(),
                message: format!(
                    "must be \"text\" or \"json\", got \"{}\"",
                    self.output.format
                ),
            });
        }

        errors
    }

    /// The configured output format, falling back to text if unrecognized.
    ///
    /// Call [`RunConfig::validate`] first to report bad values.
    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::parse(&self.output.format).unwrap_or_default()
    }
}
