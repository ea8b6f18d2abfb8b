//! izi-math Configuration
//!
//! Defaults and limits for the validated API, optionally read from an
//! `izi-math.toml` file owned by the host.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use izi_math_kernels::MAX_SERIES_INDEX;

/// File name searched for by [`ApproxConfig::find_and_load`].
pub const CONFIG_FILE_NAME: &str = "izi-math.toml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config file not found: {0}")]
    NotFound(String),

    #[error("Invalid config value `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Root configuration structure matching izi-math.toml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ApproxConfig {
    /// Square root settings
    #[serde(default)]
    pub sqrt: SqrtConfig,

    /// Sine/cosine series settings
    #[serde(default)]
    pub series: SeriesConfig,
}

impl ApproxConfig {
    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: ApproxConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Render configuration as TOML text.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from a file path.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Find and load configuration by searching up from the given directory.
    pub fn find_and_load(start_dir: &Path) -> ConfigResult<Self> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Self::load(&config_path);
            }
            if !dir.pop() {
                // Reached root without finding config
                return Ok(Self::default());
            }
        }
    }

    /// Check every limit and default against each other.
    pub fn validate(&self) -> ConfigResult<()> {
        self.sqrt.validate()?;
        self.series.validate()
    }
}

/// Square root (bisection) settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqrtConfig {
    /// Tolerance used when the caller does not pass one
    #[serde(default = "default_tolerance")]
    pub default_tolerance: f64,

    /// Smallest tolerance a caller may request
    #[serde(default = "default_tolerance")]
    pub min_tolerance: f64,

    /// Midpoints evaluated before giving up
    #[serde(default = "default_max_bisection_steps")]
    pub max_bisection_steps: u32,
}

fn default_tolerance() -> f64 {
    1e-8
}

fn default_max_bisection_steps() -> u32 {
    1200
}

impl Default for SqrtConfig {
    fn default() -> Self {
        Self {
            default_tolerance: default_tolerance(),
            min_tolerance: default_tolerance(),
            max_bisection_steps: default_max_bisection_steps(),
        }
    }
}

impl SqrtConfig {
    fn validate(&self) -> ConfigResult<()> {
        if !(self.min_tolerance.is_finite() && self.min_tolerance > 0.0) {
            return Err(invalid(
                "sqrt.min_tolerance",
                format!("must be finite and positive, got {}", self.min_tolerance),
            ));
        }
        if !(self.default_tolerance.is_finite() && self.default_tolerance >= self.min_tolerance) {
            return Err(invalid(
                "sqrt.default_tolerance",
                format!(
                    "must be finite and at least {}, got {}",
                    self.min_tolerance, self.default_tolerance
                ),
            ));
        }
        if self.max_bisection_steps == 0 {
            return Err(invalid("sqrt.max_bisection_steps", "must be at least 1"));
        }
        Ok(())
    }
}

/// Sine/cosine series settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesConfig {
    /// Highest series index used when the caller does not pass one
    #[serde(default = "default_iterations")]
    pub default_iterations: i32,

    /// Highest series index a caller may request
    #[serde(default = "default_max_iterations")]
    pub max_iterations: i32,
}

fn default_iterations() -> i32 {
    40
}

fn default_max_iterations() -> i32 {
    100
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            default_iterations: default_iterations(),
            max_iterations: default_max_iterations(),
        }
    }
}

impl SeriesConfig {
    fn validate(&self) -> ConfigResult<()> {
        if !(1..=MAX_SERIES_INDEX).contains(&self.max_iterations) {
            return Err(invalid(
                "series.max_iterations",
                format!(
                    "must be between 1 and {}, got {}",
                    MAX_SERIES_INDEX, self.max_iterations
                ),
            ));
        }
        if !(1..=self.max_iterations).contains(&self.default_iterations) {
            return Err(invalid(
                "series.default_iterations",
                format!(
                    "must be between 1 and {}, got {}",
                    self.max_iterations, self.default_iterations
                ),
            ));
        }
        Ok(())
    }
}

fn invalid(key: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        key,
        reason: reason.into(),
    }
}
