//! Configuration for the zq CLI.
//!
//! Settings come from, highest precedence first:
//! 1. Environment variables (`ZQ_` prefix)
//! 2. A YAML file: `--config`, else `$ZQ_CONFIG`, else `~/.zq/config.yaml`
//! 3. Default values

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use zq_conversions::ConversionOptions;

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Circuit conversion configuration
    #[serde(default)]
    pub conversion: ConversionConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: "console" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Circuit conversion settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// Name of the quantum register created on export
    #[serde(default = "default_register_name")]
    pub register_name: String,

    /// Tolerance used by `zq check` for numeric parameters
    #[serde(default = "default_roundtrip_tolerance")]
    pub roundtrip_tolerance: f64,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "console".to_string()
}

fn default_register_name() -> String {
    "q".to_string()
}

fn default_roundtrip_tolerance() -> f64 {
    1e-9
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for ConversionConfig {
    fn default() -> Self {
        ConversionConfig {
            register_name: default_register_name(),
            roundtrip_tolerance: default_roundtrip_tolerance(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::IoError(format!("{}: {e}", path.as_ref().display()))
        })?;

        let config: Config = serde_yaml_ng::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with file and environment overrides applied.
    ///
    /// An explicitly named file must exist. The default file is optional.
    pub fn load(config_file: Option<&str>) -> Result<Self, ConfigError> {
        let explicit = config_file
            .map(PathBuf::from)
            .or_else(|| std::env::var("ZQ_CONFIG").ok().map(PathBuf::from));

        let config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(path)?,
                _ => Config::default(),
            },
        };

        let config = config.merge_env();
        config.validate()?;
        Ok(config)
    }

    /// Merge `ZQ_*` environment variables into this configuration.
    fn merge_env(self) -> Self {
        self.merge_vars(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a variable lookup. Unset variables, and numeric
    /// variables that fail to parse, leave the field unchanged.
    fn merge_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(v) = lookup("ZQ_LOG_LEVEL") {
            self.logging.level = v;
        }
        if let Some(v) = lookup("ZQ_LOG_FORMAT") {
            self.logging.format = v;
        }
        if let Some(v) = lookup("ZQ_REGISTER_NAME") {
            self.conversion.register_name = v;
        }
        if let Some(v) = lookup("ZQ_ROUNDTRIP_TOLERANCE") {
            if let Ok(val) = v.parse() {
                self.conversion.roundtrip_tolerance = val;
            }
        }
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log level: {other}"
                )));
            }
        }

        match self.logging.format.as_str() {
            "console" | "json" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log format: {other}"
                )));
            }
        }

        let name = &self.conversion.register_name;
        let valid_name = name.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
            && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !valid_name {
            return Err(ConfigError::ValidationError(format!(
                "Invalid register name: '{name}'"
            )));
        }

        let tol = self.conversion.roundtrip_tolerance;
        if !tol.is_finite() || tol < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "roundtrip_tolerance must be a non-negative number, got {tol}"
            )));
        }

        Ok(())
    }

    /// Apply command-line conversion overrides, then re-validate.
    pub fn with_overrides(
        mut self,
        register_name: Option<String>,
        tolerance: Option<f64>,
    ) -> Result<Self, ConfigError> {
        if let Some(name) = register_name {
            self.conversion.register_name = name;
        }
        if let Some(tol) = tolerance {
            self.conversion.roundtrip_tolerance = tol;
        }
        self.validate()?;
        Ok(self)
    }

    /// Export options derived from the conversion settings.
    pub fn conversion_options(&self) -> ConversionOptions {
        ConversionOptions {
            register_name: self.conversion.register_name.clone(),
        }
    }
}

/// `~/.zq/config.yaml`, if the home directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".zq").join("config.yaml"))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}
