//! Options that tune the store itself.
//!
//! These are not user settings; they control scope nesting, lookup tracing
//! and logging of the store. Load them with [`OptionsLoader`](crate::OptionsLoader).

use hermes_telemetry::{create_env_filter, init_logging, LogConfig};
use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

/// Store options.
///
/// # Example
///
/// ```
/// use hermes_config::StoreOptions;
///
/// let options = StoreOptions::default();
/// assert_eq!(options.max_scope_depth, 8);
/// assert!(options.unique_scope_names);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StoreOptions {
    /// Deepest allowed scope; the root is depth 0.
    #[serde(default = "default_max_scope_depth")]
    pub max_scope_depth: usize,

    /// Reject sibling scopes that share a name.
    #[serde(default = "default_true")]
    pub unique_scope_names: bool,

    /// Emit a trace event for every accessor lookup that falls back to a sentinel.
    #[serde(default)]
    pub trace_lookups: bool,

    /// Logging section.
    #[serde(default)]
    pub logging: LoggingOptions,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            max_scope_depth: default_max_scope_depth(),
            unique_scope_names: true,
            trace_lookups: false,
            logging: LoggingOptions::default(),
        }
    }
}

impl StoreOptions {
    /// Development preset: pretty debug logging and lookup tracing.
    #[must_use]
    pub fn development() -> Self {
        let mut options = Self::default();
        options.trace_lookups = true;
        options.logging.level = "debug".to_string();
        options.logging.format = LogFormat::Pretty;
        options.logging.include_location = true;
        options
    }

    /// Production preset: JSON logging at info level.
    #[must_use]
    pub fn production() -> Self {
        let mut options = Self::default();
        options.logging.level = "info".to_string();
        options.logging.format = LogFormat::Json;
        options
    }

    /// Validate the options.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidOption` if the depth limit is zero or the
    /// log level is not a valid filter directive.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_scope_depth == 0 {
            return Err(ConfigError::invalid_option(
                "max_scope_depth",
                "must be at least 1",
            ));
        }

        if self.logging.enabled {
            create_env_filter(&self.logging.level)
                .map_err(|e| ConfigError::invalid_option("logging.level", e.to_string()))?;
        }

        Ok(())
    }
}

/// Log format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON formatted logs (production).
    #[default]
    Json,
    /// Human-readable pretty format (development).
    Pretty,
}

/// Logging section of the store options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggingOptions {
    /// Enable logging.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log filter directive (trace, debug, info, warn, error, or per-target).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log output format.
    #[serde(default)]
    pub format: LogFormat,

    /// Include source file and line in logs.
    #[serde(default)]
    pub include_location: bool,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_log_level(),
            format: LogFormat::default(),
            include_location: false,
        }
    }
}

impl LoggingOptions {
    /// Convert into the telemetry crate's logging configuration.
    #[must_use]
    pub fn to_log_config(&self) -> LogConfig {
        let json_format = self.format == LogFormat::Json;
        LogConfig {
            enabled: self.enabled,
            level: self.level.clone(),
            json_format,
            ansi: !json_format,
            file_line_info: self.include_location,
            include_target: true,
        }
    }

    /// Install the global subscriber described by this section.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidOption` if the level does not parse or a
    /// subscriber is already installed.
    pub fn init(&self) -> ConfigResult<()> {
        init_logging(&self.to_log_config())
            .map_err(|e| ConfigError::invalid_option("logging", e.to_string()))
    }
}

fn default_max_scope_depth() -> usize {
    8
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}
