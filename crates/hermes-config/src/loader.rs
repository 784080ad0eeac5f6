//! Store options loader with layered approach.
//!
//! This module provides the [`OptionsLoader`] for loading [`StoreOptions`]
//! from defaults, files, and environment variables.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

use crate::{ConfigError, ConfigResult, LogFormat, StoreOptions};

/// Store options loader.
///
/// Later layers override earlier ones:
/// 1. Default values (built into the code)
/// 2. Options file (TOML or JSON)
/// 3. Environment variables
///
/// # Example
///
/// ```no_run
/// use hermes_config::OptionsLoader;
///
/// # fn main() -> Result<(), hermes_config::ConfigError> {
/// let options = OptionsLoader::new()
///     .with_defaults()
///     .with_file("hermes.toml")?
///     .with_env_prefix("HERMES")
///     .load()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct OptionsLoader {
    options: StoreOptions,
    env_prefix: Option<String>,
}

impl Default for OptionsLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionsLoader {
    /// Create a new loader starting from the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            options: StoreOptions::default(),
            env_prefix: None,
        }
    }

    /// Start with default option values.
    #[must_use]
    pub fn with_defaults(mut self) -> Self {
        self.options = StoreOptions::default();
        self
    }

    /// Start with the development preset.
    ///
    /// # Example
    ///
    /// ```
    /// use hermes_config::OptionsLoader;
    ///
    /// let options = OptionsLoader::new()
    ///     .with_development()
    ///     .load()
    ///     .unwrap();
    ///
    /// assert!(options.trace_lookups);
    /// ```
    #[must_use]
    pub fn with_development(mut self) -> Self {
        self.options = StoreOptions::development();
        self
    }

    /// Start with the production preset.
    #[must_use]
    pub fn with_production(mut self) -> Self {
        self.options = StoreOptions::production();
        self
    }

    /// Load options from a file.
    ///
    /// Supports TOML (.toml) and JSON (.json), chosen by extension.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing, unreadable, malformed,
    /// or contains unknown fields.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> ConfigResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::file_not_found(path));
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::read_error(path, e))?;

        self.options = Self::parse_file(&content, path)?;
        Ok(self)
    }

    /// Load options from a file if it exists; otherwise keep the current values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be loaded.
    pub fn with_optional_file<P: AsRef<Path>>(self, path: P) -> ConfigResult<Self> {
        if path.as_ref().exists() {
            self.with_file(path)
        } else {
            Ok(self)
        }
    }

    /// Load options from a string in the given format ("toml" or "json").
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if parsing fails or the format is unsupported.
    ///
    /// # Example
    ///
    /// ```
    /// use hermes_config::OptionsLoader;
    ///
    /// let options = OptionsLoader::new()
    ///     .with_string("max_scope_depth = 4", "toml")
    ///     .unwrap()
    ///     .load()
    ///     .unwrap();
    ///
    /// assert_eq!(options.max_scope_depth, 4);
    /// ```
    pub fn with_string(mut self, content: &str, format: &str) -> ConfigResult<Self> {
        self.options = match format.to_lowercase().as_str() {
            "toml" => toml::from_str(content)?,
            "json" => serde_json::from_str(content)?,
            _ => {
                return Err(ConfigError::invalid_option(
                    "format",
                    format!("unsupported options format: {format}"),
                ))
            }
        };
        Ok(self)
    }

    /// Set the environment variable prefix for overrides.
    ///
    /// Variables use the format `PREFIX__KEY` or `PREFIX__SECTION__KEY`, e.g.
    /// `HERMES__MAX_SCOPE_DEPTH=4` or `HERMES__LOGGING__LEVEL=debug`.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_uppercase());
        self
    }

    /// Load a `.env` file into the process environment, if one exists.
    ///
    /// # Errors
    ///
    /// Never fails today; a missing `.env` file is ignored.
    pub fn with_dotenv(self) -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();
        Ok(self)
    }

    /// Load a specific `.env`-style file into the process environment.
    ///
    /// Variables already set in the environment are not overwritten. Combine
    /// with [`with_env_prefix`](Self::with_env_prefix) to apply them.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::FileNotFound` if the file is missing and
    /// `ConfigError::EnvParseError` if a line cannot be parsed.
    pub fn with_dotenv_file<P: AsRef<Path>>(self, path: P) -> ConfigResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::file_not_found(path));
        }

        dotenvy::from_path(path)
            .map_err(|e| ConfigError::env_parse_error(path.display().to_string(), e.to_string()))?;
        Ok(self)
    }

    /// Apply environment overrides and validate.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if an environment variable is malformed or the
    /// final options are invalid.
    pub fn load(mut self) -> ConfigResult<StoreOptions> {
        if let Some(prefix) = self.env_prefix.take() {
            self.apply_env_overrides(&prefix)?;
        }

        self.options.validate()?;
        Ok(self.options)
    }

    /// Return the options without environment overrides or validation.
    #[must_use]
    pub fn load_unvalidated(self) -> StoreOptions {
        self.options
    }

    fn parse_file(content: &str, path: &Path) -> ConfigResult<StoreOptions> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match extension.as_deref() {
            Some("toml") => Ok(toml::from_str(content)?),
            Some("json") => Ok(serde_json::from_str(content)?),
            _ => Err(ConfigError::invalid_option(
                "format",
                format!("unsupported options file format: {}", path.display()),
            )),
        }
    }

    fn apply_env_overrides(&mut self, prefix: &str) -> ConfigResult<()> {
        let env_vars: HashMap<String, String> = env::vars()
            .filter(|(k, _)| k.starts_with(prefix))
            .collect();

        for (key, value) in env_vars {
            self.apply_env_var(&key, &value, prefix)?;
        }

        Ok(())
    }

    fn apply_env_var(&mut self, key: &str, value: &str, prefix: &str) -> ConfigResult<()> {
        let Some(key_without_prefix) = key
            .strip_prefix(prefix)
            .and_then(|k| k.strip_prefix("__"))
        else {
            // Another variable that merely shares the prefix.
            return Ok(());
        };

        let parts: Vec<&str> = key_without_prefix.split("__").collect();

        match parts.as_slice() {
            ["MAX_SCOPE_DEPTH"] => {
                self.options.max_scope_depth = value
                    .parse()
                    .map_err(|_| ConfigError::env_parse_error(key, "expected integer"))?;
            }
            ["UNIQUE_SCOPE_NAMES"] => {
                self.options.unique_scope_names = parse_bool(value)
                    .ok_or_else(|| ConfigError::env_parse_error(key, "expected boolean"))?;
            }
            ["TRACE_LOOKUPS"] => {
                self.options.trace_lookups = parse_bool(value)
                    .ok_or_else(|| ConfigError::env_parse_error(key, "expected boolean"))?;
            }

            // Logging section
            ["LOGGING", "ENABLED"] => {
                self.options.logging.enabled = parse_bool(value)
                    .ok_or_else(|| ConfigError::env_parse_error(key, "expected boolean"))?;
            }
            ["LOGGING", "LEVEL"] => {
                self.options.logging.level = value.to_string();
            }
            ["LOGGING", "FORMAT"] => {
                self.options.logging.format = match value.to_lowercase().as_str() {
                    "json" => LogFormat::Json,
                    "pretty" => LogFormat::Pretty,
                    _ => {
                        return Err(ConfigError::env_parse_error(
                            key,
                            "expected 'json' or 'pretty'",
                        ))
                    }
                };
            }
            ["LOGGING", "INCLUDE_LOCATION"] => {
                self.options.logging.include_location = parse_bool(value)
                    .ok_or_else(|| ConfigError::env_parse_error(key, "expected boolean"))?;
            }

            _ => {}
        }

        Ok(())
    }
}

/// Parse a boolean from a string.
fn parse_bool(s: &str) -> Option<bool> {
    match s.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_loader_new() {
        let options = OptionsLoader::new().load().unwrap();
        assert_eq!(options, StoreOptions::default());
    }

    #[test]
    fn test_loader_with_development() {
        let options = OptionsLoader::new().with_development().load().unwrap();
        assert_eq!(options.logging.level, "debug");
        assert_eq!(options.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_loader_with_production() {
        let options = OptionsLoader::new().with_production().load().unwrap();
        assert_eq!(options.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_loader_with_string_toml() {
        let toml = r#"
            max_scope_depth = 2
            unique_scope_names = false

            [logging]
            format = "pretty"
        "#;

        let options = OptionsLoader::new()
            .with_string(toml, "toml")
            .unwrap()
            .load()
            .unwrap();

        assert_eq!(options.max_scope_depth, 2);
        assert!(!options.unique_scope_names);
        assert_eq!(options.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_loader_with_string_json() {
        let json = r#"{"trace_lookups": true, "logging": {"level": "warn"}}"#;

        let options = OptionsLoader::new()
            .with_string(json, "json")
            .unwrap()
            .load()
            .unwrap();

        assert!(options.trace_lookups);
        assert_eq!(options.logging.level, "warn");
    }

    #[test]
    fn test_loader_with_unsupported_format() {
        let result = OptionsLoader::new().with_string("x", "yaml");
        assert!(matches!(result, Err(ConfigError::InvalidOption { .. })));
    }

    #[test]
    fn test_loader_with_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "max_scope_depth = 5").unwrap();

        let options = OptionsLoader::new()
            .with_file(file.path())
            .unwrap()
            .load()
            .unwrap();

        assert_eq!(options.max_scope_depth, 5);
    }

    #[test]
    fn test_loader_with_file_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".ini").tempfile().unwrap();
        let result = OptionsLoader::new().with_file(file.path());
        assert!(matches!(result, Err(ConfigError::InvalidOption { .. })));
    }

    #[test]
    fn test_loader_with_file_not_found() {
        let result = OptionsLoader::new().with_file("/nonexistent/hermes.toml");
        assert!(matches!(result, Err(ConfigError::FileNotFound { .. })));
    }

    #[test]
    fn test_loader_with_optional_file_not_found() {
        let options = OptionsLoader::new()
            .with_optional_file("/nonexistent/hermes.toml")
            .unwrap()
            .load()
            .unwrap();

        assert_eq!(options, StoreOptions::default());
    }

    #[test]
    fn test_load_rejects_invalid_options() {
        let result = OptionsLoader::new()
            .with_string("max_scope_depth = 0", "toml")
            .unwrap()
            .load();
        assert!(result.is_err());
    }

    #[test]
    fn test_load_unvalidated() {
        let options = OptionsLoader::new()
            .with_string("max_scope_depth = 0", "toml")
            .unwrap()
            .load_unvalidated();
        assert_eq!(options.max_scope_depth, 0);
    }

    #[test]
    fn test_loader_with_dotenv_without_env_file() {
        // A missing `.env` in the working directory is not an error.
        let options = OptionsLoader::new()
            .with_dotenv()
            .unwrap()
            .load()
            .unwrap();
        assert_eq!(options.max_scope_depth, StoreOptions::default().max_scope_depth);
    }

    #[test]
    fn test_loader_with_dotenv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(
            &path,
            "HERMES_DOTENV_TEST__MAX_SCOPE_DEPTH=3\nHERMES_DOTENV_TEST__LOGGING__FORMAT=pretty\n",
        )
        .unwrap();

        let options = OptionsLoader::new()
            .with_dotenv_file(&path)
            .unwrap()
            .with_env_prefix("HERMES_DOTENV_TEST")
            .load()
            .unwrap();

        assert_eq!(options.max_scope_depth, 3);
        assert_eq!(options.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_loader_with_dotenv_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = OptionsLoader::new().with_dotenv_file(dir.path().join(".env"));
        assert!(matches!(result, Err(ConfigError::FileNotFound { .. })));
    }

    #[test]
    fn test_loader_with_dotenv_file_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "HERMES_DOTENV_BAD__KEY='unterminated\n").unwrap();

        let result = OptionsLoader::new().with_dotenv_file(&path);
        assert!(matches!(result, Err(ConfigError::EnvParseError { .. })));
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool("YES"), Some(true));
        assert_eq!(parse_bool("on"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("Off"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
        assert_eq!(parse_bool(""), None);
    }

    #[test]
    fn test_apply_env_var_depth() {
        let mut loader = OptionsLoader::new();
        loader
            .apply_env_var("TEST__MAX_SCOPE_DEPTH", "3", "TEST")
            .unwrap();
        assert_eq!(loader.options.max_scope_depth, 3);
    }

    #[test]
    fn test_apply_env_var_logging() {
        let mut loader = OptionsLoader::new();
        loader
            .apply_env_var("TEST__LOGGING__LEVEL", "trace", "TEST")
            .unwrap();
        loader
            .apply_env_var("TEST__LOGGING__FORMAT", "PRETTY", "TEST")
            .unwrap();
        loader
            .apply_env_var("TEST__LOGGING__INCLUDE_LOCATION", "true", "TEST")
            .unwrap();
        assert_eq!(loader.options.logging.level, "trace");
        assert_eq!(loader.options.logging.format, LogFormat::Pretty);
        assert!(loader.options.logging.include_location);
    }

    #[test]
    fn test_apply_env_var_boolean() {
        let mut loader = OptionsLoader::new();
        loader
            .apply_env_var("TEST__UNIQUE_SCOPE_NAMES", "false", "TEST")
            .unwrap();
        loader
            .apply_env_var("TEST__TRACE_LOOKUPS", "1", "TEST")
            .unwrap();
        assert!(!loader.options.unique_scope_names);
        assert!(loader.options.trace_lookups);
    }

    #[test]
    fn test_apply_env_var_invalid_values() {
        let mut loader = OptionsLoader::new();
        assert!(loader
            .apply_env_var("TEST__MAX_SCOPE_DEPTH", "deep", "TEST")
            .is_err());
        assert!(loader
            .apply_env_var("TEST__LOGGING__FORMAT", "xml", "TEST")
            .is_err());
    }

    #[test]
    fn test_apply_env_var_ignores_unrelated_keys() {
        let mut loader = OptionsLoader::new();
        loader.apply_env_var("TESTING", "x", "TEST").unwrap();
        loader.apply_env_var("TEST__UNKNOWN", "x", "TEST").unwrap();
        assert_eq!(loader.options, StoreOptions::default());
    }
}
