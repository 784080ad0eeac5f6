//! Configuration error types.

use std::path::PathBuf;

use hermes_core::Kind;
use thiserror::Error;

use crate::ScopeId;

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised by the registry, the scope tree and the options loader.
///
/// The typed accessors never return these; they collapse every failure into
/// the sentinel of the requested kind. Use [`ConfigStore::resolve`] to see the
/// real cause.
///
/// [`ConfigStore::resolve`]: crate::ConfigStore::resolve
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The name was never defined in the registry.
    #[error("unknown setting: {name}")]
    UnknownName {
        /// The setting name.
        name: String,
    },

    /// A value of the wrong kind was supplied or requested.
    #[error("type mismatch for {name}: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The setting name.
        name: String,
        /// The declared kind.
        expected: Kind,
        /// The kind that was supplied.
        actual: Kind,
    },

    /// The name is already defined.
    #[error("setting already defined: {name}")]
    DuplicateDefinition {
        /// The setting name.
        name: String,
    },

    /// The validator of the setting rejected the value.
    #[error("invalid value for {name}: {reason}")]
    ValidationFailed {
        /// The setting name.
        name: String,
        /// Explanation from the validator.
        reason: String,
    },

    /// The scope id does not refer to a live scope.
    #[error("unknown scope: {scope}")]
    UnknownScope {
        /// The stale or foreign id.
        scope: ScopeId,
    },

    /// A sibling scope with the same name already exists.
    #[error("scope {name:?} already exists under {parent}")]
    DuplicateScope {
        /// The parent scope.
        parent: ScopeId,
        /// The duplicated name.
        name: String,
    },

    /// The scope name is empty or contains the path separator `:`.
    #[error("invalid scope name {name:?}: must be non-empty and contain no ':'")]
    InvalidScopeName {
        /// The rejected name.
        name: String,
    },

    /// The scope still has live child scopes.
    #[error("scope {scope} still has {children} child scope(s)")]
    ScopeHasChildren {
        /// The scope that was to be removed.
        scope: ScopeId,
        /// Number of live children.
        children: usize,
    },

    /// The root scope cannot be removed.
    #[error("the root scope cannot be removed")]
    RootScope,

    /// Creating the scope would nest deeper than allowed.
    #[error("scope depth limit of {max} exceeded")]
    DepthExceeded {
        /// The configured maximum depth.
        max: usize,
    },

    /// Options file not found.
    #[error("options file not found: {path}")]
    FileNotFound {
        /// Path to the missing file.
        path: PathBuf,
    },

    /// Failed to read an options file.
    #[error("failed to read options file: {path}")]
    ReadError {
        /// Path to the file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error.
    #[error("failed to parse TOML options: {0}")]
    TomlError(#[from] toml::de::Error),

    /// JSON parsing error.
    #[error("failed to parse JSON options: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid store option.
    #[error("invalid option value for {field}: {reason}")]
    InvalidOption {
        /// The option with the invalid value.
        field: String,
        /// Explanation of why the value is invalid.
        reason: String,
    },

    /// Environment variable parsing error.
    #[error("failed to parse environment variable {var}: {reason}")]
    EnvParseError {
        /// The environment variable name.
        var: String,
        /// Explanation of the parsing error.
        reason: String,
    },
}

impl ConfigError {
    /// Create a new unknown name error.
    pub fn unknown_name(name: impl Into<String>) -> Self {
        Self::UnknownName { name: name.into() }
    }

    /// Create a new type mismatch error.
    pub fn type_mismatch(name: impl Into<String>, expected: Kind, actual: Kind) -> Self {
        Self::TypeMismatch {
            name: name.into(),
            expected,
            actual,
        }
    }

    /// Create a new duplicate definition error.
    pub fn duplicate_definition(name: impl Into<String>) -> Self {
        Self::DuplicateDefinition { name: name.into() }
    }

    /// Create a new validation error.
    pub fn validation_failed(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ValidationFailed {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a new unknown scope error.
    pub fn unknown_scope(scope: ScopeId) -> Self {
        Self::UnknownScope { scope }
    }

    /// Create a new invalid scope name error.
    pub fn invalid_scope_name(name: impl Into<String>) -> Self {
        Self::InvalidScopeName { name: name.into() }
    }

    /// Create a new file not found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a new read error.
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Create a new invalid option error.
    pub fn invalid_option(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOption {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a new environment variable parse error.
    pub fn env_parse_error(var: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::EnvParseError {
            var: var.into(),
            reason: reason.into(),
        }
    }

    /// Whether the error is a lookup failure (unknown name or scope) rather
    /// than a rejected value.
    #[must_use]
    pub const fn is_lookup_failure(&self) -> bool {
        matches!(self, Self::UnknownName { .. } | Self::UnknownScope { .. })
    }
}
