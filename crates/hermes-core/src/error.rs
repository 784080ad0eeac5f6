//! Errors raised while building configuration values.

use thiserror::Error;

/// Result type alias using [`ValueError`].
pub type ValueResult<T> = Result<T, ValueError>;

/// Errors that can occur when constructing a [`Value`](crate::Value) payload.
#[derive(Error, Debug)]
pub enum ValueError {
    /// The pattern of a regex setting does not compile.
    #[error("invalid regular expression '{pattern}': {source}")]
    InvalidRegex {
        /// The rejected pattern text.
        pattern: String,
        /// Underlying compile error.
        #[source]
        source: regex::Error,
    },

    /// Text that does not name a quad option.
    #[error("invalid quad value '{0}': expected abort, no, yes, ask-no or ask-yes")]
    InvalidQuad(String),
}

impl ValueError {
    /// Create a new invalid regex error.
    pub fn invalid_regex(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidRegex {
            pattern: pattern.into(),
            source,
        }
    }

    /// Create a new invalid quad error.
    pub fn invalid_quad(text: impl Into<String>) -> Self {
        Self::InvalidQuad(text.into())
    }
}
