//! Regular-expression setting values.

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::{ValueError, ValueResult};

/// A compiled regular expression that remembers its source text.
///
/// A leading `!` negates the pattern: the value then matches every text the
/// remaining expression does not.
///
/// # Example
///
/// ```
/// use hermes_core::ConfigRegex;
///
/// let re = ConfigRegex::new("!^Re:").unwrap();
/// assert!(re.is_negated());
/// assert!(re.is_match("Hello"));
/// assert!(!re.is_match("Re: Hello"));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigRegex {
    pattern: String,
    regex: Regex,
    negated: bool,
}

impl ConfigRegex {
    /// Compile a pattern.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidRegex`] if the expression does not compile.
    pub fn new(pattern: &str) -> ValueResult<Self> {
        let (negated, expression) = match pattern.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, pattern),
        };

        let regex =
            Regex::new(expression).map_err(|e| ValueError::invalid_regex(pattern, e))?;

        Ok(Self {
            pattern: pattern.to_string(),
            regex,
            negated,
        })
    }

    /// The pattern as written, including any leading `!`.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The compiled expression, without negation applied.
    #[must_use]
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Whether the pattern was negated with a leading `!`.
    #[must_use]
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Test `text` against the pattern, honouring negation.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text) != self.negated
    }
}

impl PartialEq for ConfigRegex {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl Eq for ConfigRegex {}

impl fmt::Display for ConfigRegex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl FromStr for ConfigRegex {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_pattern() {
        let re = ConfigRegex::new("^\\[[a-z]+\\]").unwrap();
        assert!(!re.is_negated());
        assert!(re.is_match("[list] subject"));
        assert!(!re.is_match("subject"));
        assert_eq!(re.pattern(), "^\\[[a-z]+\\]");
    }

    #[test]
    fn test_invalid_pattern() {
        let err = ConfigRegex::new("(unclosed").unwrap_err();
        assert!(matches!(err, ValueError::InvalidRegex { .. }));
    }

    #[test]
    fn test_negated_keeps_source_text() {
        let re: ConfigRegex = "!spam".parse().unwrap();
        assert_eq!(re.to_string(), "!spam");
        assert_eq!(re.regex().as_str(), "spam");
        assert!(!re.is_match("more spam"));
    }

    #[test]
    fn test_equality_by_pattern() {
        assert_eq!(ConfigRegex::new("a+").unwrap(), ConfigRegex::new("a+").unwrap());
        assert_ne!(ConfigRegex::new("a+").unwrap(), ConfigRegex::new("!a+").unwrap());
    }
}
