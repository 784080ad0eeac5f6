//! The closed set of setting kinds.

use std::fmt;

/// Type tag of a configuration setting.
///
/// The set is closed: a setting is declared with one of these kinds and every
/// value stored for it must be of the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    /// An email address.
    Address,
    /// A boolean switch.
    Bool,
    /// A signed 64-bit integer.
    Long,
    /// A signed 16-bit integer.
    Number,
    /// An ask/yes/no/abort decision.
    Quad,
    /// A compiled regular expression.
    Regex,
    /// An ordered list of strings.
    StringList,
    /// A string.
    String,
}

impl Kind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Address,
        Self::Bool,
        Self::Long,
        Self::Number,
        Self::Quad,
        Self::Regex,
        Self::StringList,
        Self::String,
    ];

    /// Returns the lowercase name used in messages and dumps.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::Bool => "boolean",
            Self::Long => "long",
            Self::Number => "number",
            Self::Quad => "quad",
            Self::Regex => "regex",
            Self::StringList => "slist",
            Self::String => "string",
        }
    }

    /// Returns `true` for kinds whose payload is an owned, possibly empty, value.
    #[must_use]
    pub const fn is_reference(&self) -> bool {
        matches!(
            self,
            Self::Address | Self::Regex | Self::StringList | Self::String
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
