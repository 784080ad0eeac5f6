//! The tagged payload of a configuration setting.

use std::fmt;

use crate::{Address, ConfigRegex, Kind, Quad, StringList};

/// A configuration value of one of the supported kinds.
///
/// The variant is the kind, so a value can never be read back as a
/// different kind than the one it was stored as. Reference kinds wrap their
/// payload in an `Option`; `None` is an empty value, not a missing one.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An address, possibly empty.
    Address(Option<Address>),
    /// A boolean.
    Bool(bool),
    /// A 64-bit integer.
    Long(i64),
    /// A 16-bit integer.
    Number(i16),
    /// A quad option.
    Quad(Quad),
    /// A regular expression, possibly empty.
    Regex(Option<ConfigRegex>),
    /// A string list, possibly empty.
    StringList(Option<StringList>),
    /// A string, possibly empty.
    String(Option<String>),
}

impl Value {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Address(_) => Kind::Address,
            Self::Bool(_) => Kind::Bool,
            Self::Long(_) => Kind::Long,
            Self::Number(_) => Kind::Number,
            Self::Quad(_) => Kind::Quad,
            Self::Regex(_) => Kind::Regex,
            Self::StringList(_) => Kind::StringList,
            Self::String(_) => Kind::String,
        }
    }

    /// The zero value of a kind: `false`, `0`, `Abort` or empty.
    #[must_use]
    pub const fn empty(kind: Kind) -> Self {
        match kind {
            Kind::Address => Self::Address(None),
            Kind::Bool => Self::Bool(false),
            Kind::Long => Self::Long(0),
            Kind::Number => Self::Number(0),
            Kind::Quad => Self::Quad(Quad::Abort),
            Kind::Regex => Self::Regex(None),
            Kind::StringList => Self::StringList(None),
            Kind::String => Self::String(None),
        }
    }

    /// Whether a reference-kind value holds nothing. Scalars are never empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(
            self,
            Self::Address(None) | Self::Regex(None) | Self::StringList(None) | Self::String(None)
        )
    }

    /// The boolean payload, if this is a `Bool`.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer payload, if this is a `Long`.
    #[must_use]
    pub const fn as_long(&self) -> Option<i64> {
        match self {
            Self::Long(n) => Some(*n),
            _ => None,
        }
    }

    /// The integer payload, if this is a `Number`.
    #[must_use]
    pub const fn as_number(&self) -> Option<i16> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The quad payload, if this is a `Quad`.
    #[must_use]
    pub const fn as_quad(&self) -> Option<Quad> {
        match self {
            Self::Quad(q) => Some(*q),
            _ => None,
        }
    }

    /// The address, if this is a non-empty `Address`.
    #[must_use]
    pub fn as_address(&self) -> Option<&Address> {
        match self {
            Self::Address(a) => a.as_ref(),
            _ => None,
        }
    }

    /// The regex, if this is a non-empty `Regex`.
    #[must_use]
    pub fn as_regex(&self) -> Option<&ConfigRegex> {
        match self {
            Self::Regex(r) => r.as_ref(),
            _ => None,
        }
    }

    /// The list, if this is a non-empty `StringList`.
    #[must_use]
    pub fn as_string_list(&self) -> Option<&StringList> {
        match self {
            Self::StringList(l) => l.as_ref(),
            _ => None,
        }
    }

    /// The string, if this is a non-empty `String`.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => s.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => f.write_str(if *b { "yes" } else { "no" }),
            Self::Long(n) => write!(f, "{n}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Quad(q) => write!(f, "{q}"),
            Self::Address(Some(a)) => write!(f, "{a}"),
            Self::Regex(Some(r)) => write!(f, "{r}"),
            Self::StringList(Some(l)) => write!(f, "{l}"),
            Self::String(Some(s)) => f.write_str(s),
            Self::Address(None) | Self::Regex(None) | Self::StringList(None) | Self::String(None) => {
                Ok(())
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Long(n)
    }
}

impl From<i16> for Value {
    fn from(n: i16) -> Self {
        Self::Number(n)
    }
}

impl From<Quad> for Value {
    fn from(q: Quad) -> Self {
        Self::Quad(q)
    }
}

impl From<Address> for Value {
    fn from(a: Address) -> Self {
        Self::Address(Some(a))
    }
}

impl From<ConfigRegex> for Value {
    fn from(r: ConfigRegex) -> Self {
        Self::Regex(Some(r))
    }
}

impl From<StringList> for Value {
    fn from(l: StringList) -> Self {
        Self::StringList(Some(l))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(Some(s))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(Some(s.to_string()))
    }
}
