//! Quad-option values for confirmation-style settings.

use std::fmt;
use std::str::FromStr;

use crate::ValueError;

/// A four-way decision value with an extra "never decided" state.
///
/// `Abort` doubles as the error sentinel of the quad accessor, which is why
/// it is also the [`Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Quad {
    /// No decision; the operation is abandoned.
    #[default]
    Abort,
    /// Always answer no.
    No,
    /// Always answer yes.
    Yes,
    /// Ask the user, defaulting to no.
    AskNo,
    /// Ask the user, defaulting to yes.
    AskYes,
}

impl Quad {
    /// Returns the configuration-text form of the value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Abort => "abort",
            Self::No => "no",
            Self::Yes => "yes",
            Self::AskNo => "ask-no",
            Self::AskYes => "ask-yes",
        }
    }

    /// Returns `true` if the user has to be prompted.
    #[must_use]
    pub const fn is_ask(&self) -> bool {
        matches!(self, Self::AskNo | Self::AskYes)
    }

    /// Flips the answer while keeping the ask state; `Abort` stays `Abort`.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Abort => Self::Abort,
            Self::No => Self::Yes,
            Self::Yes => Self::No,
            Self::AskNo => Self::AskYes,
            Self::AskYes => Self::AskNo,
        }
    }
}

impl fmt::Display for Quad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Quad {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "no" => Ok(Self::No),
            "yes" => Ok(Self::Yes),
            "ask-no" => Ok(Self::AskNo),
            "ask-yes" => Ok(Self::AskYes),
            _ => Err(ValueError::invalid_quad(s)),
        }
    }
}
