//! The email address carried by address-kind settings.

use std::fmt;

/// A single email address with an optional display name.
///
/// Parsing and list handling of addresses belong to the mail layer; the store
/// only carries the parsed value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    personal: Option<String>,
    mailbox: String,
}

impl Address {
    /// Create an address with no display name.
    pub fn new(mailbox: impl Into<String>) -> Self {
        Self {
            personal: None,
            mailbox: mailbox.into(),
        }
    }

    /// Create an address with a display name.
    pub fn with_personal(personal: impl Into<String>, mailbox: impl Into<String>) -> Self {
        Self {
            personal: Some(personal.into()),
            mailbox: mailbox.into(),
        }
    }

    /// The display name, if any.
    #[must_use]
    pub fn personal(&self) -> Option<&str> {
        self.personal.as_deref()
    }

    /// The mailbox, e.g. `john@example.com`.
    #[must_use]
    pub fn mailbox(&self) -> &str {
        &self.mailbox
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.personal {
            Some(personal) => write!(f, "{personal} <{}>", self.mailbox),
            None => f.write_str(&self.mailbox),
        }
    }
}
