//! String-list setting values.

use std::fmt;

/// An ordered list of strings, such as a list of header names.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StringList(Vec<String>);

impl StringList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append an item.
    pub fn push(&mut self, item: impl Into<String>) {
        self.0.push(item.into());
    }

    /// Whether `item` is in the list (exact match).
    #[must_use]
    pub fn contains(&self, item: &str) -> bool {
        self.0.iter().any(|s| s == item)
    }

    /// Iterate over the items in order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The items as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for StringList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a StringList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for StringList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(","))
    }
}
