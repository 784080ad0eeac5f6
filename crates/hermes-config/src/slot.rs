//! Named value slots.

use hermes_core::{Kind, Value};

/// A single named setting value.
///
/// The kind of a slot is the kind of its value, so the two can never drift
/// apart.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueSlot {
    name: String,
    value: Value,
}

impl ValueSlot {
    /// Create a slot.
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The setting name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The kind of the stored value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        self.value.kind()
    }

    /// The stored value.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Consume the slot, returning its value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.value
    }
}
