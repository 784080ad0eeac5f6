//! The catalog of known settings.
//!
//! Every setting must be defined here, with its kind and default, before any
//! scope may override it. The registry acts as the implicit root of every
//! scope tree: a lookup that finds no override ends at the registry default.

use hermes_core::{Kind, Value};
use indexmap::IndexMap;
use tracing::debug;

use crate::{ConfigError, ConfigResult, Validator, ValueSlot};

/// Declaration of a single setting.
///
/// # Example
///
/// ```
/// use hermes_config::{Definition, Validator};
/// use hermes_core::Kind;
///
/// let def = Definition::new("pager_index_lines", Kind::Long, 0_i64)
///     .with_validator(Validator::non_negative())
///     .with_description("Number of index lines shown above the pager");
///
/// assert_eq!(def.kind(), Kind::Long);
/// ```
#[derive(Debug, Clone)]
pub struct Definition {
    kind: Kind,
    default: ValueSlot,
    validator: Option<Validator>,
    description: Option<String>,
}

impl Definition {
    /// Declare a setting of `kind` with its default value.
    ///
    /// The default is checked against `kind` when the definition is added to
    /// a [`Registry`].
    pub fn new(name: impl Into<String>, kind: Kind, default: impl Into<Value>) -> Self {
        Self {
            kind,
            default: ValueSlot::new(name, default),
            validator: None,
            description: None,
        }
    }

    /// Declare a setting whose default is the empty value of its kind.
    pub fn empty(name: impl Into<String>, kind: Kind) -> Self {
        Self::new(name, kind, Value::empty(kind))
    }

    /// Attach a validator.
    #[must_use]
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The setting name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.default.name()
    }

    /// The declared kind.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    /// The default slot.
    #[must_use]
    pub const fn default_slot(&self) -> &ValueSlot {
        &self.default
    }

    /// The validator, if any.
    #[must_use]
    pub const fn validator(&self) -> Option<&Validator> {
        self.validator.as_ref()
    }

    /// The description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Check a candidate value against the declared kind and the validator.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::TypeMismatch` if the kinds differ and
    /// `ConfigError::ValidationFailed` if the validator rejects the value.
    pub fn check(&self, value: &Value) -> ConfigResult<()> {
        if value.kind() != self.kind {
            return Err(ConfigError::type_mismatch(
                self.name(),
                self.kind,
                value.kind(),
            ));
        }

        if let Some(validator) = &self.validator {
            validator
                .validate(value)
                .map_err(|reason| ConfigError::validation_failed(self.name(), reason))?;
        }

        Ok(())
    }
}

/// The set of all defined settings, in definition order.
///
/// A registry is an ordinary value: build one, define settings, and hand it
/// to [`ConfigStore::new`](crate::ConfigStore::new). Tests can create as many
/// independent registries as they like.
#[derive(Debug, Default)]
pub struct Registry {
    definitions: IndexMap<String, Definition>,
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a setting.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DuplicateDefinition` if the name is taken, and
    /// `ConfigError::TypeMismatch` / `ConfigError::ValidationFailed` if the
    /// default does not satisfy the definition itself.
    pub fn define(&mut self, definition: Definition) -> ConfigResult<()> {
        if self.definitions.contains_key(definition.name()) {
            return Err(ConfigError::duplicate_definition(definition.name()));
        }

        definition.check(definition.default_slot().value())?;

        debug!(
            name = definition.name(),
            kind = %definition.kind(),
            default = %definition.default_slot().value(),
            "setting defined"
        );

        self.definitions
            .insert(definition.name().to_string(), definition);
        Ok(())
    }

    /// Look up a definition by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Definition> {
        self.definitions.get(name)
    }

    /// Look up a definition, failing for unknown names.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownName` if `name` was never defined.
    pub fn definition(&self, name: &str) -> ConfigResult<&Definition> {
        self.get(name).ok_or_else(|| ConfigError::unknown_name(name))
    }

    /// The default slot of `name`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownName` if `name` was never defined.
    pub fn default_slot_for(&self, name: &str) -> ConfigResult<&ValueSlot> {
        self.definition(name).map(Definition::default_slot)
    }

    /// Whether `name` is defined.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// Definitions in the order they were registered.
    pub fn iter(&self) -> impl Iterator<Item = &Definition> {
        self.definitions.values()
    }

    /// Number of defined settings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether nothing is defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
