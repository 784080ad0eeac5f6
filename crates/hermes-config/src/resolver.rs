//! Inheritance resolution and local overrides.
//!
//! A lookup starts at the caller's scope and walks the parent chain; the first
//! scope that overrides the name wins, and the registry default is used when
//! none does. Writes only ever touch the scope they target.

use std::fmt;

use hermes_core::Value;
use tracing::{debug, warn};

use crate::{ConfigResult, ConfigStore, ScopeId, ValueSlot};

/// Where an effective value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// The registry default.
    Default,
    /// An override set at the given scope.
    Scope(ScopeId),
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("default"),
            Self::Scope(id) => write!(f, "{id}"),
        }
    }
}

/// The outcome of resolving a name from a scope.
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'a> {
    /// The effective slot.
    pub slot: &'a ValueSlot,
    /// Where the slot was found.
    pub origin: Origin,
}

impl<'a> Resolved<'a> {
    /// The effective value.
    #[must_use]
    pub const fn value(&self) -> &'a Value {
        self.slot.value()
    }
}

/// One row of [`ConfigStore::effective`].
#[derive(Debug, Clone, Copy)]
pub struct EffectiveSetting<'a> {
    /// The setting name.
    pub name: &'a str,
    /// The effective value.
    pub value: &'a Value,
    /// Where the value comes from.
    pub origin: Origin,
}

impl ConfigStore {
    /// Resolve the effective slot of `name` as seen from `scope`.
    ///
    /// This is a pure read.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownScope` if `scope` (or an ancestor) is not
    /// live and `ConfigError::UnknownName` if the registry does not define
    /// `name`.
    pub fn resolve(&self, scope: ScopeId, name: &str) -> ConfigResult<Resolved<'_>> {
        let mut current = Some(scope);

        while let Some(id) = current {
            let node = self.scope(id)?;
            if let Some(slot) = node.get(name) {
                return Ok(Resolved {
                    slot,
                    origin: Origin::Scope(id),
                });
            }
            current = node.parent();
        }

        let slot = self.registry.default_slot_for(name)?;
        Ok(Resolved {
            slot,
            origin: Origin::Default,
        })
    }

    /// Whether `name` resolves from `scope`.
    ///
    /// Use this to tell a setting that is really `0`, `false` or `Abort`
    /// apart from a failed accessor lookup.
    #[must_use]
    pub fn exists(&self, scope: ScopeId, name: &str) -> bool {
        self.resolve(scope, name).is_ok()
    }

    /// Whether `scope` itself overrides `name`.
    #[must_use]
    pub fn is_set_locally(&self, scope: ScopeId, name: &str) -> bool {
        self.scope(scope).is_ok_and(|node| node.contains(name))
    }

    /// Override `name` at `scope`, replacing any earlier local override.
    ///
    /// Ancestors and siblings are not affected; descendants without their own
    /// override see the new value.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownScope`, `ConfigError::UnknownName`,
    /// `ConfigError::TypeMismatch` if the value's kind differs from the
    /// declared kind, or `ConfigError::ValidationFailed` if the validator
    /// rejects the value. The scope is unchanged on error.
    pub fn set_local(
        &mut self,
        scope: ScopeId,
        name: &str,
        value: impl Into<Value>,
    ) -> ConfigResult<()> {
        let value = value.into();
        self.scope(scope)?;

        if let Err(err) = self.check_value(name, &value) {
            warn!(scope = %scope, name, error = %err, "override rejected");
            return Err(err);
        }

        debug!(scope = %scope, name, kind = %value.kind(), value = %value, "setting overridden");
        self.scope_mut(scope)?.insert(ValueSlot::new(name, value));
        Ok(())
    }

    /// Remove the local override of `name` at `scope`, reverting to the
    /// inherited value. Returns whether an override was removed.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownScope` if `scope` is not live.
    pub fn unset_local(&mut self, scope: ScopeId, name: &str) -> ConfigResult<bool> {
        let removed = self.scope_mut(scope)?.remove(name);

        if removed.is_some() {
            debug!(scope = %scope, name, "override removed");
        }
        Ok(removed.is_some())
    }

    /// Every defined setting as seen from `scope`, in definition order.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownScope` if `scope` is not live.
    pub fn effective(&self, scope: ScopeId) -> ConfigResult<Vec<EffectiveSetting<'_>>> {
        self.scope(scope)?;

        self.registry
            .iter()
            .map(|definition| {
                let resolved = self.resolve(scope, definition.name())?;
                Ok(EffectiveSetting {
                    name: definition.name(),
                    value: resolved.value(),
                    origin: resolved.origin,
                })
            })
            .collect()
    }
}
