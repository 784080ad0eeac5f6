//! Typed accessors.
//!
//! One getter per kind. Each resolves the name from the scope and returns the
//! payload when the effective value has the requested kind. Any failure
//! (missing scope or name, dead scope, undefined name, kind mismatch)
//! collapses into the kind's sentinel:
//!
//! | Accessor | Sentinel |
//! |---|---|
//! | [`get_bool`](ConfigStore::get_bool) | `false` |
//! | [`get_long`](ConfigStore::get_long), [`get_number`](ConfigStore::get_number) | `0` |
//! | [`get_quad`](ConfigStore::get_quad) | [`Quad::Abort`] |
//! | reference kinds | `None` |
//!
//! Use [`ConfigStore::exists`] or [`ConfigStore::resolve`] when a sentinel
//! must be told apart from a real value.

use hermes_core::{Address, ConfigRegex, Kind, Quad, StringList, Value};
use tracing::trace;

use crate::{ConfigError, ConfigStore, ScopeId};

impl ConfigStore {
    /// Resolve `name` from `scope` and return the value if it has `kind`.
    fn lookup(&self, scope: Option<ScopeId>, name: Option<&str>, kind: Kind) -> Option<&Value> {
        let (scope, name) = (scope?, name?);

        let result = self.resolve(scope, name).and_then(|resolved| {
            let value = resolved.value();
            if value.kind() == kind {
                Ok(value)
            } else {
                Err(ConfigError::type_mismatch(name, kind, value.kind()))
            }
        });

        match result {
            Ok(value) => Some(value),
            Err(err) => {
                if self.options.trace_lookups {
                    trace!(scope = %scope, name, kind = %kind, error = %err, "lookup fell back to sentinel");
                }
                None
            }
        }
    }

    /// The `Address` value of `name`, or `None`.
    #[must_use]
    pub fn get_address<'n>(
        &self,
        scope: impl Into<Option<ScopeId>>,
        name: impl Into<Option<&'n str>>,
    ) -> Option<&Address> {
        self.lookup(scope.into(), name.into(), Kind::Address)
            .and_then(Value::as_address)
    }

    /// The `Bool` value of `name`, or `false`.
    #[must_use]
    pub fn get_bool<'n>(
        &self,
        scope: impl Into<Option<ScopeId>>,
        name: impl Into<Option<&'n str>>,
    ) -> bool {
        self.lookup(scope.into(), name.into(), Kind::Bool)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// The `Long` value of `name`, or `0`.
    #[must_use]
    pub fn get_long<'n>(
        &self,
        scope: impl Into<Option<ScopeId>>,
        name: impl Into<Option<&'n str>>,
    ) -> i64 {
        self.lookup(scope.into(), name.into(), Kind::Long)
            .and_then(Value::as_long)
            .unwrap_or(0)
    }

    /// The `Number` value of `name`, or `0`.
    #[must_use]
    pub fn get_number<'n>(
        &self,
        scope: impl Into<Option<ScopeId>>,
        name: impl Into<Option<&'n str>>,
    ) -> i16 {
        self.lookup(scope.into(), name.into(), Kind::Number)
            .and_then(Value::as_number)
            .unwrap_or(0)
    }

    /// The `Quad` value of `name`, or [`Quad::Abort`].
    #[must_use]
    pub fn get_quad<'n>(
        &self,
        scope: impl Into<Option<ScopeId>>,
        name: impl Into<Option<&'n str>>,
    ) -> Quad {
        self.lookup(scope.into(), name.into(), Kind::Quad)
            .and_then(Value::as_quad)
            .unwrap_or(Quad::Abort)
    }

    /// The `Regex` value of `name`, or `None`.
    #[must_use]
    pub fn get_regex<'n>(
        &self,
        scope: impl Into<Option<ScopeId>>,
        name: impl Into<Option<&'n str>>,
    ) -> Option<&ConfigRegex> {
        self.lookup(scope.into(), name.into(), Kind::Regex)
            .and_then(Value::as_regex)
    }

    /// The `StringList` value of `name`, or `None`.
    #[must_use]
    pub fn get_string_list<'n>(
        &self,
        scope: impl Into<Option<ScopeId>>,
        name: impl Into<Option<&'n str>>,
    ) -> Option<&StringList> {
        self.lookup(scope.into(), name.into(), Kind::StringList)
            .and_then(Value::as_string_list)
    }

    /// The `String` value of `name`, or `None`.
    #[must_use]
    pub fn get_string<'n>(
        &self,
        scope: impl Into<Option<ScopeId>>,
        name: impl Into<Option<&'n str>>,
    ) -> Option<&str> {
        self.lookup(scope.into(), name.into(), Kind::String)
            .and_then(Value::as_str)
    }
}
