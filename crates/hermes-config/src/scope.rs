//! Nodes of the override hierarchy.

use std::fmt;

use indexmap::IndexMap;

use crate::ValueSlot;

/// Stable handle of a scope inside a [`ConfigStore`](crate::ConfigStore).
///
/// Ids are never reused: once a scope is removed its id stays invalid for the
/// lifetime of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(usize);

impl ScopeId {
    /// The root scope every store starts with.
    pub const ROOT: Self = Self(0);

    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the scope in the store's arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Whether this is the root scope.
    #[must_use]
    pub const fn is_root(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scope#{}", self.0)
    }
}

/// One level of the override hierarchy.
///
/// A scope holds only the settings explicitly overridden at that level, in the
/// order they were first set. Everything else is inherited from the parent
/// chain and finally from the registry defaults.
#[derive(Debug)]
pub struct ScopeNode {
    name: String,
    parent: Option<ScopeId>,
    depth: usize,
    children: Vec<ScopeId>,
    overrides: IndexMap<String, ValueSlot>,
}

impl ScopeNode {
    pub(crate) fn root() -> Self {
        Self {
            name: String::new(),
            parent: None,
            depth: 0,
            children: Vec::new(),
            overrides: IndexMap::new(),
        }
    }

    pub(crate) fn child(name: impl Into<String>, parent: ScopeId, depth: usize) -> Self {
        Self {
            name: name.into(),
            parent: Some(parent),
            depth,
            children: Vec::new(),
            overrides: IndexMap::new(),
        }
    }

    /// Name of the scope; empty for the root.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The enclosing scope, `None` for the root.
    #[must_use]
    pub const fn parent(&self) -> Option<ScopeId> {
        self.parent
    }

    /// Distance from the root; the root has depth 0.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Live child scopes, in creation order.
    #[must_use]
    pub fn children(&self) -> &[ScopeId] {
        &self.children
    }

    /// The local override for `name`, if this scope set one.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ValueSlot> {
        self.overrides.get(name)
    }

    /// Whether this scope overrides `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.overrides.contains_key(name)
    }

    /// Local overrides in the order they were first set.
    pub fn overrides(&self) -> impl Iterator<Item = &ValueSlot> {
        self.overrides.values()
    }

    /// Number of local overrides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    /// Whether the scope overrides nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    /// Replacing an existing override keeps its position.
    pub(crate) fn insert(&mut self, slot: ValueSlot) -> Option<ValueSlot> {
        self.overrides.insert(slot.name().to_string(), slot)
    }

    pub(crate) fn remove(&mut self, name: &str) -> Option<ValueSlot> {
        self.overrides.shift_remove(name)
    }

    pub(crate) fn add_child(&mut self, child: ScopeId) {
        self.children.push(child);
    }

    pub(crate) fn remove_child(&mut self, child: ScopeId) {
        self.children.retain(|c| *c != child);
    }
}
