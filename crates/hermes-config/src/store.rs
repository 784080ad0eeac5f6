//! The scope tree and its registry.
//!
//! [`ConfigStore`] owns a [`Registry`] and an arena of [`ScopeNode`]s addressed
//! by [`ScopeId`]. Parent links are ids assigned once at creation, so the tree
//! cannot form cycles and siblings can share a parent without reference
//! counting.

use hermes_core::Value;
use tracing::debug;

use crate::{
    ConfigError, ConfigResult, Definition, Registry, ScopeId, ScopeNode, SharedConfigStore,
    StoreOptions,
};

const PATH_SEPARATOR: &str = ":";

/// A registry of typed settings plus a tree of override scopes.
///
/// Every store starts with a root scope ([`ScopeId::ROOT`]). Child scopes such
/// as accounts or folders are created below it and see every value of their
/// ancestors until they override it.
///
/// # Example
///
/// ```
/// use hermes_config::{ConfigStore, Definition, Registry};
/// use hermes_core::Kind;
///
/// # fn main() -> Result<(), hermes_config::ConfigError> {
/// let mut registry = Registry::new();
/// registry.define(Definition::new("pager_index_lines", Kind::Long, 0_i64))?;
///
/// let mut store = ConfigStore::new(registry);
/// let work = store.create_scope(store.root(), "work")?;
///
/// store.set_local(work, "pager_index_lines", 10_i64)?;
/// assert_eq!(store.get_long(work, "pager_index_lines"), 10);
/// assert_eq!(store.get_long(store.root(), "pager_index_lines"), 0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ConfigStore {
    pub(crate) registry: Registry,
    pub(crate) scopes: Vec<Option<ScopeNode>>,
    pub(crate) options: StoreOptions,
}

impl ConfigStore {
    /// Create a store over `registry` with default options.
    #[must_use]
    pub fn new(registry: Registry) -> Self {
        Self::from_parts(registry, StoreOptions::default())
    }

    /// Create a store over `registry` with explicit options.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidOption` if `options` fail
    /// [`StoreOptions::validate`].
    pub fn with_options(registry: Registry, options: StoreOptions) -> ConfigResult<Self> {
        options.validate()?;
        Ok(Self::from_parts(registry, options))
    }

    fn from_parts(registry: Registry, options: StoreOptions) -> Self {
        Self {
            registry,
            scopes: vec![Some(ScopeNode::root())],
            options,
        }
    }

    /// The registry of definitions.
    #[must_use]
    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The store options.
    #[must_use]
    pub const fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Register another setting.
    ///
    /// # Errors
    ///
    /// See [`Registry::define`].
    pub fn define(&mut self, definition: Definition) -> ConfigResult<()> {
        self.registry.define(definition)
    }

    /// The root scope.
    #[must_use]
    pub const fn root(&self) -> ScopeId {
        ScopeId::ROOT
    }

    /// Look up a live scope.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownScope` for removed or foreign ids.
    pub fn scope(&self, id: ScopeId) -> ConfigResult<&ScopeNode> {
        self.scopes
            .get(id.index())
            .and_then(Option::as_ref)
            .ok_or_else(|| ConfigError::unknown_scope(id))
    }

    pub(crate) fn scope_mut(&mut self, id: ScopeId) -> ConfigResult<&mut ScopeNode> {
        self.scopes
            .get_mut(id.index())
            .and_then(Option::as_mut)
            .ok_or_else(|| ConfigError::unknown_scope(id))
    }

    /// Whether `id` refers to a live scope.
    #[must_use]
    pub fn contains_scope(&self, id: ScopeId) -> bool {
        self.scope(id).is_ok()
    }

    /// Number of live scopes, including the root.
    #[must_use]
    pub fn scope_count(&self) -> usize {
        self.scopes.iter().flatten().count()
    }

    /// Create a child scope under `parent`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidScopeName` if `name` is empty or contains
    /// `:`, `ConfigError::UnknownScope` if `parent` is not live,
    /// `ConfigError::DuplicateScope` if a sibling already has `name` (when
    /// unique names are enforced), and `ConfigError::DepthExceeded` if the new
    /// scope would be nested deeper than `max_scope_depth`.
    pub fn create_scope(&mut self, parent: ScopeId, name: &str) -> ConfigResult<ScopeId> {
        // Names must survive a round trip through `scope_path` / `find_scope`.
        if name.is_empty() || name.contains(PATH_SEPARATOR) {
            return Err(ConfigError::invalid_scope_name(name));
        }

        let depth = self.scope(parent)?.depth() + 1;
        if depth > self.options.max_scope_depth {
            return Err(ConfigError::DepthExceeded {
                max: self.options.max_scope_depth,
            });
        }

        if self.options.unique_scope_names && self.child(parent, name).is_some() {
            return Err(ConfigError::DuplicateScope {
                parent,
                name: name.to_string(),
            });
        }

        let id = ScopeId::new(self.scopes.len());
        self.scopes.push(Some(ScopeNode::child(name, parent, depth)));
        self.scope_mut(parent)?.add_child(id);

        debug!(scope = %id, parent = %parent, name, depth, "scope created");
        Ok(id)
    }

    /// Remove a scope, releasing all of its overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::RootScope` for the root,
    /// `ConfigError::ScopeHasChildren` while child scopes are alive, and
    /// `ConfigError::UnknownScope` for ids that are not live.
    pub fn remove_scope(&mut self, id: ScopeId) -> ConfigResult<()> {
        if id.is_root() {
            return Err(ConfigError::RootScope);
        }

        let node = self.scope(id)?;
        if !node.children().is_empty() {
            return Err(ConfigError::ScopeHasChildren {
                scope: id,
                children: node.children().len(),
            });
        }

        let node = self.scopes[id.index()]
            .take()
            .ok_or_else(|| ConfigError::unknown_scope(id))?;

        if let Some(parent) = node.parent() {
            self.scope_mut(parent)?.remove_child(id);
        }

        debug!(
            scope = %id,
            name = node.name(),
            released = node.len(),
            "scope removed"
        );
        Ok(())
    }

    /// The child of `parent` named `name`, if any.
    #[must_use]
    pub fn child(&self, parent: ScopeId, name: &str) -> Option<ScopeId> {
        let node = self.scope(parent).ok()?;
        node.children()
            .iter()
            .copied()
            .find(|child| self.scope(*child).is_ok_and(|c| c.name() == name))
    }

    /// The parent of `id`; `None` for the root or a dead id.
    #[must_use]
    pub fn parent(&self, id: ScopeId) -> Option<ScopeId> {
        self.scope(id).ok().and_then(ScopeNode::parent)
    }

    /// The name of `id`; empty for the root, `None` for a dead id.
    #[must_use]
    pub fn scope_name(&self, id: ScopeId) -> Option<&str> {
        self.scope(id).ok().map(ScopeNode::name)
    }

    /// Colon-separated names from the root down to `id`, e.g. `work:inbox`.
    /// The root itself has an empty path.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownScope` if `id` is not live.
    pub fn scope_path(&self, id: ScopeId) -> ConfigResult<String> {
        let mut names = Vec::new();
        let mut current = Some(id);

        while let Some(scope_id) = current {
            let node = self.scope(scope_id)?;
            if node.parent().is_some() {
                names.push(node.name());
            }
            current = node.parent();
        }

        names.reverse();
        Ok(names.join(PATH_SEPARATOR))
    }

    /// Find a scope by its colon-separated path; the empty path is the root.
    #[must_use]
    pub fn find_scope(&self, path: &str) -> Option<ScopeId> {
        if path.is_empty() {
            return Some(self.root());
        }

        path.split(PATH_SEPARATOR)
            .try_fold(self.root(), |scope, name| self.child(scope, name))
    }

    /// Wrap the store for use across threads.
    #[must_use]
    pub fn into_shared(self) -> SharedConfigStore {
        SharedConfigStore::new(self)
    }

    pub(crate) fn check_value(&self, name: &str, value: &Value) -> ConfigResult<()> {
        self.registry.definition(name)?.check(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hermes_core::Kind;

    fn store() -> ConfigStore {
        let mut registry = Registry::new();
        registry
            .define(Definition::new("pager_index_lines", Kind::Long, 0_i64))
            .unwrap();
        ConfigStore::new(registry)
    }

    #[test]
    fn test_new_store_has_root() {
        let store = store();
        assert_eq!(store.root(), ScopeId::ROOT);
        assert_eq!(store.scope_count(), 1);
        assert!(store.contains_scope(ScopeId::ROOT));
        assert_eq!(store.parent(ScopeId::ROOT), None);
    }

    #[test]
    fn test_create_scope() {
        let mut store = store();
        let work = store.create_scope(store.root(), "work").unwrap();
        let inbox = store.create_scope(work, "inbox").unwrap();

        assert_eq!(store.parent(inbox), Some(work));
        assert_eq!(store.scope(inbox).unwrap().depth(), 2);
        assert_eq!(store.scope(work).unwrap().children(), &[inbox]);
        assert_eq!(store.scope_count(), 3);
    }

    #[test]
    fn test_create_scope_under_unknown_parent() {
        let mut store = store();
        let err = store.create_scope(ScopeId::new(42), "x").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownScope { .. }));
    }

    #[test]
    fn test_duplicate_sibling_names() {
        let mut store = store();
        store.create_scope(store.root(), "work").unwrap();
        let err = store.create_scope(store.root(), "work").unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateScope { .. }));
    }

    #[test]
    fn test_duplicate_sibling_names_allowed_when_disabled() {
        let options = StoreOptions {
            unique_scope_names: false,
            ..Default::default()
        };
        let mut store = ConfigStore::with_options(Registry::new(), options).unwrap();
        let a = store.create_scope(store.root(), "work").unwrap();
        let b = store.create_scope(store.root(), "work").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_depth_limit() {
        let options = StoreOptions {
            max_scope_depth: 2,
            ..Default::default()
        };
        let mut store = ConfigStore::with_options(Registry::new(), options).unwrap();
        let a = store.create_scope(store.root(), "a").unwrap();
        let b = store.create_scope(a, "b").unwrap();
        let err = store.create_scope(b, "c").unwrap_err();
        assert!(matches!(err, ConfigError::DepthExceeded { max: 2 }));
    }

    #[test]
    fn test_with_options_validates() {
        let options = StoreOptions {
            max_scope_depth: 0,
            ..Default::default()
        };
        let err = ConfigStore::with_options(Registry::new(), options).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOption { .. }));
    }

    #[test]
    fn test_invalid_scope_names() {
        let mut store = store();
        for name in ["", "work:inbox", ":", "work:"] {
            let err = store.create_scope(store.root(), name).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidScopeName { .. }), "{name:?}");
        }
        assert_eq!(store.scope_count(), 1);
        assert_eq!(store.find_scope(""), Some(store.root()));
    }

    #[test]
    fn test_paths_round_trip() {
        let mut store = store();
        let work = store.create_scope(store.root(), "work").unwrap();
        let home = store.create_scope(store.root(), "home").unwrap();
        let inbox = store.create_scope(work, "inbox").unwrap();
        let nested = store.create_scope(inbox, "lists.rust").unwrap();
        let home_inbox = store.create_scope(home, "inbox").unwrap();

        for id in [store.root(), work, home, inbox, nested, home_inbox] {
            let path = store.scope_path(id).unwrap();
            assert_eq!(store.find_scope(&path), Some(id), "{path:?}");
        }
    }

    #[test]
    fn test_remove_scope() {
        let mut store = store();
        let work = store.create_scope(store.root(), "work").unwrap();
        store.set_local(work, "pager_index_lines", 10_i64).unwrap();

        store.remove_scope(work).unwrap();
        assert!(!store.contains_scope(work));
        assert!(store.scope(store.root()).unwrap().children().is_empty());
        assert_eq!(store.scope_count(), 1);

        // Ids are not reused.
        let other = store.create_scope(store.root(), "work").unwrap();
        assert_ne!(other, work);
        assert_eq!(store.get_long(work, "pager_index_lines"), 0);
        assert!(!store.exists(work, "pager_index_lines"));
    }

    #[test]
    fn test_remove_scope_with_children() {
        let mut store = store();
        let work = store.create_scope(store.root(), "work").unwrap();
        let inbox = store.create_scope(work, "inbox").unwrap();

        let err = store.remove_scope(work).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ScopeHasChildren { children: 1, .. }
        ));

        store.remove_scope(inbox).unwrap();
        store.remove_scope(work).unwrap();
    }

    #[test]
    fn test_remove_root_or_dead_scope() {
        let mut store = store();
        assert!(matches!(
            store.remove_scope(ScopeId::ROOT),
            Err(ConfigError::RootScope)
        ));

        let work = store.create_scope(store.root(), "work").unwrap();
        store.remove_scope(work).unwrap();
        assert!(matches!(
            store.remove_scope(work),
            Err(ConfigError::UnknownScope { .. })
        ));
    }

    #[test]
    fn test_scope_paths() {
        let mut store = store();
        let work = store.create_scope(store.root(), "work").unwrap();
        let inbox = store.create_scope(work, "inbox").unwrap();

        assert_eq!(store.scope_path(store.root()).unwrap(), "");
        assert_eq!(store.scope_path(work).unwrap(), "work");
        assert_eq!(store.scope_path(inbox).unwrap(), "work:inbox");

        assert_eq!(store.find_scope(""), Some(store.root()));
        assert_eq!(store.find_scope("work:inbox"), Some(inbox));
        assert_eq!(store.find_scope("work:outbox"), None);
        assert_eq!(store.child(work, "inbox"), Some(inbox));
        assert_eq!(store.scope_name(inbox), Some("inbox"));
        assert_eq!(store.scope_name(store.root()), Some(""));
    }

    #[test]
    fn test_define_through_store() {
        let mut store = store();
        store
            .define(Definition::new("beep", Kind::Bool, true))
            .unwrap();
        assert!(store.get_bool(store.root(), "beep"));
        assert!(store
            .define(Definition::new("beep", Kind::Bool, true))
            .is_err());
    }
}
