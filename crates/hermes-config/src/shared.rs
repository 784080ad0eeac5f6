//! Thread-safe handle around a [`ConfigStore`].

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::ConfigStore;

/// A [`ConfigStore`] behind one reader-writer lock.
///
/// Lookups take the shared lock and may run concurrently; definitions,
/// overrides and scope changes take the exclusive lock. Accessor results
/// borrow from the read guard, so they cannot outlive it.
///
/// # Example
///
/// ```
/// use hermes_config::{ConfigStore, Definition, Registry};
/// use hermes_core::Kind;
///
/// # fn main() -> Result<(), hermes_config::ConfigError> {
/// let mut registry = Registry::new();
/// registry.define(Definition::new("beep", Kind::Bool, true))?;
/// let shared = ConfigStore::new(registry).into_shared();
///
/// let root = shared.read().root();
/// shared.write().set_local(root, "beep", false)?;
/// assert!(!shared.read().get_bool(root, "beep"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SharedConfigStore {
    inner: Arc<RwLock<ConfigStore>>,
}

impl SharedConfigStore {
    /// Wrap a store.
    #[must_use]
    pub fn new(store: ConfigStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Take the shared lock for lookups.
    pub fn read(&self) -> RwLockReadGuard<'_, ConfigStore> {
        self.inner.read()
    }

    /// Take the exclusive lock for mutations.
    pub fn write(&self) -> RwLockWriteGuard<'_, ConfigStore> {
        self.inner.write()
    }
}
