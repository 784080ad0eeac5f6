//! # Hermes
//!
//! **Typed, hierarchically scoped configuration for mail clients**
//!
//! Hermes keeps every user-tunable setting of a mail client in one store:
//!
//! - **Typed definitions** – each setting has a kind, a default and an optional validator
//! - **Scoped overrides** – global, account and folder scopes form a tree; a
//!   scope inherits everything it does not override
//! - **Infallible accessors** – `get_bool`, `get_long`, ... return a per-kind
//!   sentinel instead of failing
//! - **Structured logging** – `tracing` events for every change to the store
//!
//! ## Quick Start
//!
//! ```
//! use hermes::prelude::*;
//!
//! # fn main() -> Result<(), ConfigError> {
//! let mut registry = Registry::new();
//! registry.define(Definition::new("quit", Kind::Quad, Quad::Yes))?;
//! registry.define(Definition::empty("from", Kind::Address))?;
//!
//! let mut store = ConfigStore::new(registry);
//! let work = store.create_scope(store.root(), "work")?;
//! store.set_local(work, "from", Address::with_personal("Ada", "ada@work.example"))?;
//! store.set_local(work, "quit", Quad::AskYes)?;
//!
//! assert_eq!(store.get_quad(work, "quit"), Quad::AskYes);
//! assert_eq!(store.get_quad(store.root(), "quit"), Quad::Yes);
//! assert!(store.get_address(store.root(), "from").is_none());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! get_K(scope, name) → resolve: scope → parent → ... → root → registry default
//!                                          ↓
//!                        kind matches K ? payload : sentinel
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export value types
pub use hermes_core as core;

// Re-export the store
pub use hermes_config as config;

// Re-export logging setup
pub use hermes_telemetry as telemetry;

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```
/// use hermes::prelude::*;
///
/// let store = ConfigStore::new(Registry::new());
/// assert!(!store.get_bool(store.root(), "beep"));
/// ```
pub mod prelude {
    pub use hermes_core::{Address, ConfigRegex, Kind, Quad, StringList, Value};

    // Re-export the store and its building blocks
    pub use hermes_config::{
        ConfigError, ConfigResult, ConfigStore, Definition, Origin, OptionsLoader, Registry,
        ScopeId, SharedConfigStore, StoreOptions, Validator,
    };

    // Re-export logging setup
    pub use hermes_telemetry::{init_logging, LogConfig};
}
