//! Typed, hierarchically scoped configuration store for Hermes.
//!
//! This crate provides:
//! - a [`Registry`] of typed setting definitions with defaults and validators
//! - a tree of override scopes (global, account, folder, ...) in a
//!   [`ConfigStore`]
//! - inheritance resolution: a scope sees its own override, else the nearest
//!   ancestor's, else the registry default
//! - typed accessors that never fail and return a per-kind sentinel instead
//! - [`StoreOptions`] for the store itself, loaded through [`OptionsLoader`]
//!   (defaults → file → env)
//!
//! # Example
//!
//! ```
//! use hermes_config::{ConfigStore, Definition, Origin, Registry, Validator};
//! use hermes_core::Kind;
//!
//! # fn main() -> Result<(), hermes_config::ConfigError> {
//! let mut registry = Registry::new();
//! registry.define(
//!     Definition::new("pager_index_lines", Kind::Long, 0_i64)
//!         .with_validator(Validator::non_negative()),
//! )?;
//!
//! let mut store = ConfigStore::new(registry);
//! let work = store.create_scope(store.root(), "work")?;
//! let inbox = store.create_scope(work, "inbox")?;
//!
//! store.set_local(work, "pager_index_lines", 10_i64)?;
//! assert_eq!(store.get_long(inbox, "pager_index_lines"), 10);
//! assert_eq!(store.resolve(inbox, "pager_index_lines")?.origin, Origin::Scope(work));
//!
//! // Wrong kind: the accessor falls back to its sentinel.
//! assert!(!store.get_bool(inbox, "pager_index_lines"));
//!
//! store.unset_local(work, "pager_index_lines")?;
//! assert_eq!(store.get_long(inbox, "pager_index_lines"), 0);
//! # Ok(())
//! # }
//! ```
//!
//! # Store options
//!
//! ```toml
//! max_scope_depth = 8
//! unique_scope_names = true
//! trace_lookups = false
//!
//! [logging]
//! enabled = true
//! level = "info"
//! format = "json"
//! ```
//!
//! Every option can be overridden with `PREFIX__KEY`, for example
//! `HERMES__MAX_SCOPE_DEPTH=4` or `HERMES__LOGGING__LEVEL=debug`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod accessor;
mod error;
mod loader;
mod options;
mod registry;
mod resolver;
mod scope;
mod shared;
mod slot;
mod store;
mod validator;

pub use error::{ConfigError, ConfigResult};
pub use loader::OptionsLoader;
pub use options::{LogFormat, LoggingOptions, StoreOptions};
pub use registry::{Definition, Registry};
pub use resolver::{EffectiveSetting, Origin, Resolved};
pub use scope::{ScopeId, ScopeNode};
pub use shared::SharedConfigStore;
pub use slot::ValueSlot;
pub use store::ConfigStore;
pub use validator::Validator;
