//! Structured logging for Hermes.
//!
//! The configuration store emits `tracing` events when settings are defined,
//! overridden or removed and when scopes come and go. This crate installs a
//! `tracing-subscriber` pipeline that renders those events either as JSON
//! (production) or in a human-readable format (development).
//!
//! # Example
//!
//! ```rust,ignore
//! use hermes_telemetry::{init_logging, LogConfig};
//!
//! init_logging(&LogConfig::development())?;
//!
//! tracing::debug!(scope = "work", name = "pager_index_lines", "setting overridden");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod logging;

pub use error::TelemetryError;
pub use logging::{create_env_filter, init_logging, LogConfig};

/// Result type for telemetry operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;
