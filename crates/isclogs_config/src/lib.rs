//! Parsing and validation of `isclogs.toml` logging configuration files.
//!
//! This crate reads the configuration file and produces a strongly-typed
//! [`LogConfig`] that can build a threshold-filtered [`Logger`](isclogs_logger::Logger)
//! and the output format for writer-backed sinks.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
