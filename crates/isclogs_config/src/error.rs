//! Error types for `isclogs.toml` loading and validation.

use std::path::PathBuf;

/// Errors that can occur when loading or validating an `isclogs.toml` configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },

    /// The TOML content is malformed, has unknown keys, or names an unknown severity.
    #[error("invalid logging configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// `output.relative_to` was given but is empty, so it could never shorten anything.
    #[error("output.relative_to must not be empty")]
    EmptyRelativeTo,
}
