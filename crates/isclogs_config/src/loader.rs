//! Reading `isclogs.toml` from disk or text.

use crate::error::ConfigError;
use crate::types::LogConfig;
use std::path::Path;

/// Name of the configuration file looked up by [`load_config`].
pub const CONFIG_FILE_NAME: &str = "isclogs.toml";

/// Loads `<dir>/isclogs.toml`.
pub fn load_config(dir: &Path) -> Result<LogConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);
    match std::fs::read_to_string(&path) {
        Ok(content) => load_config_from_str(&content),
        Err(source) => Err(ConfigError::Read { path, source }),
    }
}

/// Parses configuration text. Every key is optional; an empty string yields
/// the defaults.
pub fn load_config_from_str(content: &str) -> Result<LogConfig, ConfigError> {
    let config: LogConfig = toml::from_str(content)?;
    if config.output.relative_to.as_deref() == Some("") {
        return Err(ConfigError::EmptyRelativeTo);
    }
    Ok(config)
}
