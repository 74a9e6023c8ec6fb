//! Startup configuration resolution.
//!
//! # Design Decisions
//! - Fail fast: an unreadable or invalid config file is fatal
//! - A missing config file means built-in defaults

use std::path::Path;

use crate::config::validation::validate_config;
use crate::config::{load_config, AppConfig, ConfigError};

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "shop-router.toml";

/// Load `path` if it exists, otherwise use validated defaults.
pub fn resolve_config(path: &Path) -> Result<AppConfig, ConfigError> {
    if path.exists() {
        return load_config(path);
    }

    let config = AppConfig::default();
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
