//! Process-wide configuration for the binaries
//!
//! Goose transactions are plain functions of a `GooseUser`, so the loaded
//! configuration is parked in a global before the attack starts.

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use todo_loadtest_config::{ConfigLoader, LoadTestConfig};

static SETTINGS: OnceCell<LoadTestConfig> = OnceCell::new();

/// Read `.env` from the working directory if there is one
pub fn load_dotenv() -> Result<Option<PathBuf>> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e).context("Failed to read .env file"),
    }
}

/// Load configuration from `path`, `TODO_LOADTEST_CONFIG` or the environment
pub fn load(path: Option<&Path>) -> Result<LoadTestConfig> {
    ConfigLoader::new()
        .load(path)
        .context("Failed to load configuration")
}

/// Make `config` the process configuration. The first install wins.
pub fn install(config: LoadTestConfig) -> &'static LoadTestConfig {
    SETTINGS.get_or_init(|| config)
}

/// The installed configuration, or defaults when nothing was installed
pub fn current() -> &'static LoadTestConfig {
    SETTINGS.get_or_init(LoadTestConfig::default)
}
