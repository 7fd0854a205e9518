//! Configuration loading and environment variable handling

use crate::domains::LoadTestConfig;
use crate::error::{ConfigError, ConfigResult};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

/// Un-prefixed switch for failure diagnostics, kept for existing run scripts
pub const DEBUG_MODE_VAR: &str = "DEBUG_MODE";

/// Configuration loader with environment variable support
pub struct ConfigLoader {
    /// Environment variable prefix
    prefix: String,
}

impl ConfigLoader {
    /// Create a new config loader with default prefix
    pub fn new() -> Self {
        Self {
            prefix: "TODO_LOADTEST".to_string(),
        }
    }

    /// Load configuration from a YAML file with environment overrides
    pub fn from_file(&self, path: impl AsRef<Path>) -> ConfigResult<LoadTestConfig> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());

        let content = std::fs::read_to_string(path)?;
        let mut config: LoadTestConfig = serde_yaml::from_str(&content)?;

        self.apply_env_overrides(&mut config)?;
        config.validate_all()?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env(&self) -> ConfigResult<LoadTestConfig> {
        let mut config = LoadTestConfig::default();
        self.apply_env_overrides(&mut config)?;
        config.validate_all()?;
        Ok(config)
    }

    /// Load configuration from `config_path`, falling back to the file named by
    /// `<PREFIX>_CONFIG`, then to defaults plus environment
    pub fn load(&self, config_path: Option<impl AsRef<Path>>) -> ConfigResult<LoadTestConfig> {
        if let Some(path) = config_path {
            return self.from_file(path);
        }

        match self.get_env_var("CONFIG") {
            Ok(path) if !path.is_empty() => self.from_file(PathBuf::from(path)),
            _ => self.from_env(),
        }
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(&self, config: &mut LoadTestConfig) -> ConfigResult<()> {
        self.apply_target_overrides(&mut config.target)?;
        self.apply_http_overrides(&mut config.http)?;
        self.apply_scenario_overrides(&mut config.scenario)?;
        self.apply_logging_overrides(&mut config.logging)?;
        Ok(())
    }

    /// Apply target config overrides
    fn apply_target_overrides(
        &self,
        config: &mut crate::domains::target::TargetConfig,
    ) -> ConfigResult<()> {
        if let Ok(host) = self.get_env_var("HOST") {
            config.host = host;
        }

        if let Ok(timeout) = self.get_env_var("REQUEST_TIMEOUT") {
            config.request_timeout = parse_seconds(&timeout, "REQUEST_TIMEOUT")?;
        }

        Ok(())
    }

    /// Apply HTTP config overrides
    fn apply_http_overrides(
        &self,
        config: &mut crate::domains::http::HttpConfig,
    ) -> ConfigResult<()> {
        if let Ok(user_agent) = self.get_env_var("HTTP_USER_AGENT") {
            config.user_agent = user_agent;
        }

        if let Ok(verify_ssl) = self.get_env_var("HTTP_VERIFY_SSL") {
            config.verify_ssl = verify_ssl
                .parse()
                .map_err(|e| ConfigError::EnvError(format!("Invalid HTTP_VERIFY_SSL: {}", e)))?;
        }

        Ok(())
    }

    /// Apply scenario config overrides
    fn apply_scenario_overrides(
        &self,
        config: &mut crate::domains::scenario::ScenarioConfig,
    ) -> ConfigResult<()> {
        if let Ok(min) = self.get_env_var("WAIT_MIN") {
            config.wait_time_min = parse_seconds(&min, "WAIT_MIN")?;
        }

        if let Ok(max) = self.get_env_var("WAIT_MAX") {
            config.wait_time_max = parse_seconds(&max, "WAIT_MAX")?;
        }

        Ok(())
    }

    /// Apply logging config overrides
    fn apply_logging_overrides(
        &self,
        config: &mut crate::domains::logging::LoggingConfig,
    ) -> ConfigResult<()> {
        if let Ok(log_level) = self.get_env_var("LOG_LEVEL") {
            config.level = crate::domains::logging::LogLevel::from_str(&log_level)
                .map_err(|_| ConfigError::EnvError(format!("Invalid LOG_LEVEL: {}", log_level)))?;
        }

        if let Ok(format) = self.get_env_var("LOG_FORMAT") {
            config.format = crate::domains::logging::LogFormat::from_str(&format)
                .map_err(|_| ConfigError::EnvError(format!("Invalid LOG_FORMAT: {}", format)))?;
        }

        // Prefixed variable wins over the bare one
        if let Ok(debug_mode) = std::env::var(DEBUG_MODE_VAR) {
            config.debug_mode = parse_debug_flag(&debug_mode);
        }
        if let Ok(debug_mode) = self.get_env_var("DEBUG_MODE") {
            config.debug_mode = parse_debug_flag(&debug_mode);
        }

        Ok(())
    }

    /// Get environment variable with prefix
    fn get_env_var(&self, name: &str) -> Result<String, std::env::VarError> {
        std::env::var(format!("{}_{}", self.prefix, name))
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Debug mode is on only for a case-insensitive `true`; any other value turns it off.
pub fn parse_debug_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

fn parse_seconds(value: &str, name: &str) -> ConfigResult<Duration> {
    let seconds: u64 = value
        .parse()
        .map_err(|e| ConfigError::EnvError(format!("Invalid {}: {}", name, e)))?;
    Ok(Duration::from_secs(seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_debug_flag() {
        assert!(parse_debug_flag("true"));
        assert!(parse_debug_flag("True"));
        assert!(parse_debug_flag("TRUE"));
        assert!(!parse_debug_flag("true "));
        assert!(!parse_debug_flag("1"));
        assert!(!parse_debug_flag("yes"));
        assert!(!parse_debug_flag("False"));
        assert!(!parse_debug_flag(""));
    }

    #[test]
    fn test_parse_seconds() {
        assert_eq!(parse_seconds("45", "X").unwrap(), Duration::from_secs(45));
        assert!(parse_seconds("soon", "X").is_err());
    }
}
