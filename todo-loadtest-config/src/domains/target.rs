//! Load test target configuration

use crate::error::ConfigResult;
use crate::validation::{validate_http_url, validate_positive, Validatable};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Deployment the load test is aimed at
pub const DEFAULT_HOST: &str = "https://app-api-ocwiawb26beca.azurewebsites.net";

/// Where requests go and how long each one may take
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Base URL of the todo API
    #[serde(default = "default_host")]
    pub host: String,

    /// Per-request timeout
    #[serde(
        with = "crate::domains::utils::serde_duration",
        default = "default_request_timeout"
    )]
    pub request_timeout: Duration,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            request_timeout: default_request_timeout(),
        }
    }
}

impl Validatable for TargetConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_http_url(&self.host, "host", self.domain_name())?;
        validate_positive(
            self.request_timeout.as_secs(),
            "request_timeout",
            self.domain_name(),
        )?;
        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "target"
    }
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(90)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_config_defaults() {
        let config = TargetConfig::default();
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.request_timeout, Duration::from_secs(90));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_target_config_validation() {
        let mut config = TargetConfig::default();
        config.host = "localhost:8080".to_string();
        assert!(config.validate().is_err());

        config = TargetConfig::default();
        config.request_timeout = Duration::from_secs(0);
        assert!(config.validate().is_err());
    }
}
