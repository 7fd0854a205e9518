//! HTTP transport configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;
use todo_loadtest_config::LoadTestConfig;

/// Settings the reqwest transport is built from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Base URL every request path is appended to
    pub base_url: String,

    /// Request timeout
    pub timeout: Duration,

    /// Maximum number of redirects to follow
    pub max_redirects: u32,

    /// User agent string
    pub user_agent: String,

    /// Whether to verify SSL certificates
    pub verify_ssl: bool,

    /// Maximum idle connections kept per host
    pub max_idle_per_host: usize,

    /// How long an idle pooled connection is kept
    pub idle_timeout: Duration,

    /// TCP connect timeout
    pub connect_timeout: Duration,
}

impl HttpConfig {
    /// Default settings aimed at `base_url`
    pub fn for_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self::from(&LoadTestConfig::default())
    }
}

impl From<&LoadTestConfig> for HttpConfig {
    fn from(config: &LoadTestConfig) -> Self {
        Self {
            base_url: config.target.host.clone(),
            timeout: config.target.request_timeout,
            max_redirects: config.http.max_redirects,
            user_agent: config.http.user_agent.clone(),
            verify_ssl: config.http.verify_ssl,
            max_idle_per_host: config.http.connection_pool.max_idle_per_host,
            idle_timeout: config.http.connection_pool.idle_timeout,
            connect_timeout: config.http.connection_pool.connection_timeout,
        }
    }
}
