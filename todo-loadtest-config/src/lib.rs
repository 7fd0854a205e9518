//! Domain-driven configuration for the todo API load test
//!
//! Configuration is split by functional domain (target, http, scenario,
//! logging), loaded from defaults, an optional YAML file and environment
//! variables, and validated per domain.

pub mod error;
pub mod loader;
pub mod validation;

// Domain-specific configuration modules
pub mod domains;

// Re-export main types
pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;
pub use validation::Validatable;

// Re-export domain configurations
pub use domains::{
    http::HttpConfig, logging::LoggingConfig, scenario::ScenarioConfig, target::TargetConfig,
    LoadTestConfig,
};

// Re-export utilities
pub use domains::utils::serde_duration;
