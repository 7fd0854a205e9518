//! Logging setup for the todo API load test
//!
//! Everything logs through `tracing`; this crate only turns a
//! [`LoggingConfig`] into an installed subscriber.

pub mod init;

pub use init::{init_logging_from_config, LoggingGuard};
pub use todo_loadtest_config::LoggingConfig;
