//! Request transport for the todo API load test
//!
//! The scenario runner talks to the API only through [`Transport`]. Load runs
//! plug in a transport backed by the load generator; smoke runs and tests use
//! [`ReqwestTransport`].

pub mod client;
pub mod config;
pub mod errors;
pub mod exchange;
pub mod request;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{client_builder, LogEntry, RequestLog, RequestSummary, ReqwestTransport};
pub use config::HttpConfig;
pub use errors::HttpError;
pub use exchange::Exchange;
pub use request::ApiRequest;
pub use transport::Transport;
pub use types::HttpMethod;
