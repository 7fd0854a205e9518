//! Binaries driving the todo API scenario
//!
//! `todo-loadtest` hands the scenario to goose, one [`TodoSession`] per
//! simulated user. `todo-smoke` runs a single session over plain reqwest and
//! prints a per-request summary.
//!
//! [`TodoSession`]: todo_loadtest_scenario::TodoSession

pub mod cli;
pub mod goose_transport;
pub mod settings;
pub mod smoke;
pub mod transactions;

pub use goose_transport::GooseTransport;
pub use smoke::{run_smoke, SmokeReport};
pub use transactions::todo_api_user;
