//! The todo API CRUD scenario
//!
//! A [`TodoSession`] is one simulated user. Each call to
//! [`TodoSession::run_iteration`] walks the step catalog in [`step`] against a
//! [`Transport`](todo_loadtest_http::Transport), threading the list and item
//! identifiers held in [`SessionState`] from step to step. Steps whose
//! identifiers are missing are skipped; failed steps never stop the run.

pub mod diagnostics;
pub mod error;
pub mod fixtures;
pub mod ids;
pub mod payloads;
pub mod report;
pub mod session;
pub mod state;
pub mod step;

pub use error::ScenarioError;
pub use fixtures::SessionFixtures;
pub use ids::{extract_id, ResourceId};
pub use report::{IterationReport, StepStatus};
pub use session::TodoSession;
pub use state::SessionState;
pub use step::{Requirement, Step};
