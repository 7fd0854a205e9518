//! Scenario error types

use thiserror::Error;

/// Data errors on otherwise successful responses, and session state misuse
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Failed to parse JSON response: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("'id' not found in response JSON")]
    MissingId,

    #[error("cannot record an item without a list")]
    ItemWithoutList,
}
