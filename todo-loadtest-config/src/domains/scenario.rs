//! Scenario configuration: pacing and the data each session writes

use crate::error::ConfigResult;
use crate::validation::{validate_ordered, validate_required_string, Validatable};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Scenario pacing and payload templates
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Shortest pause between two iterations of one user
    #[serde(
        with = "crate::domains::utils::serde_duration",
        default = "default_wait_time_min"
    )]
    pub wait_time_min: Duration,

    /// Longest pause between two iterations of one user
    #[serde(
        with = "crate::domains::utils::serde_duration",
        default = "default_wait_time_max"
    )]
    pub wait_time_max: Duration,

    /// List name; a per-session suffix is appended
    #[serde(default = "default_list_name")]
    pub list_name: String,

    #[serde(default = "default_list_description")]
    pub list_description: String,

    /// Item name; a per-session suffix is appended
    #[serde(default = "default_item_name")]
    pub item_name: String,

    #[serde(default = "default_item_description")]
    pub item_description: String,

    /// Item state sent when an item is created
    #[serde(default = "default_state_on_create")]
    pub state_on_create: String,

    /// Item state sent on update and used by the state query
    #[serde(default = "default_state_on_update")]
    pub state_on_update: String,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            wait_time_min: default_wait_time_min(),
            wait_time_max: default_wait_time_max(),
            list_name: default_list_name(),
            list_description: default_list_description(),
            item_name: default_item_name(),
            item_description: default_item_description(),
            state_on_create: default_state_on_create(),
            state_on_update: default_state_on_update(),
        }
    }
}

impl Validatable for ScenarioConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_ordered(
            self.wait_time_min,
            self.wait_time_max,
            "wait_time_min",
            "wait_time_max",
            self.domain_name(),
        )?;

        validate_required_string(&self.list_name, "list_name", self.domain_name())?;
        validate_required_string(
            &self.list_description,
            "list_description",
            self.domain_name(),
        )?;
        validate_required_string(&self.item_name, "item_name", self.domain_name())?;
        validate_required_string(
            &self.item_description,
            "item_description",
            self.domain_name(),
        )?;

        for (field, state) in [
            ("state_on_create", &self.state_on_create),
            ("state_on_update", &self.state_on_update),
        ] {
            validate_required_string(state, field, self.domain_name())?;
            // The update state becomes a path segment of the state query
            if state.contains('/') {
                return Err(self.validation_error(format!("{} cannot contain '/'", field)));
            }
        }

        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "scenario"
    }
}

fn default_wait_time_min() -> Duration {
    Duration::from_secs(1)
}

fn default_wait_time_max() -> Duration {
    Duration::from_secs(3)
}

fn default_list_name() -> String {
    "My Awesome List".to_string()
}

fn default_list_description() -> String {
    "A description for my awesome list".to_string()
}

fn default_item_name() -> String {
    "Important Task".to_string()
}

fn default_item_description() -> String {
    "Details about this important task".to_string()
}

fn default_state_on_create() -> String {
    "todo".to_string()
}

fn default_state_on_update() -> String {
    "inprogress".to_string()
}
