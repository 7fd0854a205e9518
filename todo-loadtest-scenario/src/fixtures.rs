//! Per-session names, descriptions and item states

use crate::payloads::{format_timestamp, ItemUpdatePayload, ListPayload, NewItemPayload};
use chrono::{DateTime, Utc};
use todo_loadtest_config::ScenarioConfig;
use uuid::Uuid;

const UPDATED_SUFFIX: &str = " - Updated";

/// The data one session writes. Names carry a short suffix unique to the
/// session so concurrent users never collide.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionFixtures {
    pub list_name: String,
    pub list_description: String,
    pub item_name: String,
    pub item_description: String,
    pub state_on_create: String,
    pub state_on_update: String,
}

impl SessionFixtures {
    /// Fixtures with a fresh random suffix
    pub fn generate(config: &ScenarioConfig) -> Self {
        Self::with_suffix(config, &session_suffix())
    }

    pub fn with_suffix(config: &ScenarioConfig, suffix: &str) -> Self {
        Self {
            list_name: format!("{} {}", config.list_name, suffix),
            list_description: config.list_description.clone(),
            item_name: format!("{} {}", config.item_name, suffix),
            item_description: config.item_description.clone(),
            state_on_create: config.state_on_create.clone(),
            state_on_update: config.state_on_update.clone(),
        }
    }

    pub fn new_list(&self) -> ListPayload {
        ListPayload {
            name: self.list_name.clone(),
            description: self.list_description.clone(),
        }
    }

    pub fn list_update(&self) -> ListPayload {
        ListPayload {
            name: updated(&self.list_name),
            description: updated(&self.list_description),
        }
    }

    pub fn new_item(&self, due: DateTime<Utc>) -> NewItemPayload {
        NewItemPayload {
            name: self.item_name.clone(),
            state: self.state_on_create.clone(),
            due_date: format_timestamp(due),
            description: self.item_description.clone(),
        }
    }

    pub fn item_update(&self, due: DateTime<Utc>) -> ItemUpdatePayload {
        ItemUpdatePayload {
            name: updated(&self.item_name),
            state: self.state_on_update.clone(),
            due_date: format_timestamp(due),
            completed_date: None,
            description: updated(&self.item_description),
        }
    }
}

/// First eight characters of a v4 UUID
pub fn session_suffix() -> String {
    Uuid::new_v4().simple().to_string().chars().take(8).collect()
}

fn updated(value: &str) -> String {
    format!("{}{}", value, UPDATED_SUFFIX)
}
