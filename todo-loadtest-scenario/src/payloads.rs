//! Request bodies sent to the todo API

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Body of create-list and update-list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListPayload {
    pub name: String,
    pub description: String,
}

/// Body of create-item
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItemPayload {
    pub name: String,
    pub state: String,
    pub due_date: String,
    pub description: String,
}

/// Body of update-item. `completedDate` is always sent, as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemUpdatePayload {
    pub name: String,
    pub state: String,
    pub due_date: String,
    pub completed_date: Option<String>,
    pub description: String,
}

/// Timestamps as the API expects them
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_item_update_sends_null_completed_date() {
        let payload = ItemUpdatePayload {
            name: "Task - Updated".to_string(),
            state: "inprogress".to_string(),
            due_date: "2024-05-01T12:00:00.000000+00:00".to_string(),
            completed_date: None,
            description: "Details - Updated".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "name": "Task - Updated",
                "state": "inprogress",
                "dueDate": "2024-05-01T12:00:00.000000+00:00",
                "completedDate": null,
                "description": "Details - Updated",
            })
        );
    }

    #[test]
    fn test_timestamp_format() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        assert_eq!(format_timestamp(at), "2024-05-01T12:30:00.000000+00:00");
    }
}
