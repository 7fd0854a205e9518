use crate::error::ScenarioError;
use serde_json::Value as JsonValue;
use std::fmt;

/// Opaque identifier handed out by the API for a list or an item
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceId(String);

impl ResourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pull the `id` field out of a creation response body.
///
/// Non-empty strings and numbers are identifiers; anything else, including
/// `null` and `""`, counts as missing.
pub fn extract_id(body: &str) -> Result<ResourceId, ScenarioError> {
    let value: JsonValue = serde_json::from_str(body)?;
    match value.get("id") {
        Some(JsonValue::String(id)) if !id.is_empty() => Ok(ResourceId(id.clone())),
        Some(JsonValue::Number(id)) => Ok(ResourceId(id.to_string())),
        _ => Err(ScenarioError::MissingId),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_id() {
        let id = extract_id(r#"{"id":"L1","name":"groceries"}"#).unwrap();
        assert_eq!(id.as_str(), "L1");
    }

    #[test]
    fn test_numeric_id() {
        assert_eq!(extract_id(r#"{"id":42}"#).unwrap().to_string(), "42");
    }

    #[test]
    fn test_missing_or_empty_id() {
        for body in [r#"{"name":"x"}"#, r#"{"id":""}"#, r#"{"id":null}"#, r#"{"id":true}"#, "[]"] {
            assert!(
                matches!(extract_id(body), Err(ScenarioError::MissingId)),
                "body {} should have no id",
                body
            );
        }
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(extract_id("<html>"), Err(ScenarioError::InvalidJson(_))));
        assert!(matches!(extract_id(""), Err(ScenarioError::InvalidJson(_))));
    }
}
