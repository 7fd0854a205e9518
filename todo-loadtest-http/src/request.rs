//! One API call as the scenario describes it

use crate::types::HttpMethod;
use serde_json::Value as JsonValue;

pub const ACCEPT: &str = "Accept";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

/// A request to the todo API, together with the status codes that count as success
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    /// Path relative to the base URL, starting with `/`
    pub path: String,
    /// Name the measurement is reported under
    pub name: String,
    pub body: Option<JsonValue>,
    pub accepted: &'static [u16],
}

impl ApiRequest {
    pub fn new(
        method: HttpMethod,
        path: impl Into<String>,
        name: impl Into<String>,
        accepted: &'static [u16],
    ) -> Self {
        Self {
            method,
            path: path.into(),
            name: name.into(),
            body: None,
            accepted,
        }
    }

    pub fn with_body(mut self, body: JsonValue) -> Self {
        self.body = Some(body);
        self
    }

    /// Whether `status` is one of the accepted codes
    pub fn accepts(&self, status: u16) -> bool {
        self.accepted.contains(&status)
    }

    /// Headers sent with the request. Reads only ask for JSON; writes also declare it.
    pub fn headers(&self) -> Vec<(&'static str, &'static str)> {
        let mut headers = Vec::with_capacity(2);
        if self.body.is_some() {
            headers.push((CONTENT_TYPE, APPLICATION_JSON));
        }
        headers.push((ACCEPT, APPLICATION_JSON));
        headers
    }

    /// The JSON body as sent on the wire
    pub fn body_text(&self) -> Option<String> {
        self.body.as_ref().map(|body| body.to_string())
    }
}
