//! A request/response pair as the scenario runner sees it

use crate::request::ApiRequest;
use crate::types::HttpMethod;
use std::time::Duration;

/// Outcome of one request. Transport failures are encoded here rather than
/// returned as errors, so a failed call never stops the scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct Exchange {
    pub name: String,
    pub method: HttpMethod,
    /// Absolute URL the request went to (or would have gone to)
    pub url: String,
    pub request_headers: Vec<(String, String)>,
    pub request_body: Option<String>,
    /// `None` when no response arrived
    pub status: Option<u16>,
    pub response_body: String,
    /// Connect, timeout or body read error
    pub error: Option<String>,
    /// Status was one of the request's accepted codes
    pub passed: bool,
    pub elapsed: Duration,
}

impl Exchange {
    /// Build an exchange for a response that arrived
    pub fn received(
        request: &ApiRequest,
        url: impl Into<String>,
        status: u16,
        response_body: impl Into<String>,
        elapsed: Duration,
    ) -> Self {
        Self {
            status: Some(status),
            response_body: response_body.into(),
            error: None,
            passed: request.accepts(status),
            ..Self::unanswered(request, url, String::new(), elapsed)
        }
    }

    /// Build an exchange for a request that got no response
    pub fn failed(
        request: &ApiRequest,
        url: impl Into<String>,
        error: impl Into<String>,
        elapsed: Duration,
    ) -> Self {
        Self::unanswered(request, url, error.into(), elapsed)
    }

    fn unanswered(request: &ApiRequest, url: impl Into<String>, error: String, elapsed: Duration) -> Self {
        Self {
            name: request.name.clone(),
            method: request.method,
            url: url.into(),
            request_headers: request
                .headers()
                .into_iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            request_body: request.body_text(),
            status: None,
            response_body: String::new(),
            error: Some(error),
            passed: false,
            elapsed,
        }
    }

    /// Status code for log lines
    pub fn status_label(&self) -> String {
        match self.status {
            Some(status) => status.to_string(),
            None => "<transport error>".to_string(),
        }
    }

    /// Message a failed measurement is tagged with
    pub fn failure_message(&self) -> String {
        let response = match (&self.status, &self.error) {
            (None, Some(error)) => error.as_str(),
            _ => self.response_body.as_str(),
        };
        format!(
            "{} failed with status {}. Response: {}",
            self.name,
            self.status_label(),
            response
        )
    }
}
