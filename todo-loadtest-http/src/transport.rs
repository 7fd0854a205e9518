//! The seam between the scenario runner and whatever sends requests

use crate::exchange::Exchange;
use crate::request::ApiRequest;

/// Sends one request and records its measurement.
///
/// Implementations classify the response against [`ApiRequest::accepted`],
/// report the verdict to their measurement backend and hand the exchange back.
/// They never fail: connect errors and timeouts come back as an exchange with
/// no status.
#[async_trait::async_trait]
pub trait Transport: Send {
    async fn execute(&mut self, request: &ApiRequest) -> Exchange;
}
