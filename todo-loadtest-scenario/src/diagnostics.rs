//! Failure logging for unexpected responses

use todo_loadtest_http::Exchange;
use tracing::{debug, error};

const NO_BODY: &str = "No Body";

/// Log a failed exchange. With `debug_mode` on, the full request is written
/// at error level so a failing call can be replayed by hand.
pub fn log_failure(exchange: &Exchange, debug_mode: bool) {
    let message = exchange.failure_message();
    if !debug_mode {
        debug!("{}", message);
        return;
    }

    error!(
        step = %exchange.name,
        status = %exchange.status_label(),
        "{}",
        message
    );
    error!("Request URL: {}", exchange.url);
    error!("Request Headers: {}", format_headers(&exchange.request_headers));
    error!("Request Body: {}", request_body(exchange));
}

pub fn format_headers(headers: &[(String, String)]) -> String {
    let pairs: Vec<String> = headers
        .iter()
        .map(|(name, value)| format!("{}: {}", name, value))
        .collect();
    format!("{{{}}}", pairs.join(", "))
}

pub fn request_body(exchange: &Exchange) -> &str {
    exchange.request_body.as_deref().unwrap_or(NO_BODY)
}
