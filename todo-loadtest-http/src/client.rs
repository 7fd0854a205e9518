//! reqwest-backed transport

use crate::config::HttpConfig;
use crate::errors::HttpError;
use crate::exchange::Exchange;
use crate::request::ApiRequest;
use crate::transport::Transport;
use crate::types::HttpMethod;
use reqwest::{Client, ClientBuilder};
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use url::Url;

/// Client settings shared by every transport: timeouts, pool, user agent,
/// TLS verification and redirect limit
pub fn client_builder(config: &HttpConfig) -> ClientBuilder {
    Client::builder()
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .pool_max_idle_per_host(config.max_idle_per_host)
        .pool_idle_timeout(config.idle_timeout)
        .user_agent(&config.user_agent)
        .danger_accept_invalid_certs(!config.verify_ssl)
        .redirect(reqwest::redirect::Policy::limited(
            config.max_redirects as usize,
        ))
}

/// Transport that sends requests straight through a pooled reqwest client and
/// keeps its own record of every exchange
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    base_url: Url,
    log: RequestLog,
}

impl ReqwestTransport {
    /// Create a transport with specific configuration
    pub fn with_config(config: &HttpConfig) -> Result<Self, HttpError> {
        debug!(
            "Creating ReqwestTransport for {} with timeout: {}s",
            config.base_url,
            config.timeout.as_secs()
        );

        let base_url = Url::parse(&config.base_url)
            .map_err(|e| HttpError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;

        let client = client_builder(config).build()?;

        Ok(Self {
            client,
            base_url,
            log: RequestLog::default(),
        })
    }

    /// Everything sent so far
    pub fn log(&self) -> &RequestLog {
        &self.log
    }

    /// Absolute URL for an API path. A path prefix on the base URL is kept.
    pub fn url_for(&self, path: &str) -> Result<Url, HttpError> {
        let joined = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&joined).map_err(|e| HttpError::InvalidUrl(format!("{}: {}", joined, e)))
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&mut self, request: &ApiRequest) -> Exchange {
        let started = Instant::now();

        let url = match self.url_for(&request.path) {
            Ok(url) => url,
            Err(e) => {
                let exchange = Exchange::failed(request, request.path.as_str(), e.to_string(), started.elapsed());
                self.log.record(&exchange);
                return exchange;
            }
        };

        debug!("Building {} request to {}", request.method, url);
        let mut builder = self
            .client
            .request(reqwest::Method::from(request.method), url.clone());
        for (name, value) in request.headers() {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let exchange = match builder.send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                match response.text().await {
                    Ok(text) => Exchange::received(request, url.as_str(), status, text, started.elapsed()),
                    Err(e) => {
                        warn!("Failed to read {} response body: {}", request.name, e);
                        let mut exchange =
                            Exchange::received(request, url.as_str(), status, String::new(), started.elapsed());
                        exchange.error = Some(e.to_string());
                        exchange
                    }
                }
            }
            Err(e) => Exchange::failed(request, url.as_str(), e.to_string(), started.elapsed()),
        };

        debug!(
            "{} {} -> {} in {}ms",
            request.method,
            exchange.url,
            exchange.status_label(),
            exchange.elapsed.as_millis()
        );

        self.log.record(&exchange);
        exchange
    }
}

/// One recorded request
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub name: String,
    pub method: HttpMethod,
    pub status: Option<u16>,
    pub passed: bool,
    pub elapsed: Duration,
}

/// Per-name totals over a [`RequestLog`]
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSummary {
    pub name: String,
    pub method: HttpMethod,
    pub total: usize,
    pub failed: usize,
    pub max_elapsed: Duration,
}

/// Ordered record of the exchanges a transport performed
#[derive(Debug, Clone, Default)]
pub struct RequestLog {
    entries: Vec<LogEntry>,
}

impl RequestLog {
    pub fn record(&mut self, exchange: &Exchange) {
        self.entries.push(LogEntry {
            name: exchange.name.clone(),
            method: exchange.method,
            status: exchange.status,
            passed: exchange.passed,
            elapsed: exchange.elapsed,
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Request names in the order they were sent
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.name.as_str()).collect()
    }

    pub fn failures(&self) -> usize {
        self.entries.iter().filter(|entry| !entry.passed).count()
    }

    /// Totals per request name, in order of first appearance
    pub fn summarize(&self) -> Vec<RequestSummary> {
        let mut summaries: Vec<RequestSummary> = Vec::new();
        for entry in &self.entries {
            let index = match summaries.iter().position(|s| s.name == entry.name) {
                Some(index) => index,
                None => {
                    summaries.push(RequestSummary {
                        name: entry.name.clone(),
                        method: entry.method,
                        total: 0,
                        failed: 0,
                        max_elapsed: Duration::ZERO,
                    });
                    summaries.len() - 1
                }
            };
            let summary = &mut summaries[index];
            summary.total += 1;
            if !entry.passed {
                summary.failed += 1;
            }
            summary.max_elapsed = summary.max_elapsed.max(entry.elapsed);
        }
        summaries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(base: &str) -> ReqwestTransport {
        ReqwestTransport::with_config(&HttpConfig::for_base_url(base)).unwrap()
    }

    #[test]
    fn test_url_for_plain_host() {
        let transport = transport("http://localhost:3100");
        assert_eq!(
            transport.url_for("/lists/L1").unwrap().as_str(),
            "http://localhost:3100/lists/L1"
        );
    }

    #[test]
    fn test_url_for_keeps_base_path() {
        let transport = transport("http://localhost:3100/api/");
        assert_eq!(
            transport.url_for("/lists").unwrap().as_str(),
            "http://localhost:3100/api/lists"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let result = ReqwestTransport::with_config(&HttpConfig::for_base_url("not a url"));
        assert!(matches!(result, Err(HttpError::InvalidUrl(_))));
    }

    #[test]
    fn test_summarize_groups_by_name() {
        let mut log = RequestLog::default();
        let get = ApiRequest::new(HttpMethod::Get, "/lists", "Get All Lists", &[200]);
        let delete = ApiRequest::new(HttpMethod::Delete, "/lists/1", "Delete List", &[200, 204]);

        log.record(&Exchange::received(&get, "u", 200, "", Duration::from_millis(5)));
        log.record(&Exchange::received(&delete, "u", 404, "", Duration::from_millis(7)));
        log.record(&Exchange::received(&get, "u", 503, "", Duration::from_millis(9)));

        assert_eq!(log.names(), vec!["Get All Lists", "Delete List", "Get All Lists"]);
        assert_eq!(log.failures(), 2);

        let summary = log.summarize();
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].name, "Get All Lists");
        assert_eq!(summary[0].total, 2);
        assert_eq!(summary[0].failed, 1);
        assert_eq!(summary[0].max_elapsed, Duration::from_millis(9));
        assert_eq!(summary[1].method, HttpMethod::Delete);
        assert_eq!(summary[1].failed, 1);
    }
}
