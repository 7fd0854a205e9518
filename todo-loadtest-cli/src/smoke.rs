//! Single-user scenario runs over plain reqwest

use anyhow::{Context, Result};
use colored::Colorize;
use std::time::Duration;
use todo_loadtest_config::{LoadTestConfig, ScenarioConfig};
use todo_loadtest_http::{HttpConfig, ReqwestTransport, RequestSummary};
use todo_loadtest_scenario::{StepStatus, TodoSession};
use tracing::info;

/// Totals of a smoke run
#[derive(Debug, Clone)]
pub struct SmokeReport {
    pub iterations: u32,
    pub requests: usize,
    pub failures: usize,
    pub skipped: usize,
    pub summary: Vec<RequestSummary>,
}

impl SmokeReport {
    pub fn is_success(&self) -> bool {
        self.failures == 0
    }

    /// Per-request table, one line per request name
    pub fn render(&self) -> String {
        let mut out = format!(
            "{:<28} {:>6} {:>6} {:>6} {:>9}\n",
            "Name", "Method", "Total", "Failed", "Max (ms)"
        );
        for row in &self.summary {
            let failed = if row.failed == 0 {
                row.failed.to_string().green()
            } else {
                row.failed.to_string().red()
            };
            out.push_str(&format!(
                "{:<28} {:>6} {:>6} {:>6} {:>9}\n",
                row.name,
                row.method.as_str(),
                row.total,
                failed,
                row.max_elapsed.as_millis()
            ));
        }
        out.push_str(&format!(
            "{} iterations, {} requests, {} failed, {} steps skipped",
            self.iterations, self.requests, self.failures, self.skipped
        ));
        out
    }
}

/// Run `iterations` passes of one session against the configured host, then
/// clean up
pub async fn run_smoke(config: &LoadTestConfig, iterations: u32, pace: bool) -> Result<SmokeReport> {
    let mut transport = ReqwestTransport::with_config(&HttpConfig::from(config))
        .context("Failed to create HTTP client")?;
    let mut session = TodoSession::from_config(config);
    let mut skipped = 0;

    for iteration in 1..=iterations {
        info!(iteration, "Running scenario iteration");
        let report = session.run_iteration(&mut transport).await;
        skipped += report.count(StepStatus::Skipped);

        if pace && iteration < iterations {
            tokio::time::sleep(wait_time(&config.scenario)).await;
        }
    }
    session.cleanup(&mut transport).await;

    let log = transport.log();
    Ok(SmokeReport {
        iterations,
        requests: log.entries().len(),
        failures: log.failures(),
        skipped,
        summary: log.summarize(),
    })
}

/// Random pause within the configured wait time bounds
pub fn wait_time(config: &ScenarioConfig) -> Duration {
    let min = config.wait_time_min.as_millis() as u64;
    let max = (config.wait_time_max.as_millis() as u64).max(min);
    Duration::from_millis(fastrand::u64(min..=max))
}
