//! One simulated user walking the todo API

use crate::diagnostics::log_failure;
use crate::error::ScenarioError;
use crate::fixtures::SessionFixtures;
use crate::ids::extract_id;
use crate::report::{IterationReport, StepStatus};
use crate::state::SessionState;
use crate::step::{Requirement, Step};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value as JsonValue;
use todo_loadtest_config::LoadTestConfig;
use todo_loadtest_http::{ApiRequest, Exchange, Transport};
use tracing::{error, info, warn};

const LIST_STEPS: [Step; 4] = [
    Step::GetList,
    Step::UpdateList,
    Step::ListItems,
    Step::CreateItem,
];

const ITEM_STEPS: [Step; 4] = [
    Step::GetItem,
    Step::UpdateItem,
    Step::ItemsByState,
    Step::DeleteItem,
];

/// A session's fixtures and the identifiers it currently owns
#[derive(Debug, Clone)]
pub struct TodoSession {
    state: SessionState,
    fixtures: SessionFixtures,
    debug_mode: bool,
}

impl TodoSession {
    pub fn new(fixtures: SessionFixtures, debug_mode: bool) -> Self {
        Self {
            state: SessionState::new(),
            fixtures,
            debug_mode,
        }
    }

    /// Start a session with freshly generated fixtures
    pub fn from_config(config: &LoadTestConfig) -> Self {
        Self::new(
            SessionFixtures::generate(&config.scenario),
            config.logging.debug_mode,
        )
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn fixtures(&self) -> &SessionFixtures {
        &self.fixtures
    }

    /// Run the scenario once. Failures are reported per step and never stop
    /// the iteration; steps whose identifiers are missing are skipped.
    pub async fn run_iteration<T>(&mut self, transport: &mut T) -> IterationReport
    where
        T: Transport + ?Sized,
    {
        info!(list = %self.fixtures.list_name, "Starting scenario iteration");
        let mut report = IterationReport::default();

        for step in [Step::ListAll, Step::CreateList] {
            let status = self.run_step(step, transport).await;
            report.record(step, status);
        }

        if self.state.list_id().is_some() {
            for step in LIST_STEPS {
                let status = self.run_step(step, transport).await;
                report.record(step, status);
            }

            if self.state.item_id().is_some() {
                for step in ITEM_STEPS {
                    let status = self.run_step(step, transport).await;
                    report.record(step, status);
                }
            } else {
                warn!("No item id after item creation. Skipping item operations.");
                report.skip_all(&ITEM_STEPS);
            }

            let status = self.run_step(Step::DeleteList, transport).await;
            report.record(Step::DeleteList, status);
        } else {
            warn!("No list id after list creation. Skipping dependent list operations.");
            report.skip_all(&LIST_STEPS);
            report.skip_all(&ITEM_STEPS);
            report.record(Step::DeleteList, StepStatus::Skipped);
        }

        info!(
            passed = report.count(StepStatus::Passed),
            failed = report.count(StepStatus::Failed),
            skipped = report.count(StepStatus::Skipped),
            "Finished scenario iteration"
        );
        report
    }

    /// Run a single step against the current state
    pub async fn run_step<T>(&mut self, step: Step, transport: &mut T) -> StepStatus
    where
        T: Transport + ?Sized,
    {
        let request = match self.request_for(step) {
            Some(request) => request,
            None => {
                warn!("Skipping {}: {}", step, self.missing(step));
                return StepStatus::Skipped;
            }
        };

        info!(step = step.name(), "Executing {} {}", request.method, request.path);
        let exchange = transport.execute(&request).await;

        if exchange.passed {
            self.record_success(step, &exchange);
            StepStatus::Passed
        } else {
            log_failure(&exchange, self.debug_mode);
            self.record_failure(step);
            StepStatus::Failed
        }
    }

    /// Best-effort removal of whatever the session still owns: the item
    /// first, then its list. The state is empty afterwards whatever the
    /// outcome.
    pub async fn cleanup<T>(&mut self, transport: &mut T) -> IterationReport
    where
        T: Transport + ?Sized,
    {
        let mut report = IterationReport::default();
        if self.state.is_empty() {
            return report;
        }

        info!("Cleaning up session resources");
        for step in [Step::CleanupItem, Step::CleanupList] {
            let request = match self.request_for(step) {
                Some(request) => request,
                None => continue,
            };

            let exchange = transport.execute(&request).await;
            let status = if exchange.passed {
                info!("{}: deleted {}", step, request.path);
                StepStatus::Passed
            } else {
                warn!(
                    "{}: failed to delete {}. Status: {}, Response: {}",
                    step,
                    request.path,
                    exchange.status_label(),
                    exchange.response_body
                );
                StepStatus::Failed
            };
            report.record(step, status);
        }

        self.state.clear_list();
        info!("Cleanup finished");
        report
    }

    fn request_for(&self, step: Step) -> Option<ApiRequest> {
        let path = step.path(&self.state, &self.fixtures.state_on_update)?;
        let request = ApiRequest::new(step.method(), path, step.name(), step.accepted());
        Some(match self.body_for(step) {
            Some(body) => request.with_body(body),
            None => request,
        })
    }

    fn body_for(&self, step: Step) -> Option<JsonValue> {
        match step {
            Step::CreateList => to_body(step, &self.fixtures.new_list()),
            Step::UpdateList => to_body(step, &self.fixtures.list_update()),
            Step::CreateItem => to_body(step, &self.fixtures.new_item(Utc::now())),
            Step::UpdateItem => to_body(step, &self.fixtures.item_update(Utc::now())),
            _ => None,
        }
    }

    fn missing(&self, step: Step) -> &'static str {
        match step.requirement() {
            Requirement::List | Requirement::ListAndItem if self.state.list_id().is_none() => {
                "list id is not set"
            }
            Requirement::ListAndItem => "item id is not set",
            _ => "requirements not met",
        }
    }

    fn record_success(&mut self, step: Step, exchange: &Exchange) {
        match step {
            Step::CreateList => match extract_id(&exchange.response_body) {
                Ok(id) => {
                    info!(list_id = %id, "Created list with ID: {}", id);
                    self.state.replace_list(Some(id));
                }
                Err(e) => {
                    report_data_error(step, &e, exchange);
                    self.state.replace_list(None);
                }
            },
            Step::CreateItem => {
                let created = extract_id(&exchange.response_body)
                    .and_then(|id| self.state.set_item(id.clone()).map(|()| id));
                match created {
                    Ok(id) => info!(item_id = %id, "Created item with ID: {}", id),
                    Err(e) => {
                        report_data_error(step, &e, exchange);
                        self.state.clear_item();
                    }
                }
            }
            Step::DeleteItem => {
                info!("Deleted item {}", exchange.url);
                self.state.clear_item();
            }
            Step::DeleteList => {
                info!("Deleted list {}", exchange.url);
                self.state.clear_list();
            }
            _ => {}
        }
    }

    fn record_failure(&mut self, step: Step) {
        match step {
            Step::CreateList => self.state.replace_list(None),
            Step::CreateItem => self.state.clear_item(),
            _ => {}
        }
    }
}

fn to_body<P: Serialize>(step: Step, payload: &P) -> Option<JsonValue> {
    match serde_json::to_value(payload) {
        Ok(body) => Some(body),
        Err(e) => {
            error!("Failed to serialize {} payload: {}", step, e);
            None
        }
    }
}

fn report_data_error(step: Step, error: &ScenarioError, exchange: &Exchange) {
    error!(
        step = step.name(),
        status = %exchange.status_label(),
        "{}: {}. Response: {}",
        step,
        error,
        exchange.response_body
    );
}
