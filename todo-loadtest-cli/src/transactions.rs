//! Goose scenario for one simulated todo API user

use crate::goose_transport::GooseTransport;
use crate::settings;
use goose::prelude::*;
use todo_loadtest_config::{LoadTestConfig, ScenarioConfig};
use todo_loadtest_http::{client_builder, HttpConfig};
use todo_loadtest_scenario::TodoSession;
use tracing::{info, warn};

pub const SCENARIO_NAME: &str = "TodoApiUser";

/// Scenario with an on-start, a repeating and an on-stop transaction
pub fn todo_api_user(config: &ScenarioConfig) -> Result<Scenario, GooseError> {
    Ok(scenario!(SCENARIO_NAME)
        .set_wait_time(config.wait_time_min, config.wait_time_max)?
        .register_transaction(
            transaction!(start_session)
                .set_name("start session")
                .set_on_start(),
        )
        .register_transaction(transaction!(run_scenario).set_name("todo scenario"))
        .register_transaction(
            transaction!(stop_session)
                .set_name("cleanup")
                .set_on_stop(),
        ))
}

/// Build the user's HTTP client from the `http` settings, generate its
/// fixtures and store a fresh session on it
pub async fn start_session(user: &mut GooseUser) -> TransactionResult {
    let config = settings::current();
    user.set_client_builder(client_builder(&HttpConfig::from(config)))
        .await?;

    let session = TodoSession::from_config(config);
    info!(
        user = user.weighted_users_index,
        list = %session.fixtures().list_name,
        "Starting user session"
    );
    user.set_session_data(session);
    Ok(())
}

/// One pass through the scenario
pub async fn run_scenario(user: &mut GooseUser) -> TransactionResult {
    let config = settings::current();
    let mut session = session_of(user, config);

    let mut transport = GooseTransport::new(user, config.target.request_timeout);
    session.run_iteration(&mut transport).await;
    let outcome = transport.finish();

    user.set_session_data(session);
    outcome
}

/// Delete whatever the user still owns
pub async fn stop_session(user: &mut GooseUser) -> TransactionResult {
    let config = settings::current();
    let mut session = session_of(user, config);

    let mut transport = GooseTransport::new(user, config.target.request_timeout);
    session.cleanup(&mut transport).await;
    let outcome = transport.finish();

    user.set_session_data(session);
    outcome
}

fn session_of(user: &GooseUser, config: &LoadTestConfig) -> TodoSession {
    match user.get_session_data::<TodoSession>() {
        Some(session) => session.clone(),
        None => {
            warn!("User has no session, starting a new one");
            TodoSession::from_config(config)
        }
    }
}
