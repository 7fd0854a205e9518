//! Scenario sessions against the in-process fake todo API

use anyhow::Result;
use axum::http::StatusCode;
use fake_todo_api::FakeTodoApi;
use todo_loadtest_config::ScenarioConfig;
use todo_loadtest_http::{HttpConfig, ReqwestTransport};
use todo_loadtest_scenario::{SessionFixtures, Step, StepStatus, TodoSession};
use tokio::task::JoinSet;

async fn start() -> Result<(FakeTodoApi, ReqwestTransport)> {
    let api = FakeTodoApi::new();
    let base_url = api.spawn().await?;
    let transport = ReqwestTransport::with_config(&HttpConfig::for_base_url(base_url))?;
    Ok((api, transport))
}

fn session(suffix: &str) -> TodoSession {
    TodoSession::new(
        SessionFixtures::with_suffix(&ScenarioConfig::default(), suffix),
        false,
    )
}

#[tokio::test]
async fn test_iteration_leaves_nothing_behind() -> Result<()> {
    let (api, mut transport) = start().await?;
    let mut session = session("e2e00001");

    let report = session.run_iteration(&mut transport).await;

    assert!(!report.has_failures(), "{:?}", report.outcomes());
    assert_eq!(report.executed(), 11);
    assert_eq!(
        api.request_lines(),
        vec![
            "GET /lists",
            "POST /lists",
            "GET /lists/L1",
            "PUT /lists/L1",
            "GET /lists/L1/items",
            "POST /lists/L1/items",
            "GET /lists/L1/items/I2",
            "PUT /lists/L1/items/I2",
            "GET /lists/L1/state/inprogress",
            "DELETE /lists/L1/items/I2",
            "DELETE /lists/L1",
        ]
    );
    assert!(api.lists().is_empty());
    assert!(api.items().is_empty());
    assert!(session.state().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_headers_follow_request_kind() -> Result<()> {
    let (api, mut transport) = start().await?;
    session("e2e00002").run_iteration(&mut transport).await;

    for request in api.requests() {
        assert_eq!(request.accept.as_deref(), Some("application/json"), "{}", request.line());
        let has_body = request.method == "POST" || request.method == "PUT";
        assert_eq!(
            request.content_type.as_deref(),
            has_body.then_some("application/json"),
            "{}",
            request.line()
        );
    }
    Ok(())
}

#[tokio::test]
async fn test_failed_list_creation_stops_iteration() -> Result<()> {
    let (api, mut transport) = start().await?;
    api.fail_next("POST", "/lists", StatusCode::INTERNAL_SERVER_ERROR, 1);

    let report = session("e2e00003").run_iteration(&mut transport).await;

    assert_eq!(report.status_of(Step::CreateList), Some(StepStatus::Failed));
    assert_eq!(api.request_lines(), vec!["GET /lists", "POST /lists"]);
    assert_eq!(transport.log().failures(), 1);
    Ok(())
}

#[tokio::test]
async fn test_cleanup_removes_what_iteration_could_not() -> Result<()> {
    let (api, mut transport) = start().await?;
    api.fail_next("DELETE", "/lists/L1/items/I2", StatusCode::SERVICE_UNAVAILABLE, 1);
    api.fail_next("DELETE", "/lists/L1", StatusCode::SERVICE_UNAVAILABLE, 1);
    let mut session = session("e2e00004");

    let report = session.run_iteration(&mut transport).await;
    assert_eq!(report.count(StepStatus::Failed), 2);
    assert_eq!(api.lists().len(), 1);
    assert_eq!(api.items().len(), 1);

    let cleanup = session.cleanup(&mut transport).await;
    assert!(!cleanup.has_failures());
    assert!(api.lists().is_empty());
    assert!(api.items().is_empty());
    assert!(session.state().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_item_state_round_trip() -> Result<()> {
    let (api, mut transport) = start().await?;
    api.fail_next("DELETE", "/lists/L1/items/I2", StatusCode::INTERNAL_SERVER_ERROR, 1);
    api.fail_next("DELETE", "/lists/L1", StatusCode::INTERNAL_SERVER_ERROR, 1);

    session("e2e00005").run_iteration(&mut transport).await;

    let items = api.items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Important Task e2e00005 - Updated");
    assert_eq!(items[0].state, "inprogress");
    assert!(items[0].due_date.is_some());
    assert_eq!(items[0].completed_date, None);
    assert_eq!(api.lists()[0].name, "My Awesome List e2e00005 - Updated");
    Ok(())
}

#[tokio::test]
async fn test_concurrent_users_keep_separate_state() -> Result<()> {
    let api = FakeTodoApi::new();
    let base_url = api.spawn().await?;

    let mut users = JoinSet::new();
    for user in 0..5 {
        let config = HttpConfig::for_base_url(base_url.clone());
        users.spawn(async move {
            let mut transport = ReqwestTransport::with_config(&config)?;
            let mut session = session(&format!("user{:04}", user));
            let mut failed = 0;
            for _ in 0..3 {
                failed += session.run_iteration(&mut transport).await.count(StepStatus::Failed);
            }
            session.cleanup(&mut transport).await;
            anyhow::Ok(failed)
        });
    }

    while let Some(result) = users.join_next().await {
        assert_eq!(result??, 0);
    }
    assert_eq!(api.requests().len(), 5 * 3 * 11);
    assert!(api.lists().is_empty());
    assert!(api.items().is_empty());
    Ok(())
}
