//! Smoke runner against the in-process fake todo API

use anyhow::Result;
use axum::http::StatusCode;
use fake_todo_api::FakeTodoApi;
use todo_loadtest::run_smoke;
use todo_loadtest_config::LoadTestConfig;

async fn config_for(api: &FakeTodoApi) -> Result<LoadTestConfig> {
    let mut config = LoadTestConfig::default();
    config.target.host = api.spawn().await?;
    config.validate_all()?;
    Ok(config)
}

#[tokio::test]
async fn test_smoke_run_against_fake_api() -> Result<()> {
    let api = FakeTodoApi::new();
    let config = config_for(&api).await?;

    let report = run_smoke(&config, 3, false).await?;

    assert!(report.is_success(), "{}", report.render());
    assert_eq!(report.requests, 33);
    assert!(api.lists().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_smoke_run_fails_on_unexpected_status() -> Result<()> {
    let api = FakeTodoApi::new();
    let config = config_for(&api).await?;
    api.fail_next("GET", "/lists", StatusCode::BAD_GATEWAY, 1);

    let report = run_smoke(&config, 1, false).await?;

    assert!(!report.is_success());
    assert_eq!(report.failures, 1);
    let list_all = report
        .summary
        .iter()
        .find(|row| row.name == "Get All Lists")
        .unwrap();
    assert_eq!((list_all.total, list_all.failed), (1, 1));
    assert!(api.lists().is_empty());
    Ok(())
}
