use anyhow::{Context, Result};
use goose::prelude::*;
use todo_loadtest::{settings, todo_api_user};
use todo_loadtest_logging::init_logging_from_config;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let env_file = settings::load_dotenv()?;
    let config = settings::install(settings::load(None)?);
    let _logging = init_logging_from_config(&config.logging)?;

    if let Some(path) = env_file {
        info!("Loaded environment from {}", path.display());
    }
    info!(
        host = %config.target.host,
        debug_mode = config.logging.debug_mode,
        "Starting todo API load test"
    );

    // Goose owns the command line: -u, -r, -t, --host, report files
    let _metrics = GooseAttack::initialize()
        .context("Failed to initialize load test")?
        .register_scenario(todo_api_user(&config.scenario)?)
        .set_default(GooseDefault::Host, config.target.host.as_str())?
        .execute()
        .await
        .context("Load test failed")?;

    info!("Load test finished");
    Ok(())
}
