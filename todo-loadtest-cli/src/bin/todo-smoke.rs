use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use todo_loadtest::cli::SmokeCli;
use todo_loadtest::{run_smoke, settings};
use todo_loadtest_config::LoadTestConfig;
use todo_loadtest_logging::init_logging_from_config;
use tracing::info;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = SmokeCli::parse();
    if cli.sample_config {
        print!("{}", LoadTestConfig::generate_sample());
        return Ok(ExitCode::SUCCESS);
    }

    settings::load_dotenv()?;
    let mut config = settings::load(cli.config.as_deref())?;
    cli.apply(&mut config);
    config
        .validate_all()
        .context("Invalid configuration after command line overrides")?;
    let _logging = init_logging_from_config(&config.logging)?;

    info!(
        host = %config.target.host,
        iterations = cli.iterations,
        "Starting smoke run"
    );
    let report = run_smoke(&config, cli.iterations, cli.pace).await?;
    println!("{}", report.render());

    if report.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
