//! CLI argument parsing for the smoke runner
//!
//! The load test binary leaves its command line to goose.

use clap::Parser;
use std::path::PathBuf;
use todo_loadtest_config::LoadTestConfig;

#[derive(Parser, Debug)]
#[command(
    name = "todo-smoke",
    author,
    version,
    about = "Run the todo API scenario for a single user and report every request",
    long_about = None
)]
pub struct SmokeCli {
    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Base URL of the todo API (overrides configuration)
    #[arg(long, value_name = "URL")]
    pub host: Option<String>,

    /// Number of scenario iterations to run
    #[arg(short = 'n', long, value_name = "COUNT", default_value_t = 1)]
    pub iterations: u32,

    /// Log full request details for failed calls
    #[arg(long)]
    pub debug: bool,

    /// Sleep a random wait time between iterations
    #[arg(long)]
    pub pace: bool,

    /// Print the default configuration as YAML and exit
    #[arg(long)]
    pub sample_config: bool,
}

impl SmokeCli {
    /// Fold the command line into loaded configuration
    pub fn apply(&self, config: &mut LoadTestConfig) {
        if let Some(host) = &self.host {
            config.target.host = host.clone();
        }
        if self.debug {
            config.logging.debug_mode = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = SmokeCli::try_parse_from(["todo-smoke"]).unwrap();
        assert_eq!(cli.iterations, 1);
        assert!(!cli.debug && !cli.pace);
        assert!(cli.host.is_none());
    }

    #[test]
    fn test_overrides_are_applied() {
        let cli = SmokeCli::try_parse_from([
            "todo-smoke",
            "--host",
            "http://localhost:3100",
            "-n",
            "3",
            "--debug",
        ])
        .unwrap();

        let mut config = LoadTestConfig::default();
        cli.apply(&mut config);
        assert_eq!(config.target.host, "http://localhost:3100");
        assert!(config.logging.debug_mode);
        assert_eq!(cli.iterations, 3);
    }

    #[test]
    fn test_sample_config_flag() {
        let cli = SmokeCli::try_parse_from(["todo-smoke", "--sample-config"]).unwrap();
        assert!(cli.sample_config);
    }

    #[test]
    fn test_rejects_bad_iteration_count() {
        assert!(SmokeCli::try_parse_from(["todo-smoke", "--iterations", "lots"]).is_err());
    }
}
