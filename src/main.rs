//! Agent OS health monitor daemon

#![allow(missing_docs)]

use agentos_monitor::utils::logging::init_logging;
use agentos_monitor::{Config, Monitor, MonitoringSession};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Health monitoring and incident response for Agent OS services
#[derive(Debug, Parser)]
#[command(name = "health-monitor", version, about)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "MONITOR_CONFIG", default_value = "config/monitor.yaml")]
    config: PathBuf,

    /// Run a single probe cycle, print the status snapshot as JSON and exit
    #[arg(long, conflicts_with = "validate")]
    once: bool,

    /// Load and validate the configuration, then exit
    #[arg(long)]
    validate: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::from_file(&cli.config)
        .await
        .and_then(Config::apply_env)
        .with_context(|| format!("failed to load configuration from {}", cli.config.display()))?;

    if cli.validate {
        println!(
            "Configuration OK: {} targets",
            config.targets().len()
        );
        return Ok(());
    }

    init_logging(config.logging()).context("failed to initialize logging")?;

    if cli.once {
        let session = MonitoringSession::new(config.monitor)
            .context("failed to create monitoring session")?;
        session.run_cycle().await;
        println!("{}", serde_json::to_string_pretty(&session.status())?);
        return Ok(());
    }

    let monitor = Monitor::new(config).context("failed to create monitor")?;
    monitor.run().await.context("monitor stopped with an error")?;
    Ok(())
}
