//! Pictale CLI binary.
//!
//! - `pictale run --image <path>` runs the pipeline once
//! - `pictale serve` exposes the HTTP upload API

use clap::Parser;
use pictale::observability::{ObservabilityConfig, init_observability, shutdown_observability};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, load_settings, run_story, serve_api};

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    init_observability(
        ObservabilityConfig::new("pictale")
            .with_log_level(log_level)
            .with_json_logs(cli.json_logs),
    )?;

    let (config, credentials) = load_settings(cli.config.as_deref())?;

    let result = match cli.command {
        Commands::Run { image } => run_story(&config, &credentials, &image).await,
        Commands::Serve { bind } => serve_api(&config, &credentials, bind).await,
    };

    shutdown_observability();
    result?;
    Ok(())
}
