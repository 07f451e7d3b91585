// crates/ballast-cli/src/main.rs
//
// CLI entrypoint for the Ballast treasury reporting tools.
//
// Loads a JSON ledger snapshot and TOML treasury parameters, then prints
// single-epoch indicators or rolling averages.

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use commands::report::ReportCmd;
use commands::rolling::RollingCmd;
use output::OutputFormat;

use ballast_treasury::{MemoryLedger, TreasuryParams};
use error::CliError;

/// Ballast CLI — treasury indicator reports.
#[derive(Parser, Debug)]
#[command(name = "ballast", version = "0.1.0", about = "Ballast treasury indicator reports")]
struct Cli {
    /// Path to the JSON ledger snapshot.
    #[arg(long, global = true, default_value = "ledger.json")]
    ledger: String,

    /// Path to the TOML treasury parameters.
    #[arg(long, global = true, default_value = "ballast.toml")]
    config: String,

    /// Print JSON instead of a table.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Every indicator for one epoch.
    Report(ReportCmd),

    /// Rolling average of one indicator.
    Rolling(RollingCmd),
}

fn main() -> Result<(), CliError> {
    // Initialize tracing subscriber for structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Fall back to default parameters if the config file is missing.
    let params = match TreasuryParams::load(&cli.config) {
        Ok(params) => {
            tracing::info!("Loaded treasury parameters from {}", cli.config);
            params
        }
        Err(e) => {
            tracing::warn!("Could not load parameters from {}: {}. Using defaults.", cli.config, e);
            TreasuryParams::default()
        }
    };

    let json = std::fs::read_to_string(&cli.ledger).map_err(|source| CliError::Io {
        path: cli.ledger.clone(),
        source,
    })?;
    let ledger = MemoryLedger::from_json(&json, &params)?;
    tracing::info!(
        "Loaded ledger snapshot from {} at block {}",
        cli.ledger,
        ledger.block_height()
    );

    let format = if cli.json { OutputFormat::Json } else { OutputFormat::Table };

    match &cli.command {
        Commands::Report(cmd) => commands::report::run(cmd, &ledger, &params, &format)?,
        Commands::Rolling(cmd) => commands::rolling::run(cmd, &ledger, &params, &format)?,
    }

    Ok(())
}
