// crates/ballast-cli/src/commands/report.rs
//
// `ballast report [--epoch N]` — every indicator for one epoch.

use clap::Args;

use ballast_core::{Epoch, EpochLedger};
use ballast_treasury::{MemoryLedger, TreasuryIndicators, TreasuryParams};

use crate::error::CliError;
use crate::output::{format_json, format_table, IndicatorRow, OutputFormat};

/// Single-epoch report command.
#[derive(Debug, Args)]
pub struct ReportCmd {
    /// Epoch to report on (default: the ledger's current epoch).
    #[arg(long, allow_negative_numbers = true)]
    pub epoch: Option<i64>,
}

/// Run the report command.
pub fn run(
    cmd: &ReportCmd,
    ledger: &MemoryLedger,
    params: &TreasuryParams,
    format: &OutputFormat,
) -> Result<(), CliError> {
    let epoch = match cmd.epoch {
        Some(value) => Epoch::try_from(value)?,
        None => ledger.current_epoch()?,
    };
    let report = TreasuryIndicators::new(ledger, params).report(epoch)?;

    match format {
        OutputFormat::Json => println!("{}", format_json(&report)),
        OutputFormat::Table => {
            println!("Epoch {} (reference currency: {})", epoch, params.reference_denom);
            let rows = vec![
                IndicatorRow::new("tax", Some(report.tax_revenue)),
                IndicatorRow::new("seigniorage", Some(report.seigniorage_revenue)),
                IndicatorRow::new("mining", Some(report.mining_reward)),
                IndicatorRow::new("smr", report.stability_ratio),
                IndicatorRow::new("trl", report.tax_rate_per_stake),
                IndicatorRow::new("srl", report.seigniorage_rate_per_stake),
                IndicatorRow::new("mrl", report.mining_rate_per_stake),
            ];
            println!("{}", format_table(&rows));
        }
    }

    Ok(())
}
