// crates/ballast-cli/src/commands/rolling.rs
//
// `ballast rolling <indicator> --window W [--epoch N]` — trailing average.

use clap::Args;
use serde::Serialize;

use ballast_core::{Decimal, Epoch, EpochLedger};
use ballast_treasury::{epoch_range, Indicator, MemoryLedger, TreasuryIndicators, TreasuryParams};

use crate::error::CliError;
use crate::output::{format_decimal, format_json, OutputFormat};

/// Rolling average command.
#[derive(Debug, Args)]
pub struct RollingCmd {
    /// Indicator: tax, seigniorage, mining, smr, trl, srl, or mrl.
    #[arg()]
    pub indicator: Indicator,

    /// Number of trailing epochs to average over.
    #[arg(long, allow_negative_numbers = true)]
    pub window: i64,

    /// Last epoch of the window (default: the ledger's current epoch).
    #[arg(long, allow_negative_numbers = true)]
    pub epoch: Option<i64>,
}

#[derive(Debug, Serialize)]
struct RollingOutput {
    indicator: String,
    epoch: Epoch,
    window: i64,
    first_epoch: Option<u64>,
    value: Decimal,
}

/// Run the rolling command.
pub fn run(
    cmd: &RollingCmd,
    ledger: &MemoryLedger,
    params: &TreasuryParams,
    format: &OutputFormat,
) -> Result<(), CliError> {
    let epoch = match cmd.epoch {
        Some(value) => Epoch::try_from(value)?,
        None => ledger.current_epoch()?,
    };
    let value = TreasuryIndicators::new(ledger, params).rolling_average(epoch, cmd.window, cmd.indicator)?;
    let first_epoch = epoch_range(epoch, cmd.window).map(|range| *range.start());

    match format {
        OutputFormat::Json => {
            let out = RollingOutput {
                indicator: cmd.indicator.to_string(),
                epoch,
                window: cmd.window,
                first_epoch,
                value,
            };
            println!("{}", format_json(&out));
        }
        OutputFormat::Table => {
            match first_epoch {
                Some(first) => println!(
                    "{} averaged over epochs {}..={} ({} requested)",
                    cmd.indicator, first, epoch, cmd.window
                ),
                None => println!("{} with empty window {}", cmd.indicator, cmd.window),
            }
            println!("  Value: {}", format_decimal(Some(value)));
        }
    }

    Ok(())
}
