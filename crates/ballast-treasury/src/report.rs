// crates/ballast-treasury/src/report.rs
//
// A ledger bound to its treasury parameters, exposing every indicator by
// epoch plus rolling averages anchored at the ledger's current epoch.

use rust_decimal::Decimal;
use serde::Serialize;

use ballast_core::{BallastError, Epoch, EpochLedger};

use crate::indicators::Indicator;
use crate::params::TreasuryParams;
use crate::rolling::rolling_average;

/// Every indicator of one epoch.
///
/// Ratios and rates that are undefined for the epoch (zero mining reward,
/// nothing bonded) are `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorReport {
    pub epoch: Epoch,
    pub tax_revenue: Decimal,
    pub seigniorage_revenue: Decimal,
    pub mining_reward: Decimal,
    pub stability_ratio: Option<Decimal>,
    pub tax_rate_per_stake: Option<Decimal>,
    pub seigniorage_rate_per_stake: Option<Decimal>,
    pub mining_rate_per_stake: Option<Decimal>,
}

/// Indicator queries over a single ledger snapshot.
pub struct TreasuryIndicators<'a, L: EpochLedger + ?Sized> {
    ledger: &'a L,
    params: &'a TreasuryParams,
}

impl<'a, L: EpochLedger + ?Sized> TreasuryIndicators<'a, L> {
    pub fn new(ledger: &'a L, params: &'a TreasuryParams) -> Self {
        Self { ledger, params }
    }

    /// Evaluate `indicator` at `epoch`.
    pub fn evaluate(&self, indicator: Indicator, epoch: Epoch) -> Result<Decimal, BallastError> {
        indicator.evaluate(self.ledger, self.params, epoch)
    }

    pub fn tax_revenue(&self, epoch: Epoch) -> Result<Decimal, BallastError> {
        self.evaluate(Indicator::Tax, epoch)
    }

    pub fn seigniorage_revenue(&self, epoch: Epoch) -> Result<Decimal, BallastError> {
        self.evaluate(Indicator::Seigniorage, epoch)
    }

    pub fn mining_reward(&self, epoch: Epoch) -> Result<Decimal, BallastError> {
        self.evaluate(Indicator::MiningReward, epoch)
    }

    pub fn stability_ratio(&self, epoch: Epoch) -> Result<Decimal, BallastError> {
        self.evaluate(Indicator::StabilityRatio, epoch)
    }

    pub fn tax_rate_per_stake(&self, epoch: Epoch) -> Result<Decimal, BallastError> {
        self.evaluate(Indicator::TaxRatePerStake, epoch)
    }

    pub fn seigniorage_rate_per_stake(&self, epoch: Epoch) -> Result<Decimal, BallastError> {
        self.evaluate(Indicator::SeigniorageRatePerStake, epoch)
    }

    pub fn mining_rate_per_stake(&self, epoch: Epoch) -> Result<Decimal, BallastError> {
        self.evaluate(Indicator::MiningRatePerStake, epoch)
    }

    /// Rolling average of `indicator` over `window` epochs ending at `epoch`.
    pub fn rolling_average(&self, epoch: Epoch, window: i64, indicator: Indicator) -> Result<Decimal, BallastError> {
        rolling_average(epoch, window, |e| self.evaluate(indicator, e))
    }

    /// Rolling average ending at the ledger's current epoch.
    pub fn rolling_average_current(&self, window: i64, indicator: Indicator) -> Result<Decimal, BallastError> {
        let current = self.ledger.current_epoch()?;
        self.rolling_average(current, window, indicator)
    }

    /// Evaluate every indicator at `epoch`.
    ///
    /// Only `DivisionByZero` is folded into `None`; other errors propagate.
    pub fn report(&self, epoch: Epoch) -> Result<IndicatorReport, BallastError> {
        Ok(IndicatorReport {
            epoch,
            tax_revenue: self.tax_revenue(epoch)?,
            seigniorage_revenue: self.seigniorage_revenue(epoch)?,
            mining_reward: self.mining_reward(epoch)?,
            stability_ratio: undefined_as_none(self.stability_ratio(epoch))?,
            tax_rate_per_stake: undefined_as_none(self.tax_rate_per_stake(epoch))?,
            seigniorage_rate_per_stake: undefined_as_none(self.seigniorage_rate_per_stake(epoch))?,
            mining_rate_per_stake: undefined_as_none(self.mining_rate_per_stake(epoch))?,
        })
    }
}

fn undefined_as_none(result: Result<Decimal, BallastError>) -> Result<Option<Decimal>, BallastError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(BallastError::DivisionByZero(_)) => Ok(None),
        Err(e) => Err(e),
    }
}
