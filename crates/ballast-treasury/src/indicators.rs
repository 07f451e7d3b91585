// crates/ballast-treasury/src/indicators.rs
//
// Per-epoch treasury indicators, all expressed in the reference currency:
//   - Tax revenue:          sum of the epoch's tax proceeds, normalized
//   - Seigniorage revenue:  seigniorage * rate(reference) * reward weight
//   - Mining reward:        tax revenue + seigniorage revenue
//   - Stability ratio:      seigniorage revenue / mining reward
//
// Exchange rates are the ledger's latest ones even for past epochs.

use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

use ballast_core::{BallastError, Epoch, EpochLedger};

use crate::normalize::{base_to_reference, to_reference};
use crate::params::TreasuryParams;
use crate::per_stake::{mining_rate_per_stake, seigniorage_rate_per_stake, tax_rate_per_stake};

/// Tax revenue collected during `epoch`.
///
/// Denominations with no proceeds are never looked up in the rate table.
pub fn tax_revenue<L>(ledger: &L, params: &TreasuryParams, epoch: Epoch) -> Result<Decimal, BallastError>
where
    L: EpochLedger + ?Sized,
{
    let proceeds = ledger.tax_proceeds(epoch)?;
    let mut total = Decimal::ZERO;
    for (denom, amount) in proceeds.iter() {
        if amount == 0 {
            continue;
        }
        let value = to_reference(ledger, params, amount, denom)?;
        total = total
            .checked_add(value)
            .ok_or_else(|| BallastError::Overflow(format!("tax revenue of epoch {}", epoch)))?;
    }
    Ok(total)
}

/// Seigniorage revenue recognized during `epoch`.
pub fn seigniorage_revenue<L>(
    ledger: &L,
    params: &TreasuryParams,
    epoch: Epoch,
) -> Result<Decimal, BallastError>
where
    L: EpochLedger + ?Sized,
{
    let seigniorage = ledger.seigniorage_added(epoch)?;
    if seigniorage == 0 {
        return Ok(Decimal::ZERO);
    }
    let weight = ledger.reward_weight(epoch)?;
    base_to_reference(ledger, params, seigniorage)?
        .checked_mul(weight)
        .ok_or_else(|| BallastError::Overflow(format!("seigniorage revenue of epoch {}", epoch)))
}

/// Combined mining reward of `epoch`.
pub fn mining_reward<L>(ledger: &L, params: &TreasuryParams, epoch: Epoch) -> Result<Decimal, BallastError>
where
    L: EpochLedger + ?Sized,
{
    let tax = tax_revenue(ledger, params, epoch)?;
    let seigniorage = seigniorage_revenue(ledger, params, epoch)?;
    tax.checked_add(seigniorage)
        .ok_or_else(|| BallastError::Overflow(format!("mining reward of epoch {}", epoch)))
}

/// Share of the mining reward of `epoch` that came from seigniorage.
///
/// # Errors
/// `DivisionByZero` when the epoch's mining reward is zero; the ratio is
/// undefined then, not zero.
pub fn stability_ratio<L>(ledger: &L, params: &TreasuryParams, epoch: Epoch) -> Result<Decimal, BallastError>
where
    L: EpochLedger + ?Sized,
{
    let tax = tax_revenue(ledger, params, epoch)?;
    let seigniorage = seigniorage_revenue(ledger, params, epoch)?;
    let mining = tax
        .checked_add(seigniorage)
        .ok_or_else(|| BallastError::Overflow(format!("mining reward of epoch {}", epoch)))?;
    if mining.is_zero() {
        return Err(BallastError::DivisionByZero(format!(
            "mining reward of epoch {} is zero",
            epoch
        )));
    }
    seigniorage
        .checked_div(mining)
        .ok_or_else(|| BallastError::Overflow(format!("stability ratio of epoch {}", epoch)))
}

/// The named indicators, each a function from epoch to a decimal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indicator {
    /// Tax revenue.
    Tax,
    /// Seigniorage revenue.
    Seigniorage,
    /// Tax plus seigniorage revenue.
    MiningReward,
    /// Seigniorage revenue over mining reward.
    StabilityRatio,
    /// Tax revenue per unit of bonded stake.
    TaxRatePerStake,
    /// Seigniorage revenue per unit of bonded stake.
    SeigniorageRatePerStake,
    /// Mining reward per unit of bonded stake.
    MiningRatePerStake,
}

impl Indicator {
    pub const ALL: [Indicator; 7] = [
        Indicator::Tax,
        Indicator::Seigniorage,
        Indicator::MiningReward,
        Indicator::StabilityRatio,
        Indicator::TaxRatePerStake,
        Indicator::SeigniorageRatePerStake,
        Indicator::MiningRatePerStake,
    ];

    /// Evaluate this indicator at `epoch`.
    pub fn evaluate<L>(self, ledger: &L, params: &TreasuryParams, epoch: Epoch) -> Result<Decimal, BallastError>
    where
        L: EpochLedger + ?Sized,
    {
        match self {
            Indicator::Tax => tax_revenue(ledger, params, epoch),
            Indicator::Seigniorage => seigniorage_revenue(ledger, params, epoch),
            Indicator::MiningReward => mining_reward(ledger, params, epoch),
            Indicator::StabilityRatio => stability_ratio(ledger, params, epoch),
            Indicator::TaxRatePerStake => tax_rate_per_stake(ledger, params, epoch),
            Indicator::SeigniorageRatePerStake => seigniorage_rate_per_stake(ledger, params, epoch),
            Indicator::MiningRatePerStake => mining_rate_per_stake(ledger, params, epoch),
        }
    }

    /// Short name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Indicator::Tax => "tax",
            Indicator::Seigniorage => "seigniorage",
            Indicator::MiningReward => "mining",
            Indicator::StabilityRatio => "smr",
            Indicator::TaxRatePerStake => "trl",
            Indicator::SeigniorageRatePerStake => "srl",
            Indicator::MiningRatePerStake => "mrl",
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Indicator {
    type Err = BallastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Indicator::ALL
            .into_iter()
            .find(|indicator| indicator.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| BallastError::Config(format!("unknown indicator: {}", s)))
    }
}
