// crates/ballast-treasury/src/per_stake.rs
//
// Per-unit-of-stake rates: an indicator's value divided by the total
// bonded stake. The stake is read live, not as of the evaluated epoch.

use rust_decimal::Decimal;

use ballast_core::{BallastError, Epoch, EpochLedger};

use crate::indicators::{mining_reward, seigniorage_revenue, tax_revenue};
use crate::params::TreasuryParams;

/// Divide `indicator(epoch)` by the total bonded stake.
///
/// # Errors
/// `DivisionByZero` if nothing is bonded; any error from `indicator`.
pub fn per_stake<L, F>(ledger: &L, epoch: Epoch, indicator: F) -> Result<Decimal, BallastError>
where
    L: EpochLedger + ?Sized,
    F: FnOnce(Epoch) -> Result<Decimal, BallastError>,
{
    let bonded = ledger.total_bonded_stake()?;
    if bonded == 0 {
        return Err(BallastError::DivisionByZero(
            "total bonded stake is zero".to_string(),
        ));
    }
    let value = indicator(epoch)?;
    value
        .checked_div(Decimal::from(bonded))
        .ok_or_else(|| BallastError::Overflow(format!("per-stake rate of epoch {}", epoch)))
}

/// Tax revenue per unit of bonded stake.
pub fn tax_rate_per_stake<L>(ledger: &L, params: &TreasuryParams, epoch: Epoch) -> Result<Decimal, BallastError>
where
    L: EpochLedger + ?Sized,
{
    per_stake(ledger, epoch, |e| tax_revenue(ledger, params, e))
}

/// Seigniorage revenue per unit of bonded stake.
pub fn seigniorage_rate_per_stake<L>(
    ledger: &L,
    params: &TreasuryParams,
    epoch: Epoch,
) -> Result<Decimal, BallastError>
where
    L: EpochLedger + ?Sized,
{
    per_stake(ledger, epoch, |e| seigniorage_revenue(ledger, params, e))
}

/// Mining reward per unit of bonded stake.
pub fn mining_rate_per_stake<L>(ledger: &L, params: &TreasuryParams, epoch: Epoch) -> Result<Decimal, BallastError>
where
    L: EpochLedger + ?Sized,
{
    per_stake(ledger, epoch, |e| mining_reward(ledger, params, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::MemoryLedger;
    use ballast_core::{Coins, Denom};

    #[test]
    fn test_unit_indicator() {
        let params = TreasuryParams::default();
        let mut ledger = MemoryLedger::new(&params).unwrap();
        ledger.set_total_bonded_stake(1_000_000);

        let bonded = Decimal::from(ledger.total_bonded_stake().unwrap());
        let rate = per_stake(&ledger, Epoch::GENESIS, |_| Ok(bonded * Decimal::from(20))).unwrap();
        assert_eq!(rate, Decimal::from(20));
    }

    #[test]
    fn test_zero_stake() {
        let params = TreasuryParams::default();
        let ledger = MemoryLedger::new(&params).unwrap();
        let result = per_stake(&ledger, Epoch::GENESIS, |_| Ok(Decimal::ONE));
        assert!(matches!(result, Err(BallastError::DivisionByZero(_))));
    }

    #[test]
    fn test_indicator_error_propagates() {
        let params = TreasuryParams::default();
        let mut ledger = MemoryLedger::new(&params).unwrap();
        ledger.set_total_bonded_stake(10);
        let result = per_stake(&ledger, Epoch::GENESIS, |e| Err(BallastError::InvalidEpoch(e.value() as i64)));
        assert_eq!(result, Err(BallastError::InvalidEpoch(0)));
    }

    #[test]
    fn test_named_rates() {
        let params = TreasuryParams::default();
        let mut ledger = MemoryLedger::new(&params).unwrap();
        ledger.set_exchange_rate(Denom::reference(), Decimal::ONE);
        ledger.record_tax_proceeds(&Coins::from_pairs([("usdr", 300)]));
        ledger.add_seigniorage(100);
        ledger.set_reward_weight(Decimal::ONE);
        ledger.set_total_bonded_stake(100);

        let epoch = Epoch::GENESIS;
        assert_eq!(tax_rate_per_stake(&ledger, &params, epoch).unwrap(), Decimal::from(3));
        assert_eq!(seigniorage_rate_per_stake(&ledger, &params, epoch).unwrap(), Decimal::ONE);
        assert_eq!(mining_rate_per_stake(&ledger, &params, epoch).unwrap(), Decimal::from(4));
    }
}
