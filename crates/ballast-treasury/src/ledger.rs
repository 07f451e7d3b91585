// crates/ballast-treasury/src/ledger.rs
//
// In-memory epoch ledger.
//
// Holds per-epoch tax proceeds, seigniorage, and reward weights alongside
// the latest exchange rates and total bonded stake. Proceeds accumulate
// into whichever epoch the current block height falls in and are never
// decremented. Exchange rates and bonded stake are live values: only the
// latest one is kept.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use ballast_core::{Amount, BallastError, Coins, Denom, Epoch, EpochClock, EpochLedger};

use crate::params::TreasuryParams;

/// Serializable contents of a [`MemoryLedger`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// Current block height.
    #[serde(default)]
    pub block_height: u64,
    /// Tax proceeds per epoch.
    #[serde(default)]
    pub tax_proceeds: BTreeMap<Epoch, Coins>,
    /// Seigniorage added per epoch, in the base currency.
    #[serde(default)]
    pub seigniorage: BTreeMap<Epoch, Amount>,
    /// Reward weights explicitly set per epoch.
    #[serde(default)]
    pub reward_weights: BTreeMap<Epoch, Decimal>,
    /// Latest base-currency units per unit of each denomination.
    #[serde(default)]
    pub exchange_rates: BTreeMap<Denom, Decimal>,
    /// Total base currency bonded to validators.
    #[serde(default)]
    pub total_bonded_stake: Amount,
}

/// An [`EpochLedger`] kept entirely in memory.
#[derive(Debug, Clone)]
pub struct MemoryLedger {
    snapshot: LedgerSnapshot,
    clock: EpochClock,
    base_denom: Denom,
    default_reward_weight: Decimal,
}

impl MemoryLedger {
    /// Create an empty ledger at block height 0.
    pub fn new(params: &TreasuryParams) -> Result<Self, BallastError> {
        Self::from_snapshot(LedgerSnapshot::default(), params)
    }

    /// Wrap existing ledger contents.
    pub fn from_snapshot(snapshot: LedgerSnapshot, params: &TreasuryParams) -> Result<Self, BallastError> {
        params.validate()?;
        Ok(Self {
            snapshot,
            clock: params.epoch_clock()?,
            base_denom: params.base_denom.clone(),
            default_reward_weight: params.default_reward_weight,
        })
    }

    /// Parse ledger contents from JSON.
    pub fn from_json(json: &str, params: &TreasuryParams) -> Result<Self, BallastError> {
        let snapshot: LedgerSnapshot = serde_json::from_str(json)?;
        Self::from_snapshot(snapshot, params)
    }

    /// Serialize ledger contents as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, BallastError> {
        Ok(serde_json::to_string_pretty(&self.snapshot)?)
    }

    pub fn snapshot(&self) -> &LedgerSnapshot {
        &self.snapshot
    }

    pub fn block_height(&self) -> u64 {
        self.snapshot.block_height
    }

    /// Move to `height`; the current epoch follows from the epoch clock.
    pub fn set_block_height(&mut self, height: u64) {
        self.snapshot.block_height = height;
    }

    /// Move to the first block of `epoch`.
    pub fn set_epoch(&mut self, epoch: Epoch) {
        self.snapshot.block_height = self.clock.start_height(epoch);
    }

    fn epoch(&self) -> Epoch {
        self.clock.epoch_at(self.snapshot.block_height)
    }

    /// Add tax proceeds to the current epoch.
    pub fn record_tax_proceeds(&mut self, proceeds: &Coins) {
        if proceeds.is_empty() {
            return;
        }
        let epoch = self.epoch();
        tracing::debug!(%epoch, %proceeds, "recording tax proceeds");
        self.snapshot
            .tax_proceeds
            .entry(epoch)
            .or_default()
            .add_coins(proceeds);
    }

    /// Add seigniorage to the current epoch. Saturates at `u64::MAX`.
    pub fn add_seigniorage(&mut self, amount: Amount) {
        if amount == 0 {
            return;
        }
        let epoch = self.epoch();
        tracing::debug!(%epoch, amount, "adding seigniorage");
        let entry = self.snapshot.seigniorage.entry(epoch).or_insert(0);
        *entry = entry.saturating_add(amount);
    }

    /// Set the reward weight of the current epoch.
    pub fn set_reward_weight(&mut self, weight: Decimal) {
        let epoch = self.epoch();
        self.snapshot.reward_weights.insert(epoch, weight);
    }

    /// Replace the latest exchange rate of `denom`.
    pub fn set_exchange_rate(&mut self, denom: Denom, rate: Decimal) {
        self.snapshot.exchange_rates.insert(denom, rate);
    }

    /// Replace the total bonded stake.
    pub fn set_total_bonded_stake(&mut self, amount: Amount) {
        self.snapshot.total_bonded_stake = amount;
    }
}

impl EpochLedger for MemoryLedger {
    fn tax_proceeds(&self, epoch: Epoch) -> Result<Coins, BallastError> {
        Ok(self.snapshot.tax_proceeds.get(&epoch).cloned().unwrap_or_default())
    }

    fn seigniorage_added(&self, epoch: Epoch) -> Result<Amount, BallastError> {
        Ok(self.snapshot.seigniorage.get(&epoch).copied().unwrap_or(0))
    }

    fn reward_weight(&self, epoch: Epoch) -> Result<Decimal, BallastError> {
        Ok(self
            .snapshot
            .reward_weights
            .get(&epoch)
            .copied()
            .unwrap_or(self.default_reward_weight))
    }

    fn total_bonded_stake(&self) -> Result<Amount, BallastError> {
        Ok(self.snapshot.total_bonded_stake)
    }

    fn exchange_rate(&self, denom: &Denom) -> Result<Decimal, BallastError> {
        if *denom == self.base_denom {
            return Ok(Decimal::ONE);
        }
        self.snapshot
            .exchange_rates
            .get(denom)
            .copied()
            .ok_or_else(|| BallastError::UnknownDenomination(denom.clone()))
    }

    fn current_epoch(&self) -> Result<Epoch, BallastError> {
        Ok(self.epoch())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_epochs() -> TreasuryParams {
        TreasuryParams {
            blocks_per_epoch: 10,
            ..TreasuryParams::default()
        }
    }

    #[test]
    fn test_empty_ledger_reads_zero() {
        let ledger = MemoryLedger::new(&small_epochs()).unwrap();
        assert!(ledger.tax_proceeds(Epoch::new(3)).unwrap().is_empty());
        assert_eq!(ledger.seigniorage_added(Epoch::new(3)).unwrap(), 0);
        assert_eq!(ledger.total_bonded_stake().unwrap(), 0);
        assert_eq!(ledger.current_epoch().unwrap(), Epoch::GENESIS);
    }

    #[test]
    fn test_proceeds_accumulate_per_epoch() {
        let mut ledger = MemoryLedger::new(&small_epochs()).unwrap();
        ledger.record_tax_proceeds(&Coins::from_pairs([("ukrw", 10)]));
        ledger.record_tax_proceeds(&Coins::from_pairs([("ukrw", 5), ("usdr", 1)]));
        ledger.set_block_height(25);
        ledger.record_tax_proceeds(&Coins::from_pairs([("ukrw", 100)]));

        let first = ledger.tax_proceeds(Epoch::new(0)).unwrap();
        assert_eq!(first.amount_of(&Denom::new("ukrw")), 15);
        assert_eq!(first.amount_of(&Denom::new("usdr")), 1);
        let third = ledger.tax_proceeds(Epoch::new(2)).unwrap();
        assert_eq!(third.amount_of(&Denom::new("ukrw")), 100);
        assert!(ledger.tax_proceeds(Epoch::new(1)).unwrap().is_empty());
    }

    #[test]
    fn test_seigniorage_accumulates() {
        let mut ledger = MemoryLedger::new(&small_epochs()).unwrap();
        ledger.set_epoch(Epoch::new(4));
        ledger.add_seigniorage(7);
        ledger.add_seigniorage(3);
        assert_eq!(ledger.seigniorage_added(Epoch::new(4)).unwrap(), 10);
        assert_eq!(ledger.current_epoch().unwrap(), Epoch::new(4));
    }

    #[test]
    fn test_reward_weight_falls_back_to_default() {
        let mut ledger = MemoryLedger::new(&small_epochs()).unwrap();
        ledger.set_epoch(Epoch::new(1));
        ledger.set_reward_weight(Decimal::ONE);
        assert_eq!(ledger.reward_weight(Epoch::new(1)).unwrap(), Decimal::ONE);
        assert_eq!(ledger.reward_weight(Epoch::new(2)).unwrap(), Decimal::new(5, 2));
    }

    #[test]
    fn test_exchange_rates() {
        let mut ledger = MemoryLedger::new(&small_epochs()).unwrap();
        assert_eq!(ledger.exchange_rate(&Denom::base()).unwrap(), Decimal::ONE);
        assert!(matches!(
            ledger.exchange_rate(&Denom::new("ukrw")),
            Err(BallastError::UnknownDenomination(_))
        ));
        ledger.set_exchange_rate(Denom::new("ukrw"), Decimal::from(10));
        ledger.set_exchange_rate(Denom::new("ukrw"), Decimal::from(12));
        assert_eq!(ledger.exchange_rate(&Denom::new("ukrw")).unwrap(), Decimal::from(12));
    }

    #[test]
    fn test_json_snapshot() {
        let params = small_epochs();
        let mut ledger = MemoryLedger::new(&params).unwrap();
        ledger.set_exchange_rate(Denom::reference(), Decimal::new(15, 1));
        ledger.set_epoch(Epoch::new(2));
        ledger.record_tax_proceeds(&Coins::from_pairs([("usdr", 9)]));
        ledger.add_seigniorage(4);
        ledger.set_total_bonded_stake(1_000);

        let json = ledger.to_json().unwrap();
        let restored = MemoryLedger::from_json(&json, &params).unwrap();
        assert_eq!(restored.snapshot(), ledger.snapshot());
        assert_eq!(restored.current_epoch().unwrap(), Epoch::new(2));
    }

    #[test]
    fn test_invalid_params_rejected() {
        let params = TreasuryParams {
            blocks_per_epoch: 0,
            ..TreasuryParams::default()
        };
        assert!(MemoryLedger::new(&params).is_err());
    }
}
