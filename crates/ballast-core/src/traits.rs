// crates/ballast-core/src/traits.rs

use crate::coins::{Amount, Coins, Denom};
use crate::epoch::Epoch;
use crate::error::BallastError;
use rust_decimal::Decimal;

/// Read interface onto the per-epoch treasury ledger, the exchange-rate
/// oracle, and the validator set.
///
/// Implementations are read as a snapshot: no mutation may happen while a
/// single indicator is being evaluated. Implemented in-memory by
/// `ballast_treasury::MemoryLedger`.
pub trait EpochLedger: Send + Sync {
    /// Tax proceeds collected during `epoch`. Absent denominations are zero.
    fn tax_proceeds(&self, epoch: Epoch) -> Result<Coins, BallastError>;

    /// Seigniorage added during `epoch`, in the base settlement currency.
    fn seigniorage_added(&self, epoch: Epoch) -> Result<Amount, BallastError>;

    /// Reward weight of `epoch`, falling back to the configured default.
    fn reward_weight(&self, epoch: Epoch) -> Result<Decimal, BallastError>;

    /// Total base currency currently bonded to validators.
    fn total_bonded_stake(&self) -> Result<Amount, BallastError>;

    /// Latest base-currency units per unit of `denom`.
    ///
    /// Fails with `UnknownDenomination` when no rate is registered.
    fn exchange_rate(&self, denom: &Denom) -> Result<Decimal, BallastError>;

    /// The epoch the ledger is currently in.
    fn current_epoch(&self) -> Result<Epoch, BallastError>;
}
