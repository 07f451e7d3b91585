// crates/ballast-treasury/src/lib.rs
//
// ballast-treasury: economic indicators for the Ballast stabilization treasury.
//
// Reads per-epoch tax proceeds and seigniorage back from an `EpochLedger`,
// normalizes them into the reference currency, and derives revenue, stability
// ratio, per-stake rates, and trailing-window averages of any of them.
//
// Every operation is a pure read over one ledger snapshot.

pub mod indicators;
pub mod ledger;
pub mod normalize;
pub mod params;
pub mod per_stake;
pub mod report;
pub mod rolling;

// Re-export key types for ergonomic access from downstream crates.
pub use indicators::{mining_reward, seigniorage_revenue, stability_ratio, tax_revenue, Indicator};
pub use ledger::{LedgerSnapshot, MemoryLedger};
pub use normalize::{base_to_reference, to_reference};
pub use params::TreasuryParams;
pub use per_stake::{mining_rate_per_stake, per_stake, seigniorage_rate_per_stake, tax_rate_per_stake};
pub use report::{IndicatorReport, TreasuryIndicators};
pub use rolling::{epoch_range, rolling_average};
