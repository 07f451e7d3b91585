// crates/ballast-core/src/lib.rs
//
// ballast-core: Core types, errors, and ledger traits for the Ballast treasury.
//
// This is the leaf crate that all other crates in the workspace depend on.
// It defines epochs, currency denominations, multi-currency amounts, the
// protocol-wide error type, and the read interface onto the epoch ledger.

pub mod coins;
pub mod epoch;
pub mod error;
pub mod traits;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use ballast_core::Epoch;`
pub use coins::{Amount, Coins, Denom, BASE_DENOM, REFERENCE_DENOM};
pub use epoch::{Epoch, EpochClock, DEFAULT_BLOCKS_PER_EPOCH};
pub use error::BallastError;
pub use traits::EpochLedger;

/// Fixed-point decimal used for every rate, weight, and indicator value.
pub use rust_decimal::Decimal;
