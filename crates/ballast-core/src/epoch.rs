// crates/ballast-core/src/epoch.rs
//
// Epochs: fixed-length periods of consensus time used as the unit of
// treasury accounting. Epoch 0 is the first epoch with recorded data.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::BallastError;

/// Default epoch length: one week of 6-second blocks.
pub const DEFAULT_BLOCKS_PER_EPOCH: u64 = 100_800;

/// A treasury accounting epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Epoch(u64);

impl Epoch {
    /// The first epoch.
    pub const GENESIS: Epoch = Epoch(0);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for Epoch {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl TryFrom<i64> for Epoch {
    type Error = BallastError;

    /// Negative epochs fail with `InvalidEpoch`; they are never clamped.
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(Epoch)
            .map_err(|_| BallastError::InvalidEpoch(value))
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maps block height to epoch number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpochClock {
    /// Number of blocks per epoch (default 100,800).
    blocks_per_epoch: u64,
}

impl EpochClock {
    /// Create a clock with the given epoch length.
    ///
    /// # Errors
    /// Returns `BallastError::Config` if `blocks_per_epoch` is zero.
    pub fn new(blocks_per_epoch: u64) -> Result<Self, BallastError> {
        if blocks_per_epoch == 0 {
            return Err(BallastError::Config(
                "blocks_per_epoch must be greater than zero".to_string(),
            ));
        }
        Ok(Self { blocks_per_epoch })
    }

    /// The epoch containing `height`.
    pub fn epoch_at(&self, height: u64) -> Epoch {
        Epoch(height / self.blocks_per_epoch)
    }

    /// The first block height of `epoch`, saturating at `u64::MAX`.
    pub fn start_height(&self, epoch: Epoch) -> u64 {
        epoch.0.saturating_mul(self.blocks_per_epoch)
    }
}

impl Default for EpochClock {
    fn default() -> Self {
        Self {
            blocks_per_epoch: DEFAULT_BLOCKS_PER_EPOCH,
        }
    }
}
