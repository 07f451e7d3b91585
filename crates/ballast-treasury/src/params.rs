// crates/ballast-treasury/src/params.rs
//
// Treasury parameters. Loaded from a TOML file or populated with defaults.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;

use ballast_core::{BallastError, Denom, EpochClock, DEFAULT_BLOCKS_PER_EPOCH};

/// Parameters shared by the ledger and the indicator engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreasuryParams {
    /// Base settlement currency; seigniorage is recorded in it.
    #[serde(default = "default_base_denom")]
    pub base_denom: Denom,

    /// Currency every revenue indicator is expressed in.
    #[serde(default = "default_reference_denom")]
    pub reference_denom: Denom,

    /// Reward weight used for epochs where none was set.
    #[serde(default = "default_reward_weight")]
    pub default_reward_weight: Decimal,

    /// Number of blocks per epoch.
    #[serde(default = "default_blocks_per_epoch")]
    pub blocks_per_epoch: u64,
}

fn default_base_denom() -> Denom {
    Denom::base()
}

fn default_reference_denom() -> Denom {
    Denom::reference()
}

fn default_reward_weight() -> Decimal {
    // 5%
    Decimal::new(5, 2)
}

fn default_blocks_per_epoch() -> u64 {
    DEFAULT_BLOCKS_PER_EPOCH
}

impl Default for TreasuryParams {
    fn default() -> Self {
        Self {
            base_denom: default_base_denom(),
            reference_denom: default_reference_denom(),
            default_reward_weight: default_reward_weight(),
            blocks_per_epoch: default_blocks_per_epoch(),
        }
    }
}

impl TreasuryParams {
    /// Load parameters from a TOML file at the given path.
    ///
    /// Returns `BallastError::Config` if the file cannot be read, parsed,
    /// or fails validation.
    pub fn load(path: &str) -> Result<Self, BallastError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| BallastError::Config(format!("cannot read {}: {}", path, e)))?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate parameters from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, BallastError> {
        let params: TreasuryParams =
            toml::from_str(contents).map_err(|e| BallastError::Config(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }

    /// Check parameter invariants.
    pub fn validate(&self) -> Result<(), BallastError> {
        if self.base_denom.as_str().is_empty() || self.reference_denom.as_str().is_empty() {
            return Err(BallastError::Config("denominations must not be empty".to_string()));
        }
        if self.default_reward_weight.is_sign_negative() {
            return Err(BallastError::Config(format!(
                "default_reward_weight must not be negative, got {}",
                self.default_reward_weight
            )));
        }
        self.epoch_clock().map(|_| ())
    }

    /// The block-height-to-epoch mapping these parameters describe.
    pub fn epoch_clock(&self) -> Result<EpochClock, BallastError> {
        EpochClock::new(self.blocks_per_epoch)
    }
}
