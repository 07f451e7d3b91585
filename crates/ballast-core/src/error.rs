use thiserror::Error;

use crate::coins::Denom;

/// Protocol-wide error types for the Ballast treasury.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BallastError {
    /// The exchange rate table has no entry for this denomination.
    #[error("Unknown denomination: {0}")]
    UnknownDenomination(Denom),

    /// A zero rate, zero bonded stake, or zero mining reward was used as a divisor.
    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    /// A negative epoch was requested.
    #[error("Invalid epoch: {0}")]
    InvalidEpoch(i64),

    /// Decimal arithmetic exceeded the representable range.
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    /// Invalid or unreadable configuration.
    #[error("Config error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for BallastError {
    fn from(e: serde_json::Error) -> Self {
        BallastError::Serialization(e.to_string())
    }
}
