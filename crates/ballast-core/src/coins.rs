// crates/ballast-core/src/coins.rs
//
// Currency denominations and multi-currency amounts.
//
// Amounts are tracked in integer micro-units of their denomination
// (1 LUNA = 1,000,000 uluna). Only rates, weights, and indicators are
// decimal; raw ledger amounts never are.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Denomination of the base settlement currency (the staking asset).
pub const BASE_DENOM: &str = "uluna";

/// Denomination of the reference currency all revenue is expressed in.
pub const REFERENCE_DENOM: &str = "usdr";

/// Integer amount in micro-units of some denomination.
pub type Amount = u64;

/// A currency denomination, e.g. `uluna` or `ukrw`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Denom(String);

impl Denom {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The base settlement currency denomination.
    pub fn base() -> Self {
        Self::new(BASE_DENOM)
    }

    /// The reference currency denomination.
    pub fn reference() -> Self {
        Self::new(REFERENCE_DENOM)
    }
}

impl fmt::Display for Denom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Denom {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A multi-currency amount.
///
/// Denominations that are absent hold zero. Zero entries are never stored,
/// so iteration only yields denominations with a positive amount.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coins(BTreeMap<Denom, Amount>);

impl Coins {
    /// Create an empty amount.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Build from `(denomination, amount)` pairs, summing duplicates.
    pub fn from_pairs<I, D>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (D, Amount)>,
        D: Into<Denom>,
    {
        let mut coins = Self::new();
        for (denom, amount) in pairs {
            coins.add(denom.into(), amount);
        }
        coins
    }

    /// Add `amount` of `denom`. Saturates at `u64::MAX`.
    pub fn add(&mut self, denom: Denom, amount: Amount) {
        if amount == 0 {
            return;
        }
        let entry = self.0.entry(denom).or_insert(0);
        *entry = entry.saturating_add(amount);
    }

    /// Add every entry of `other` to this amount.
    pub fn add_coins(&mut self, other: &Coins) {
        for (denom, amount) in other.iter() {
            self.add(denom.clone(), amount);
        }
    }

    /// Amount held of `denom`; zero when absent.
    pub fn amount_of(&self, denom: &Denom) -> Amount {
        self.0.get(denom).copied().unwrap_or(0)
    }

    /// Iterate over `(denomination, amount)` in denomination order.
    pub fn iter(&self) -> impl Iterator<Item = (&Denom, Amount)> {
        self.0.iter().map(|(d, a)| (d, *a))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(d, a)| format!("{}{}", a, d)).collect();
        write!(f, "{}", parts.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_denom_is_zero() {
        let coins = Coins::new();
        assert_eq!(coins.amount_of(&Denom::new("ukrw")), 0);
        assert!(coins.is_empty());
    }

    #[test]
    fn test_zero_amount_not_stored() {
        let mut coins = Coins::new();
        coins.add(Denom::new("ukrw"), 0);
        assert!(coins.is_empty());
    }

    #[test]
    fn test_from_pairs_sums_duplicates() {
        let coins = Coins::from_pairs([("ukrw", 10), ("usdr", 5), ("ukrw", 7)]);
        assert_eq!(coins.amount_of(&Denom::new("ukrw")), 17);
        assert_eq!(coins.amount_of(&Denom::new("usdr")), 5);
        assert_eq!(coins.len(), 2);
    }

    #[test]
    fn test_add_coins_accumulates() {
        let mut coins = Coins::from_pairs([("ukrw", 10)]);
        coins.add_coins(&Coins::from_pairs([("ukrw", 5), ("ugbp", 1)]));
        assert_eq!(coins.amount_of(&Denom::new("ukrw")), 15);
        assert_eq!(coins.amount_of(&Denom::new("ugbp")), 1);
    }

    #[test]
    fn test_add_saturates() {
        let mut coins = Coins::from_pairs([("ukrw", u64::MAX)]);
        coins.add(Denom::new("ukrw"), 1);
        assert_eq!(coins.amount_of(&Denom::new("ukrw")), u64::MAX);
    }

    #[test]
    fn test_display() {
        let coins = Coins::from_pairs([("usdr", 3), ("ukrw", 2)]);
        assert_eq!(coins.to_string(), "2ukrw,3usdr");
    }

    #[test]
    fn test_json_shape() {
        let coins = Coins::from_pairs([("ukrw", 2)]);
        let json = serde_json::to_string(&coins).unwrap();
        assert_eq!(json, r#"{"ukrw":2}"#);
        let back: Coins = serde_json::from_str(&json).unwrap();
        assert_eq!(back, coins);
    }
}
