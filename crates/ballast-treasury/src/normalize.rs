// crates/ballast-treasury/src/normalize.rs
//
// Currency normalization into the reference currency.
//
// Rates are quoted as base-currency units per unit of a denomination, so a
// conversion takes two hops: denomination -> base currency -> reference
// currency. The reference currency's own rate is never assumed to be one.

use rust_decimal::Decimal;

use ballast_core::{Amount, BallastError, Denom, EpochLedger};

use crate::params::TreasuryParams;

/// Convert `amount` of `denom` into the reference currency.
///
/// Result = `amount / rate(denom) * rate(reference)`. The product is formed
/// before the quotient, so `rate(denom) == rate(reference)` is exact. When
/// that product is out of range the quotient is taken first instead.
///
/// # Errors
/// - `UnknownDenomination` if either rate is not registered.
/// - `DivisionByZero` if `rate(denom)` is zero.
/// - `Overflow` if the intermediate product is not representable.
pub fn to_reference<L>(
    ledger: &L,
    params: &TreasuryParams,
    amount: Amount,
    denom: &Denom,
) -> Result<Decimal, BallastError>
where
    L: EpochLedger + ?Sized,
{
    let rate = ledger.exchange_rate(denom)?;
    if rate.is_zero() {
        return Err(BallastError::DivisionByZero(format!(
            "exchange rate of {} is zero",
            denom
        )));
    }
    let reference_rate = ledger.exchange_rate(&params.reference_denom)?;

    let amount_dec = Decimal::from(amount);
    let converted = match amount_dec.checked_mul(reference_rate) {
        Some(product) => product.checked_div(rate),
        None => amount_dec
            .checked_div(rate)
            .and_then(|base_units| base_units.checked_mul(reference_rate)),
    }
    .ok_or_else(|| {
        BallastError::Overflow(format!("converting {}{} to reference", amount, denom))
    })?;

    tracing::trace!(%denom, amount, %rate, %reference_rate, %converted, "normalized amount");
    Ok(converted)
}

/// Convert a base-currency amount into the reference currency.
///
/// One hop: `amount * rate(reference)`.
pub fn base_to_reference<L>(
    ledger: &L,
    params: &TreasuryParams,
    amount: Amount,
) -> Result<Decimal, BallastError>
where
    L: EpochLedger + ?Sized,
{
    let reference_rate = ledger.exchange_rate(&params.reference_denom)?;
    Decimal::from(amount)
        .checked_mul(reference_rate)
        .ok_or_else(|| BallastError::Overflow(format!("converting {} base units to reference", amount)))
}
