// crates/ballast-treasury/src/rolling.rs
//
// Trailing-window averages of any indicator.
//
// The window is clamped to epochs that exist: at epoch `e` with window `w`
// the summed range is [max(0, e - w + 1), e] and the divisor is the number
// of epochs in that range, not `w`. Near genesis the average therefore
// covers all history so far instead of padding with zeros.

use rust_decimal::Decimal;
use std::ops::RangeInclusive;

use ballast_core::{BallastError, Epoch};

/// Inclusive epoch bounds averaged at `current` for `window`.
///
/// Returns `None` when `window <= 0`.
pub fn epoch_range(current: Epoch, window: i64) -> Option<RangeInclusive<u64>> {
    if window <= 0 {
        return None;
    }
    let hi = current.value();
    let lo = (i128::from(hi) - i128::from(window) + 1).max(0);
    // 0 <= lo <= hi, so the conversion cannot fail.
    let lo = u64::try_from(lo).unwrap_or(0);
    Some(lo..=hi)
}

/// Arithmetic mean of `indicator` over the clamped window ending at `current`.
///
/// Returns exactly zero when `window <= 0` without calling `indicator`.
/// `indicator` is called once per epoch in range, oldest first.
///
/// # Errors
/// The first error raised by `indicator`, unchanged.
pub fn rolling_average<F>(current: Epoch, window: i64, mut indicator: F) -> Result<Decimal, BallastError>
where
    F: FnMut(Epoch) -> Result<Decimal, BallastError>,
{
    let Some(range) = epoch_range(current, window) else {
        return Ok(Decimal::ZERO);
    };
    let (lo, hi) = (*range.start(), *range.end());
    let count = (hi - lo).saturating_add(1);
    tracing::debug!(%current, window, lo, hi, count, "rolling average window");

    let mut sum = Decimal::ZERO;
    for epoch in range {
        let value = indicator(Epoch::new(epoch))?;
        sum = sum
            .checked_add(value)
            .ok_or_else(|| BallastError::Overflow(format!("rolling sum at epoch {}", epoch)))?;
    }

    sum.checked_div(Decimal::from(count))
        .ok_or_else(|| BallastError::Overflow(format!("rolling average at epoch {}", current)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear(epoch: Epoch) -> Result<Decimal, BallastError> {
        Ok(Decimal::from(epoch.value()))
    }

    #[test]
    fn test_non_positive_window_is_zero() {
        for current in [0, 3, 500] {
            for window in [0, -1, i64::MIN] {
                let value = rolling_average(Epoch::new(current), window, linear).unwrap();
                assert_eq!(value, Decimal::ZERO);
            }
        }
    }

    #[test]
    fn test_non_positive_window_skips_indicator() {
        let mut calls = 0;
        rolling_average(Epoch::new(10), 0, |_| {
            calls += 1;
            Ok(Decimal::ONE)
        })
        .unwrap();
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_window_saturates_at_genesis() {
        let current = Epoch::new(3);
        let expected = Decimal::new(15, 1);
        for window in [4, 5, 6, 1_000, i64::MAX] {
            assert_eq!(rolling_average(current, window, linear).unwrap(), expected);
        }
    }

    #[test]
    fn test_single_epoch_window_is_identity() {
        assert_eq!(rolling_average(Epoch::new(3), 1, linear).unwrap(), Decimal::from(3));
        assert_eq!(rolling_average(Epoch::new(0), 1, linear).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_full_window() {
        // mean of 201..=500
        let value = rolling_average(Epoch::new(500), 300, linear).unwrap();
        assert_eq!(value, Decimal::new(3505, 1));
    }

    #[test]
    fn test_epoch_range_bounds() {
        assert_eq!(epoch_range(Epoch::new(500), 300), Some(201..=500));
        assert_eq!(epoch_range(Epoch::new(3), 6), Some(0..=3));
        assert_eq!(epoch_range(Epoch::new(u64::MAX), 2), Some(u64::MAX - 1..=u64::MAX));
        assert_eq!(epoch_range(Epoch::new(7), 0), None);
    }

    #[test]
    fn test_indicator_called_once_per_epoch() {
        let mut seen = Vec::new();
        rolling_average(Epoch::new(5), 3, |epoch| {
            seen.push(epoch.value());
            Ok(Decimal::ZERO)
        })
        .unwrap();
        assert_eq!(seen, vec![3, 4, 5]);
    }

    #[test]
    fn test_error_propagates() {
        let result = rolling_average(Epoch::new(5), 10, |epoch| {
            if epoch.value() == 2 {
                Err(BallastError::DivisionByZero("mining reward of epoch 2 is zero".to_string()))
            } else {
                Ok(Decimal::ONE)
            }
        });
        assert!(matches!(result, Err(BallastError::DivisionByZero(_))));
    }
}
