//! Monetary rounding.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimals every reported amount is rounded to.
pub const MONEY_DECIMALS: u32 = 2;

/// Rounds an amount to two decimals, half away from zero.
///
/// The exact binary value is converted to a [`Decimal`] and rounded there,
/// so `81.205` (stored as `81.20499999...`) rounds down. `NaN`, infinities
/// and values outside the `Decimal` range are returned unchanged.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::round_money;
///
/// assert_eq!(round_money(3.4104), 3.41);
/// assert_eq!(round_money(0.375), 0.38);
/// assert_eq!(round_money(81.205), 81.20);
/// assert_eq!(round_money(-1.696832), -1.70);
/// assert!(round_money(f64::NAN).is_nan());
/// ```
pub fn round_money(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    Decimal::from_f64_retain(value)
        .or_else(|| Decimal::from_f64(value))
        .map(|amount| {
            amount.round_dp_with_strategy(MONEY_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
        })
        .and_then(|rounded| rounded.to_f64())
        .unwrap_or(value)
}
