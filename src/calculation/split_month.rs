//! Split-month composition.
//!
//! A split month is paid at one hourly rate for an inclusive date range and
//! at a second rate for the remaining days of the month. Each part is
//! calculated as a partial month and the two breakdowns are added field by
//! field.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::models::{CalculationResult, SplitPeriod};

use super::calculator::TaxCalculator;

/// Returns the number of days in the month containing `date`.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::days_in_month;
/// use chrono::NaiveDate;
///
/// assert_eq!(days_in_month(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()), 29);
/// assert_eq!(days_in_month(NaiveDate::from_ymd_opt(2026, 4, 1).unwrap()), 30);
/// ```
pub fn days_in_month(date: NaiveDate) -> u32 {
    u32::from(date.num_days_in_month())
}

/// Returns the number of days from `from` to `to`, both included.
///
/// The count is negative when `to` precedes `from`.
pub fn inclusive_days(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days() + 1
}

/// Calculates a split month.
///
/// Returns `None` when the period is missing a date or a rate. The month
/// length is taken from the month containing `from`; the first part covers
/// `from..=to` and the second part the remaining days. Inverted or oversized
/// ranges are not rejected and produce a negative day count for one part.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::{calculate_split_month, TaxCalculator};
/// use salary_engine::models::SplitPeriod;
/// use chrono::NaiveDate;
///
/// let split = SplitPeriod {
///     from: NaiveDate::from_ymd_opt(2026, 1, 1),
///     to: NaiveDate::from_ymd_opt(2026, 1, 10),
///     hourly_rate: Some(200.0),
///     rest_month_rate: Some(250.0),
/// };
///
/// let result = calculate_split_month(&TaxCalculator::default(), &split).unwrap();
/// assert_eq!(result.deductions.atp, 198.0);
/// assert_eq!(result.tax_deduction, 9636.0);
/// ```
pub fn calculate_split_month(
    calculator: &TaxCalculator,
    split: &SplitPeriod,
) -> Option<CalculationResult> {
    let (from, to, hourly_rate, rest_month_rate) =
        match (split.from, split.to, split.hourly_rate, split.rest_month_rate) {
            (Some(from), Some(to), Some(hourly_rate), Some(rest_month_rate)) => {
                (from, to, hourly_rate, rest_month_rate)
            }
            _ => return None,
        };

    let total_days = days_in_month(from);
    let first_days = inclusive_days(from, to);
    let rest_days = i64::from(total_days) - first_days;

    debug!(
        from = %from,
        to = %to,
        first_days,
        rest_days,
        total_days,
        "Composing split month"
    );

    let first =
        calculator.calculate_partial_month(hourly_rate, first_days as f64, f64::from(total_days));
    let rest =
        calculator.calculate_partial_month(rest_month_rate, rest_days as f64, f64::from(total_days));

    Some(first + rest)
}

/// Calculates a standard month at one hourly rate.
///
/// Returns `None` without a rate; otherwise the full contracted hours are
/// paid at `hourly_rate` with full deductions.
pub fn calculate_standard_month(
    calculator: &TaxCalculator,
    hourly_rate: Option<f64>,
) -> Option<CalculationResult> {
    hourly_rate.map(|rate| calculator.calculate_monthly(rate * calculator.config().monthly_hours, true))
}
