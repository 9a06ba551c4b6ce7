//! Yearly aggregation.
//!
//! Evaluates a [`YearPlan`] month by month and sums the results that exist.
//! Each month is rounded on its own before summing, so totals can differ by a
//! few cents from a calculation on unrounded figures.

use tracing::debug;

use crate::models::{CalculationResult, MonthPlan, MonthResult, YearPlan, YearlySummary};

use super::calculator::TaxCalculator;
use super::split_month::{calculate_split_month, calculate_standard_month};

/// Calculates every month of a year plan and the yearly totals.
///
/// Months without usable input have no result and add nothing to the totals.
/// A plan with no usable month totals zero.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::{calculate_year, TaxCalculator};
/// use salary_engine::models::{Month, MonthPlan, YearPlan};
///
/// let mut plan = YearPlan::new();
/// plan.set(Month::January, MonthPlan::Standard { hourly_rate: Some(200.0) });
///
/// let summary = calculate_year(&TaxCalculator::default(), &plan);
/// assert_eq!(summary.months.len(), 12);
/// assert_eq!(summary.months_with_result(), 1);
/// assert_eq!(summary.totals.net_income, 19575.23);
/// ```
pub fn calculate_year(calculator: &TaxCalculator, plan: &YearPlan) -> YearlySummary {
    let months: Vec<MonthResult> = plan
        .iter()
        .map(|(month, month_plan)| {
            let result = match month_plan {
                MonthPlan::Standard { hourly_rate } => {
                    calculate_standard_month(calculator, *hourly_rate)
                }
                MonthPlan::Split(split) => calculate_split_month(calculator, split),
            };

            MonthResult {
                month,
                name: month.danish_name().to_string(),
                result,
            }
        })
        .collect();

    let totals: CalculationResult = months.iter().filter_map(|entry| entry.result.as_ref()).sum();

    let summary = YearlySummary { months, totals };
    debug!(
        months_with_result = summary.months_with_result(),
        net_income = summary.totals.net_income,
        "Calculated year"
    );
    summary
}
