//! Year plan and yearly summary models.
//!
//! A [`YearPlan`] says how each of the twelve months should be calculated.
//! Evaluating it produces a [`YearlySummary`] with one optional result per
//! month and the field-wise totals.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{CalculationResult, Month};

/// A month paid at two hourly rates.
///
/// The first rate covers `from..=to`; the second covers the remaining days of
/// the month containing `from`. Any missing field means the month has no
/// result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SplitPeriod {
    /// First day paid at `hourly_rate`.
    #[serde(default)]
    pub from: Option<NaiveDate>,
    /// Last day paid at `hourly_rate` (inclusive).
    #[serde(default)]
    pub to: Option<NaiveDate>,
    /// Hourly rate for `from..=to`.
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    /// Hourly rate for the rest of the month.
    #[serde(default)]
    pub rest_month_rate: Option<f64>,
}

/// How one month is calculated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthPlan {
    /// A full month at one hourly rate. No rate means no result.
    Standard {
        /// The hourly rate for the month.
        hourly_rate: Option<f64>,
    },
    /// A month split between two hourly rates.
    Split(SplitPeriod),
}

impl Default for MonthPlan {
    fn default() -> Self {
        MonthPlan::Standard { hourly_rate: None }
    }
}

/// Plans for all twelve months of a year.
///
/// # Example
///
/// ```
/// use salary_engine::models::{Month, MonthPlan, YearPlan};
///
/// let mut plan = YearPlan::new();
/// plan.set(Month::May, MonthPlan::Standard { hourly_rate: Some(200.0) });
///
/// assert_eq!(plan.get(Month::May), &MonthPlan::Standard { hourly_rate: Some(200.0) });
/// assert_eq!(plan.get(Month::June), &MonthPlan::default());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YearPlan {
    months: [MonthPlan; 12],
}

impl YearPlan {
    /// Creates a plan where no month has a rate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a plan with the same hourly rate in every month.
    pub fn uniform(hourly_rate: f64) -> Self {
        Self {
            months: [MonthPlan::Standard {
                hourly_rate: Some(hourly_rate),
            }; 12],
        }
    }

    /// Replaces the plan for `month`.
    pub fn set(&mut self, month: Month, plan: MonthPlan) {
        self.months[month.index()] = plan;
    }

    /// Returns the plan for `month`.
    pub fn get(&self, month: Month) -> &MonthPlan {
        &self.months[month.index()]
    }

    /// Iterates over the months in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = (Month, &MonthPlan)> {
        Month::ALL.into_iter().zip(self.months.iter())
    }
}

/// The result for one month of a year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthResult {
    /// The month.
    pub month: Month,
    /// The Danish display name of the month.
    pub name: String,
    /// The breakdown, or `None` when the month had no usable input.
    pub result: Option<CalculationResult>,
}

/// Results for all twelve months plus their totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlySummary {
    /// One entry per month in calendar order.
    pub months: Vec<MonthResult>,
    /// Field-wise sum of every month that has a result.
    pub totals: CalculationResult,
}

impl YearlySummary {
    /// Returns the result for `month`, if it has one.
    pub fn result_for(&self, month: Month) -> Option<&CalculationResult> {
        self.months
            .iter()
            .find(|entry| entry.month == month)
            .and_then(|entry| entry.result.as_ref())
    }

    /// Returns how many months produced a result.
    pub fn months_with_result(&self) -> usize {
        self.months.iter().filter(|entry| entry.result.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_plan_has_no_rates() {
        let plan = YearPlan::new();
        assert_eq!(plan.iter().count(), 12);
        assert!(plan
            .iter()
            .all(|(_, p)| *p == MonthPlan::Standard { hourly_rate: None }));
    }

    #[test]
    fn test_iter_is_in_calendar_order() {
        let plan = YearPlan::uniform(100.0);
        let months: Vec<Month> = plan.iter().map(|(m, _)| m).collect();
        assert_eq!(months, Month::ALL.to_vec());
    }

    #[test]
    fn test_set_replaces_only_that_month() {
        let mut plan = YearPlan::uniform(100.0);
        let split = MonthPlan::Split(SplitPeriod::default());
        plan.set(Month::February, split);

        assert_eq!(plan.get(Month::February), &split);
        assert_eq!(
            plan.get(Month::March),
            &MonthPlan::Standard {
                hourly_rate: Some(100.0)
            }
        );
    }

    #[test]
    fn test_month_plan_deserializes_from_tagged_json() {
        let plan: MonthPlan =
            serde_json::from_str(r#"{"split":{"from":"2026-01-01","hourly_rate":200.0}}"#)
                .unwrap();
        match plan {
            MonthPlan::Split(split) => {
                assert_eq!(split.from, NaiveDate::from_ymd_opt(2026, 1, 1));
                assert_eq!(split.to, None);
                assert_eq!(split.hourly_rate, Some(200.0));
                assert_eq!(split.rest_month_rate, None);
            }
            other => panic!("expected split plan, got {:?}", other),
        }
    }

    #[test]
    fn test_summary_lookup() {
        let summary = YearlySummary {
            months: vec![
                MonthResult {
                    month: Month::January,
                    name: "Januar".to_string(),
                    result: Some(CalculationResult::default()),
                },
                MonthResult {
                    month: Month::February,
                    name: "Februar".to_string(),
                    result: None,
                },
            ],
            totals: CalculationResult::default(),
        };

        assert!(summary.result_for(Month::January).is_some());
        assert!(summary.result_for(Month::February).is_none());
        assert!(summary.result_for(Month::March).is_none());
        assert_eq!(summary.months_with_result(), 1);
    }
}
