//! Request types for the salary engine API.
//!
//! This module defines the JSON request structures for the `/calculate/*`
//! endpoints.

use serde::{Deserialize, Serialize};

use crate::config::CalculatorConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{Month, MonthPlan, SplitPeriod, YearPlan};

/// Optional overrides for the loaded profile's parameters.
///
/// Fields left out keep the profile's value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterOverrides {
    /// Standard contracted hours per month.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_hours: Option<f64>,
    /// Employee pension deduction rate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pension_percentage: Option<f64>,
    /// Fixed monthly ATP contribution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atp: Option<f64>,
    /// AM-contribution rate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub am_bidrag: Option<f64>,
    /// Flat income tax rate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<f64>,
    /// Personal tax-free allowance per month.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_tax_deduction: Option<f64>,
    /// Flat addend applied to every gross income.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional: Option<f64>,
}

impl ParameterOverrides {
    /// Returns `base` with every present override applied.
    pub fn apply_to(&self, base: &CalculatorConfig) -> CalculatorConfig {
        CalculatorConfig {
            monthly_hours: self.monthly_hours.unwrap_or(base.monthly_hours),
            pension_percentage: self.pension_percentage.unwrap_or(base.pension_percentage),
            atp: self.atp.unwrap_or(base.atp),
            am_bidrag: self.am_bidrag.unwrap_or(base.am_bidrag),
            tax_rate: self.tax_rate.unwrap_or(base.tax_rate),
            monthly_tax_deduction: self
                .monthly_tax_deduction
                .unwrap_or(base.monthly_tax_deduction),
            additional: self.additional.unwrap_or(base.additional),
        }
    }
}

fn default_apply_full_deductions() -> bool {
    true
}

/// Request body for the `/calculate/monthly` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyRequest {
    /// Gross monthly income before the flat addend.
    pub gross_income: f64,
    /// Whether ATP and the personal allowance are subtracted.
    #[serde(default = "default_apply_full_deductions")]
    pub apply_full_deductions: bool,
    /// Overrides for the profile parameters.
    #[serde(default)]
    pub parameters: Option<ParameterOverrides>,
}

/// Request body for the `/calculate/partial` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartialMonthRequest {
    /// Hourly rate for the days worked.
    pub hourly_rate: f64,
    /// Days worked.
    pub days: f64,
    /// Days in the month.
    pub total_days: f64,
    /// Overrides for the profile parameters.
    #[serde(default)]
    pub parameters: Option<ParameterOverrides>,
}

/// One month in a `/calculate/year` request.
///
/// A month with `split` is calculated as a split month; otherwise as a
/// standard month at `hourly_rate`. Month names may be English or Danish.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthEntryRequest {
    /// Month name, e.g. "january" or "Januar".
    pub month: String,
    /// Hourly rate for a standard month.
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    /// Split-month settings.
    #[serde(default)]
    pub split: Option<SplitPeriod>,
}

/// Request body for the `/calculate/year` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearRequest {
    /// Months to calculate. Months not listed have no result.
    pub months: Vec<MonthEntryRequest>,
    /// Overrides for the profile parameters.
    #[serde(default)]
    pub parameters: Option<ParameterOverrides>,
}

impl YearRequest {
    /// Builds the year plan, rejecting unknown and repeated months.
    pub fn to_plan(&self) -> EngineResult<YearPlan> {
        let mut plan = YearPlan::new();
        let mut seen = [false; 12];

        for entry in &self.months {
            let month: Month = entry.month.parse()?;
            if seen[month.index()] {
                return Err(EngineError::DuplicateMonth { month });
            }
            seen[month.index()] = true;

            let month_plan = match entry.split {
                Some(split) => MonthPlan::Split(split),
                None => MonthPlan::Standard {
                    hourly_rate: entry.hourly_rate,
                },
            };
            plan.set(month, month_plan);
        }

        Ok(plan)
    }
}
