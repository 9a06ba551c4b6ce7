//! Calculation result models for the salary engine.
//!
//! This module contains the [`CalculationResult`] breakdown produced for one
//! period, the nested [`Deductions`], and the audit types that record how a
//! breakdown was reached.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Deductions taken from the gross income of one period.
///
/// `am_pension` and `am_bidrag` always hold the same AM-contribution amount.
/// Both are kept because callers display them as separate lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deductions {
    /// Employee pension deduction.
    pub pension: f64,
    /// ATP contribution (positive amount, zero without full deductions).
    pub atp: f64,
    /// AM-contribution, pension line.
    pub am_pension: f64,
    /// AM-contribution.
    pub am_bidrag: f64,
}

impl Add for Deductions {
    type Output = Deductions;

    fn add(self, rhs: Deductions) -> Deductions {
        Deductions {
            pension: self.pension + rhs.pension,
            atp: self.atp + rhs.atp,
            am_pension: self.am_pension + rhs.am_pension,
            am_bidrag: self.am_bidrag + rhs.am_bidrag,
        }
    }
}

impl AddAssign for Deductions {
    fn add_assign(&mut self, rhs: Deductions) {
        *self = *self + rhs;
    }
}

/// Salary and tax breakdown for one period.
///
/// A result produced by the calculator has every field rounded to two
/// decimals. Results can be added field by field, which is how split months
/// and yearly totals are built; sums are not re-rounded.
///
/// Non-finite fields serialize as JSON `null`.
///
/// # Example
///
/// ```
/// use salary_engine::models::{CalculationResult, Deductions};
///
/// let month = CalculationResult {
///     gross_income: 100.0,
///     deductions: Deductions { atp: 99.0, ..Deductions::default() },
///     ..CalculationResult::default()
/// };
///
/// let total: CalculationResult = vec![month, month].into_iter().sum();
/// assert_eq!(total.gross_income, 200.0);
/// assert_eq!(total.deductions.atp, 198.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// Gross income including the flat addend.
    pub gross_income: f64,
    /// Gross income increased by 5%. Informational only.
    pub fake_gross_income: f64,
    /// Deductions taken before tax.
    pub deductions: Deductions,
    /// Income the flat tax rate is applied to.
    pub taxable_income: f64,
    /// Personal allowance subtracted before tax.
    pub tax_deduction: f64,
    /// Income tax (A-skat).
    pub tax: f64,
    /// Amount paid out.
    pub net_income: f64,
}

impl CalculationResult {
    /// Returns every numeric field with its serialized name.
    pub fn fields(&self) -> [(&'static str, f64); 10] {
        [
            ("grossIncome", self.gross_income),
            ("fakeGrossIncome", self.fake_gross_income),
            ("deductions.pension", self.deductions.pension),
            ("deductions.atp", self.deductions.atp),
            ("deductions.amPension", self.deductions.am_pension),
            ("deductions.amBidrag", self.deductions.am_bidrag),
            ("taxableIncome", self.taxable_income),
            ("taxDeduction", self.tax_deduction),
            ("tax", self.tax),
            ("netIncome", self.net_income),
        ]
    }

    /// Returns `true` when no field is `NaN` or infinite.
    pub fn is_finite(&self) -> bool {
        self.fields().iter().all(|(_, value)| value.is_finite())
    }
}

impl Add for CalculationResult {
    type Output = CalculationResult;

    fn add(self, rhs: CalculationResult) -> CalculationResult {
        CalculationResult {
            gross_income: self.gross_income + rhs.gross_income,
            fake_gross_income: self.fake_gross_income + rhs.fake_gross_income,
            deductions: self.deductions + rhs.deductions,
            taxable_income: self.taxable_income + rhs.taxable_income,
            tax_deduction: self.tax_deduction + rhs.tax_deduction,
            tax: self.tax + rhs.tax,
            net_income: self.net_income + rhs.net_income,
        }
    }
}

impl AddAssign for CalculationResult {
    fn add_assign(&mut self, rhs: CalculationResult) {
        *self = *self + rhs;
    }
}

impl Sum for CalculationResult {
    fn sum<I: Iterator<Item = CalculationResult>>(iter: I) -> Self {
        iter.fold(CalculationResult::default(), Add::add)
    }
}

impl<'a> Sum<&'a CalculationResult> for CalculationResult {
    fn sum<I: Iterator<Item = &'a CalculationResult>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// A single step in the audit trace recording a calculation stage.
///
/// Each step captures the input, output, and reasoning for one stage of the
/// monthly pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the stage.
    pub rule_id: String,
    /// The human-readable name of the stage.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the arithmetic.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings never change the result; they point out inputs or parameters
/// that the caller may want to look at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use salary_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 12,
/// };
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}
