//! Partial-month calculation.
//!
//! Pro-rates the contracted monthly hours by the share of days worked and
//! runs the monthly pipeline on the resulting gross income.

use crate::models::{AuditTrace, CalculationResult};

use super::calculator::TaxCalculator;

impl TaxCalculator {
    /// Returns the contracted hours for `days` out of `total_days`.
    pub fn partial_hours(&self, days: f64, total_days: f64) -> f64 {
        (days / total_days) * self.config().monthly_hours
    }

    /// Calculates the breakdown for `days` out of a `total_days` month.
    ///
    /// Gross income is `days / total_days × monthly_hours × hourly_rate`.
    /// ATP and the personal allowance are applied in full; they are not
    /// pro-rated by the share of days. A `total_days` of zero yields
    /// non-finite fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use salary_engine::calculation::TaxCalculator;
    ///
    /// let calculator = TaxCalculator::default();
    /// let result = calculator.calculate_partial_month(200.0, 10.0, 31.0);
    ///
    /// assert_eq!(result.gross_income, 10425.07);
    /// assert_eq!(result.deductions.atp, 99.0);
    /// assert_eq!(result.tax_deduction, 4818.0);
    /// ```
    pub fn calculate_partial_month(
        &self,
        hourly_rate: f64,
        days: f64,
        total_days: f64,
    ) -> CalculationResult {
        let gross_income = self.partial_hours(days, total_days) * hourly_rate;
        self.calculate_monthly(gross_income, true)
    }

    /// Same as [`calculate_partial_month`](Self::calculate_partial_month),
    /// with the audit trace of the delegated monthly calculation.
    pub fn calculate_partial_month_with_audit(
        &self,
        hourly_rate: f64,
        days: f64,
        total_days: f64,
    ) -> (CalculationResult, AuditTrace) {
        let gross_income = self.partial_hours(days, total_days) * hourly_rate;
        self.calculate_monthly_with_audit(gross_income, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CalculatorConfig;

    fn default_calculator() -> TaxCalculator {
        TaxCalculator::new(CalculatorConfig::default())
    }

    #[test]
    fn test_ten_of_thirty_one_days() {
        let result = default_calculator().calculate_partial_month(200.0, 10.0, 31.0);

        assert_eq!(result.gross_income, 10425.07);
        assert_eq!(result.fake_gross_income, 10946.32);
        assert_eq!(result.deductions.pension, 437.85);
        assert_eq!(result.deductions.am_bidrag, 791.06);
        assert_eq!(result.taxable_income, 4279.16);
        assert_eq!(result.tax, 1583.29);
        assert_eq!(result.net_income, 7513.87);
    }

    #[test]
    fn test_fixed_amounts_are_not_pro_rated() {
        let result = default_calculator().calculate_partial_month(250.0, 21.0, 31.0);

        assert_eq!(result.deductions.atp, 99.0);
        assert_eq!(result.tax_deduction, 4818.0);
        assert_eq!(result.net_income, 16847.07);
    }

    #[test]
    fn test_full_period_equals_full_month() {
        let calculator = default_calculator();
        let monthly_hours = calculator.config().monthly_hours;

        for total_days in [28.0, 29.0, 30.0, 31.0] {
            assert_eq!(
                calculator.calculate_partial_month(200.0, total_days, total_days),
                calculator.calculate_monthly(200.0 * monthly_hours, true)
            );
        }
    }

    #[test]
    fn test_doubling_rate_does_not_double_net() {
        let calculator = default_calculator();
        let single = calculator.calculate_partial_month(200.0, 31.0, 31.0);
        let double = calculator.calculate_partial_month(400.0, 31.0, 31.0);

        assert_eq!(single.net_income, 19575.23);
        assert_eq!(double.net_income, 37380.10);
        assert!((double.net_income - 2.0 * single.net_income).abs() > 1.0);
    }

    #[test]
    fn test_zero_days_still_applies_fixed_deductions() {
        let result = default_calculator().calculate_partial_month(200.0, 0.0, 31.0);
        assert_eq!(result.gross_income, 81.20);
        assert_eq!(result.net_income, 1770.37);
    }

    #[test]
    fn test_zero_total_days_yields_non_finite_fields() {
        let result = default_calculator().calculate_partial_month(200.0, 10.0, 0.0);
        assert_eq!(result.gross_income, f64::INFINITY);
        assert!(!result.is_finite());

        let result = default_calculator().calculate_partial_month(200.0, 0.0, 0.0);
        assert!(result.gross_income.is_nan());
        assert!(result.net_income.is_nan());
    }

    #[test]
    fn test_partial_hours() {
        let calculator = default_calculator();
        assert_eq!(calculator.partial_hours(31.0, 31.0), 160.33);
        assert_eq!(calculator.partial_hours(0.0, 31.0), 0.0);
    }

    #[test]
    fn test_with_audit_matches_plain_result() {
        let calculator = default_calculator();
        let (result, trace) = calculator.calculate_partial_month_with_audit(200.0, 10.0, 31.0);
        assert_eq!(result, calculator.calculate_partial_month(200.0, 10.0, 31.0));
        assert_eq!(trace.steps.len(), 10);
    }
}
