//! Full-month salary calculation.
//!
//! Turns a gross monthly income into pension, ATP, AM-contribution, taxable
//! income, tax and net pay. No input is validated: negative amounts flow
//! through the arithmetic and non-finite amounts produce non-finite fields.

use std::time::Instant;

use crate::models::{AuditStep, AuditTrace, CalculationResult, Deductions};

use super::calculator::{
    FIXED_AM_RATE, FIXED_PENSION_RATE, FIXED_TAX_RATE, GROSS_UPLIFT, TaxCalculator,
};
use super::rounding::round_money;

/// Unrounded intermediate amounts of one monthly calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyPipeline {
    /// Gross income the caller passed in.
    pub input_gross: f64,
    /// Whether ATP and the personal allowance were subtracted.
    pub apply_full_deductions: bool,
    /// Gross income after the flat addend.
    pub gross_income: f64,
    /// Gross income with the 5% uplift.
    pub fake_gross_income: f64,
    /// Pension deduction.
    pub pension: f64,
    /// Gross income after pension.
    pub salary_after_pension: f64,
    /// ATP amount reported in the deductions.
    pub atp: f64,
    /// Signed ATP amount added to the AM basis (zero or negative).
    pub atp_contribution: f64,
    /// AM-contribution basis.
    pub am_basis: f64,
    /// AM-contribution.
    pub am_contribution: f64,
    /// A-income.
    pub a_income: f64,
    /// Personal allowance subtracted from A-income.
    pub tax_deduction: f64,
    /// Taxable income.
    pub taxable_income: f64,
    /// Income tax.
    pub income_tax: f64,
    /// Net payment.
    pub net_payment: f64,
}

impl MonthlyPipeline {
    /// Rounds the pipeline into the reported breakdown.
    pub fn to_result(&self) -> CalculationResult {
        let am = round_money(self.am_contribution);

        CalculationResult {
            gross_income: round_money(self.gross_income),
            fake_gross_income: round_money(self.fake_gross_income),
            deductions: Deductions {
                pension: round_money(self.pension),
                atp: self.atp,
                am_pension: am,
                am_bidrag: am,
            },
            taxable_income: round_money(self.taxable_income),
            tax_deduction: self.tax_deduction,
            tax: round_money(self.income_tax),
            net_income: round_money(self.net_payment),
        }
    }
}

impl TaxCalculator {
    /// Runs the monthly pipeline without rounding.
    pub fn monthly_pipeline(
        &self,
        gross_income: f64,
        apply_full_deductions: bool,
    ) -> MonthlyPipeline {
        let config = self.config();

        let gross = gross_income + config.additional;
        let fake_gross = gross * GROSS_UPLIFT;
        let pension = gross * GROSS_UPLIFT * FIXED_PENSION_RATE;
        let salary_after_pension = gross - pension;

        let atp = if apply_full_deductions { config.atp } else { 0.0 };
        let atp_contribution = if apply_full_deductions { -atp } else { 0.0 };
        let am_basis = salary_after_pension + atp_contribution;
        let am_contribution = am_basis * FIXED_AM_RATE;
        let a_income = am_basis - am_contribution;

        let tax_deduction = if apply_full_deductions {
            config.monthly_tax_deduction
        } else {
            0.0
        };
        let taxable_income = a_income - tax_deduction;
        let income_tax = taxable_income * FIXED_TAX_RATE;
        let net_payment = a_income - income_tax;

        MonthlyPipeline {
            input_gross: gross_income,
            apply_full_deductions,
            gross_income: gross,
            fake_gross_income: fake_gross,
            pension,
            salary_after_pension,
            atp,
            atp_contribution,
            am_basis,
            am_contribution,
            a_income,
            tax_deduction,
            taxable_income,
            income_tax,
            net_payment,
        }
    }

    /// Calculates the breakdown for one month.
    ///
    /// With `apply_full_deductions` set, the fixed ATP amount and the monthly
    /// personal allowance are subtracted; otherwise both are zero. Every
    /// amount in the result is rounded to two decimals.
    ///
    /// # Examples
    ///
    /// ```
    /// use salary_engine::calculation::TaxCalculator;
    ///
    /// let calculator = TaxCalculator::default();
    ///
    /// let full = calculator.calculate_monthly(30000.0, true);
    /// assert_eq!(full.deductions.atp, 99.0);
    /// assert_eq!(full.tax, 7993.22);
    ///
    /// let bare = calculator.calculate_monthly(30000.0, false);
    /// assert_eq!(bare.deductions.atp, 0.0);
    /// assert_eq!(bare.tax_deduction, 0.0);
    /// ```
    pub fn calculate_monthly(
        &self,
        gross_income: f64,
        apply_full_deductions: bool,
    ) -> CalculationResult {
        self.monthly_pipeline(gross_income, apply_full_deductions)
            .to_result()
    }

    /// Calculates the breakdown for one month and records each stage.
    pub fn calculate_monthly_with_audit(
        &self,
        gross_income: f64,
        apply_full_deductions: bool,
    ) -> (CalculationResult, AuditTrace) {
        let start_time = Instant::now();
        let pipeline = self.monthly_pipeline(gross_income, apply_full_deductions);
        let result = pipeline.to_result();

        let trace = AuditTrace {
            steps: self.audit_steps(&pipeline),
            warnings: self.ignored_rate_warnings(),
            duration_us: start_time.elapsed().as_micros() as u64,
        };

        (result, trace)
    }

    fn audit_steps(&self, p: &MonthlyPipeline) -> Vec<AuditStep> {
        let config = self.config();
        let mut steps = Vec::with_capacity(10);
        let mut push = |rule_id: &str,
                        rule_name: &str,
                        input: serde_json::Value,
                        output: serde_json::Value,
                        reasoning: String| {
            steps.push(AuditStep {
                step_number: steps.len() as u32 + 1,
                rule_id: rule_id.to_string(),
                rule_name: rule_name.to_string(),
                input,
                output,
                reasoning,
            });
        };

        push(
            "additional",
            "Flat Addend",
            serde_json::json!({ "gross_income": p.input_gross, "additional": config.additional }),
            serde_json::json!({ "gross_income": p.gross_income }),
            format!(
                "{:.2} + {:.2} = {:.2}",
                p.input_gross, config.additional, p.gross_income
            ),
        );
        push(
            "fake_gross",
            "Adjusted Gross Income",
            serde_json::json!({ "gross_income": p.gross_income, "uplift": GROSS_UPLIFT }),
            serde_json::json!({ "fake_gross_income": p.fake_gross_income }),
            format!(
                "{:.2} x {} = {:.2} (reported only)",
                p.gross_income, GROSS_UPLIFT, p.fake_gross_income
            ),
        );
        push(
            "pension",
            "Pension Deduction",
            serde_json::json!({
                "gross_income": p.gross_income,
                "uplift": GROSS_UPLIFT,
                "rate": FIXED_PENSION_RATE
            }),
            serde_json::json!({
                "pension": p.pension,
                "salary_after_pension": p.salary_after_pension
            }),
            format!(
                "{:.2} x {} x {} = {:.4}",
                p.gross_income, GROSS_UPLIFT, FIXED_PENSION_RATE, p.pension
            ),
        );
        push(
            "atp",
            "ATP Contribution",
            serde_json::json!({
                "atp": config.atp,
                "apply_full_deductions": p.apply_full_deductions
            }),
            serde_json::json!({ "atp_contribution": p.atp_contribution }),
            if p.apply_full_deductions {
                format!("ATP of {:.2} subtracted", config.atp)
            } else {
                "No ATP - full deductions not applied".to_string()
            },
        );
        push(
            "am_basis",
            "AM-contribution Basis",
            serde_json::json!({
                "salary_after_pension": p.salary_after_pension,
                "atp_contribution": p.atp_contribution
            }),
            serde_json::json!({ "am_basis": p.am_basis }),
            format!(
                "{:.4} + {:.2} = {:.4}",
                p.salary_after_pension, p.atp_contribution, p.am_basis
            ),
        );
        push(
            "am_contribution",
            "AM-contribution",
            serde_json::json!({ "am_basis": p.am_basis, "rate": FIXED_AM_RATE }),
            serde_json::json!({ "am_contribution": p.am_contribution }),
            format!(
                "{:.4} x {} = {:.4}",
                p.am_basis, FIXED_AM_RATE, p.am_contribution
            ),
        );
        push(
            "a_income",
            "A-income",
            serde_json::json!({ "am_basis": p.am_basis, "am_contribution": p.am_contribution }),
            serde_json::json!({ "a_income": p.a_income }),
            format!(
                "{:.4} - {:.4} = {:.4}",
                p.am_basis, p.am_contribution, p.a_income
            ),
        );
        push(
            "taxable_income",
            "Taxable Income",
            serde_json::json!({ "a_income": p.a_income, "tax_deduction": p.tax_deduction }),
            serde_json::json!({ "taxable_income": p.taxable_income }),
            format!(
                "{:.4} - {:.2} = {:.4}",
                p.a_income, p.tax_deduction, p.taxable_income
            ),
        );
        push(
            "income_tax",
            "Income Tax",
            serde_json::json!({ "taxable_income": p.taxable_income, "rate": FIXED_TAX_RATE }),
            serde_json::json!({ "tax": p.income_tax }),
            format!(
                "{:.4} x {} = {:.4}",
                p.taxable_income, FIXED_TAX_RATE, p.income_tax
            ),
        );
        push(
            "net_payment",
            "Net Payment",
            serde_json::json!({ "a_income": p.a_income, "tax": p.income_tax }),
            serde_json::json!({ "net_income": p.net_payment }),
            format!(
                "{:.4} - {:.4} = {:.4}",
                p.a_income, p.income_tax, p.net_payment
            ),
        );

        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CalculatorConfig;

    fn default_calculator() -> TaxCalculator {
        TaxCalculator::new(CalculatorConfig::default())
    }

    /// Every field of a calculator result has at most two decimals.
    fn assert_two_decimals(result: &CalculationResult) {
        for (name, value) in result.fields() {
            assert_eq!(
                (value * 100.0).round() / 100.0,
                value,
                "{} = {} has more than two decimals",
                name,
                value
            );
        }
    }

    #[test]
    fn test_30000_full_deductions() {
        let result = default_calculator().calculate_monthly(30000.0, true);

        assert_eq!(result.gross_income, 30081.20);
        assert_eq!(result.fake_gross_income, 31585.26);
        assert_eq!(result.deductions.pension, 1263.41);
        assert_eq!(result.deductions.atp, 99.0);
        assert_eq!(result.deductions.am_pension, 2297.50);
        assert_eq!(result.deductions.am_bidrag, 2297.50);
        assert_eq!(result.taxable_income, 21603.29);
        assert_eq!(result.tax_deduction, 4818.0);
        assert_eq!(result.tax, 7993.22);
        assert_eq!(result.net_income, 18428.07);
        assert_two_decimals(&result);
    }

    #[test]
    fn test_30000_without_full_deductions() {
        let result = default_calculator().calculate_monthly(30000.0, false);

        assert_eq!(result.gross_income, 30081.20);
        assert_eq!(result.deductions.pension, 1263.41);
        assert_eq!(result.deductions.atp, 0.0);
        assert_eq!(result.deductions.am_bidrag, 2305.42);
        assert_eq!(result.taxable_income, 26512.37);
        assert_eq!(result.tax_deduction, 0.0);
        assert_eq!(result.tax, 9809.58);
        assert_eq!(result.net_income, 16702.79);
    }

    #[test]
    fn test_zero_gross_still_applies_addend_and_deductions() {
        let result = default_calculator().calculate_monthly(0.0, true);

        assert_eq!(result.gross_income, 81.20);
        assert_eq!(result.fake_gross_income, 85.26);
        assert_eq!(result.deductions.pension, 3.41);
        assert_eq!(result.deductions.am_bidrag, -1.70);
        assert_eq!(result.taxable_income, -4837.51);
        assert_eq!(result.tax, -1789.88);
        // A-income of -19.51 minus a negative tax.
        assert_eq!(result.net_income, 1770.37);
    }

    #[test]
    fn test_pipeline_intermediate_values() {
        let pipeline = default_calculator().monthly_pipeline(0.0, true);

        assert!((pipeline.pension - 3.4104).abs() < 1e-9);
        assert!((pipeline.salary_after_pension - 77.7896).abs() < 1e-9);
        assert_eq!(pipeline.atp_contribution, -99.0);
        assert!((pipeline.am_basis - -21.2104).abs() < 1e-9);
        assert!((pipeline.a_income - -19.513568).abs() < 1e-9);
    }

    #[test]
    fn test_pipeline_carries_the_atp_it_applied() {
        let calculator = default_calculator();

        let full = calculator.monthly_pipeline(30000.0, true);
        assert_eq!(full.atp, 99.0);
        assert_eq!(full.to_result().deductions.atp, 99.0);

        let bare = calculator.monthly_pipeline(30000.0, false);
        assert_eq!(bare.atp, 0.0);
        assert_eq!(bare.atp_contribution, 0.0);
        assert_eq!(bare.to_result().deductions.atp, 0.0);
    }

    #[test]
    fn test_gross_just_below_a_cent_midpoint_rounds_down() {
        let calculator = default_calculator();

        // 0.005 + 81.20 is stored as 81.20499999...
        assert_eq!(calculator.calculate_monthly(0.005, true).gross_income, 81.20);
        assert_eq!(calculator.calculate_monthly(1000.005, true).gross_income, 1081.20);
    }

    #[test]
    fn test_configured_rates_do_not_change_the_result() {
        let altered = TaxCalculator::new(CalculatorConfig {
            pension_percentage: 0.10,
            am_bidrag: 0.20,
            tax_rate: 0.50,
            ..CalculatorConfig::default()
        });

        assert_eq!(
            altered.calculate_monthly(30000.0, true),
            default_calculator().calculate_monthly(30000.0, true)
        );
    }

    #[test]
    fn test_configured_atp_and_allowance_are_used() {
        let calculator = TaxCalculator::new(CalculatorConfig {
            atp: 0.0,
            monthly_tax_deduction: 0.0,
            additional: 0.0,
            ..CalculatorConfig::default()
        });

        let result = calculator.calculate_monthly(10000.0, true);
        assert_eq!(result.gross_income, 10000.0);
        assert_eq!(result.deductions.atp, 0.0);
        assert_eq!(result.tax_deduction, 0.0);
        // 10000 - 420 = 9580; AM 766.40; A-income 8813.60; tax 3261.032
        assert_eq!(result.deductions.pension, 420.0);
        assert_eq!(result.deductions.am_bidrag, 766.40);
        assert_eq!(result.taxable_income, 8813.60);
        assert_eq!(result.tax, 3261.03);
        assert_eq!(result.net_income, 5552.57);
    }

    #[test]
    fn test_negative_gross_propagates() {
        let result = default_calculator().calculate_monthly(-10000.0, true);
        assert!(result.gross_income < 0.0);
        assert!(result.net_income < 0.0);
        assert!(result.is_finite());
    }

    #[test]
    fn test_nan_gross_produces_nan_fields() {
        let result = default_calculator().calculate_monthly(f64::NAN, true);
        assert!(result.gross_income.is_nan());
        assert!(result.tax.is_nan());
        assert!(result.net_income.is_nan());
        // Fixed amounts do not depend on the gross income.
        assert_eq!(result.deductions.atp, 99.0);
        assert_eq!(result.tax_deduction, 4818.0);
    }

    #[test]
    fn test_infinite_gross_produces_non_finite_fields() {
        let result = default_calculator().calculate_monthly(f64::INFINITY, true);
        assert_eq!(result.gross_income, f64::INFINITY);
        assert!(!result.is_finite());
    }

    #[test]
    fn test_audit_trace_has_one_step_per_stage() {
        let (result, trace) = default_calculator().calculate_monthly_with_audit(30000.0, true);

        assert_eq!(result, default_calculator().calculate_monthly(30000.0, true));
        let rule_ids: Vec<&str> = trace.steps.iter().map(|s| s.rule_id.as_str()).collect();
        assert_eq!(
            rule_ids,
            vec![
                "additional",
                "fake_gross",
                "pension",
                "atp",
                "am_basis",
                "am_contribution",
                "a_income",
                "taxable_income",
                "income_tax",
                "net_payment",
            ]
        );
        let numbers: Vec<u32> = trace.steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, (1..=10).collect::<Vec<u32>>());
        assert!(trace.warnings.is_empty());
    }

    #[test]
    fn test_audit_step_records_inputs_and_reasoning() {
        let (_, trace) = default_calculator().calculate_monthly_with_audit(30000.0, true);

        let first = &trace.steps[0];
        assert_eq!(first.input["gross_income"].as_f64().unwrap(), 30000.0);
        assert_eq!(first.input["additional"].as_f64().unwrap(), 81.2);
        assert_eq!(first.reasoning, "30000.00 + 81.20 = 30081.20");

        let atp = &trace.steps[3];
        assert_eq!(atp.output["atp_contribution"].as_f64().unwrap(), -99.0);
        assert!(atp.reasoning.contains("99.00"));
    }

    #[test]
    fn test_audit_without_full_deductions_explains_missing_atp() {
        let (_, trace) = default_calculator().calculate_monthly_with_audit(30000.0, false);
        assert!(trace.steps[3].reasoning.contains("No ATP"));
        assert_eq!(
            trace.steps[7].input["tax_deduction"].as_f64().unwrap(),
            0.0
        );
    }

    #[test]
    fn test_audit_warns_about_ignored_rates() {
        let calculator = TaxCalculator::new(CalculatorConfig {
            am_bidrag: 0.09,
            ..CalculatorConfig::default()
        });
        let (_, trace) = calculator.calculate_monthly_with_audit(30000.0, true);
        assert_eq!(trace.warnings.len(), 1);
        assert!(trace.warnings[0].message.contains("am_bidrag"));
    }
}
