//! The tax calculator and the fixed rates of the monthly pipeline.

use crate::config::CalculatorConfig;
use crate::models::AuditWarning;

/// Uplift applied to gross income before the pension deduction.
pub const GROSS_UPLIFT: f64 = 1.05;

/// Pension rate applied by the pipeline.
pub const FIXED_PENSION_RATE: f64 = 0.04;

/// AM-contribution rate applied by the pipeline.
pub const FIXED_AM_RATE: f64 = 0.08;

/// Income tax rate applied by the pipeline.
pub const FIXED_TAX_RATE: f64 = 0.37;

/// Danish salary calculator for one tax-year profile.
///
/// The calculator only reads its configuration, so one instance can serve any
/// number of calculations. Construction never fails.
///
/// # Example
///
/// ```
/// use salary_engine::calculation::TaxCalculator;
/// use salary_engine::config::CalculatorConfig;
///
/// let calculator = TaxCalculator::new(CalculatorConfig::default());
/// let result = calculator.calculate_monthly(30000.0, true);
///
/// assert_eq!(result.gross_income, 30081.20);
/// assert_eq!(result.net_income, 18428.07);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TaxCalculator {
    config: CalculatorConfig,
}

impl TaxCalculator {
    /// Creates a calculator from a configuration.
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this calculator was built with.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Lists configured rates that the pipeline does not apply.
    ///
    /// The pipeline always uses [`FIXED_PENSION_RATE`], [`FIXED_AM_RATE`] and
    /// [`FIXED_TAX_RATE`]. A profile that configures different values gets
    /// one warning per rate.
    pub fn ignored_rate_warnings(&self) -> Vec<AuditWarning> {
        let configured = [
            ("pension_percentage", self.config.pension_percentage, FIXED_PENSION_RATE),
            ("am_bidrag", self.config.am_bidrag, FIXED_AM_RATE),
            ("tax_rate", self.config.tax_rate, FIXED_TAX_RATE),
        ];

        configured
            .into_iter()
            .filter(|(_, value, fixed)| value != fixed)
            .map(|(name, value, fixed)| AuditWarning {
                code: "CONFIGURED_RATE_IGNORED".to_string(),
                message: format!(
                    "Configured {} of {} is not applied; the calculation uses {}",
                    name, value, fixed
                ),
                severity: "medium".to_string(),
            })
            .collect()
    }
}
