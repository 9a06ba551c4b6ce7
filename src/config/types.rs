//! Configuration types for salary calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML tax profile.

use serde::{Deserialize, Serialize};

/// Parameters for one tax-year profile.
///
/// Every field is optional when deserialized; omitted fields take the
/// values from [`CalculatorConfig::default`].
///
/// `pension_percentage`, `am_bidrag` and `tax_rate` are carried for display
/// and auditing only. The monthly pipeline applies fixed rates of 4%, 8% and
/// 37% regardless of what is configured here.
///
/// # Example
///
/// ```
/// use salary_engine::config::CalculatorConfig;
///
/// let config = CalculatorConfig {
///     atp: 0.0,
///     ..CalculatorConfig::default()
/// };
/// assert_eq!(config.monthly_hours, 160.33);
/// assert_eq!(config.atp, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Standard contracted hours per month.
    pub monthly_hours: f64,
    /// Employee pension deduction rate.
    pub pension_percentage: f64,
    /// Fixed monthly ATP contribution.
    pub atp: f64,
    /// AM-contribution rate.
    pub am_bidrag: f64,
    /// Flat income tax rate.
    pub tax_rate: f64,
    /// Personal tax-free allowance per month.
    pub monthly_tax_deduction: f64,
    /// Flat addend applied to every gross income before calculation.
    pub additional: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            monthly_hours: 160.33,
            pension_percentage: 0.04,
            atp: 99.0,
            am_bidrag: 0.08,
            tax_rate: 0.37,
            monthly_tax_deduction: 4818.0,
            additional: 81.20,
        }
    }
}

/// Metadata about a tax profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileMetadata {
    /// Short identifier of the profile (e.g., "dk_standard").
    pub code: String,
    /// The human-readable name of the profile.
    pub name: String,
    /// The tax year the parameters were taken from.
    pub tax_year: i32,
    /// Free-form notes about the profile.
    #[serde(default)]
    pub description: String,
}

/// A complete tax profile as stored in `profile.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxProfile {
    /// Profile metadata.
    pub profile: ProfileMetadata,
    /// Calculation parameters.
    #[serde(default)]
    pub parameters: CalculatorConfig,
}
