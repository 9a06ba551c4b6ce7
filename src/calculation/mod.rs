//! Calculation logic for the salary engine.
//!
//! This module contains the [`TaxCalculator`] with its full-month and
//! partial-month calculations, money rounding, split-month composition and
//! yearly aggregation.

mod calculator;
mod monthly;
mod partial_month;
mod rounding;
mod split_month;
mod yearly;

pub use calculator::{
    FIXED_AM_RATE, FIXED_PENSION_RATE, FIXED_TAX_RATE, GROSS_UPLIFT, TaxCalculator,
};
pub use monthly::MonthlyPipeline;
pub use rounding::{MONEY_DECIMALS, round_money};
pub use split_month::{
    calculate_split_month, calculate_standard_month, days_in_month, inclusive_days,
};
pub use yearly::calculate_year;
