//! Core data models for the salary engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod month;
mod year_plan;

pub use calculation_result::{AuditStep, AuditTrace, AuditWarning, CalculationResult, Deductions};
pub use month::Month;
pub use year_plan::{MonthPlan, MonthResult, SplitPeriod, YearPlan, YearlySummary};
