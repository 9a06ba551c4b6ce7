//! HTTP API module for the salary engine.
//!
//! This module provides the REST API endpoints for monthly, partial-month
//! and yearly salary calculations.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{ENGINE_VERSION, create_router};
pub use request::{
    MonthEntryRequest, MonthlyRequest, ParameterOverrides, PartialMonthRequest, YearRequest,
};
pub use response::{ApiError, ApiErrorResponse, CalculationResponse, YearResponse};
pub use state::AppState;
