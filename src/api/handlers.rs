//! HTTP request handlers for the salary engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_year;
use crate::models::{AuditTrace, CalculationResult};

use super::request::{MonthlyRequest, PartialMonthRequest, YearRequest};
use super::response::{ApiError, ApiErrorResponse, CalculationResponse, YearResponse};
use super::state::AppState;

/// Version reported in every calculation response.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate/monthly", post(monthly_handler))
        .route("/calculate/partial", post(partial_handler))
        .route("/calculate/year", post(year_handler))
        .route("/profile", get(profile_handler))
        .with_state(state)
}

/// Handler for POST /calculate/monthly.
async fn monthly_handler(
    State(state): State<AppState>,
    payload: Result<Json<MonthlyRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing monthly calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let calculator = state.calculator(request.parameters.as_ref());
    let (result, audit_trace) =
        calculator.calculate_monthly_with_audit(request.gross_income, request.apply_full_deductions);

    info!(
        correlation_id = %correlation_id,
        gross_income = request.gross_income,
        apply_full_deductions = request.apply_full_deductions,
        net_income = result.net_income,
        duration_us = audit_trace.duration_us,
        "Monthly calculation completed"
    );

    calculation_response(&state, correlation_id, result, audit_trace)
}

/// Handler for POST /calculate/partial.
async fn partial_handler(
    State(state): State<AppState>,
    payload: Result<Json<PartialMonthRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing partial-month calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let calculator = state.calculator(request.parameters.as_ref());
    let (result, audit_trace) = calculator.calculate_partial_month_with_audit(
        request.hourly_rate,
        request.days,
        request.total_days,
    );

    info!(
        correlation_id = %correlation_id,
        hourly_rate = request.hourly_rate,
        days = request.days,
        total_days = request.total_days,
        net_income = result.net_income,
        duration_us = audit_trace.duration_us,
        "Partial-month calculation completed"
    );

    calculation_response(&state, correlation_id, result, audit_trace)
}

/// Handler for POST /calculate/year.
async fn year_handler(
    State(state): State<AppState>,
    payload: Result<Json<YearRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing year calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let plan = match request.to_plan() {
        Ok(plan) => plan,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid year plan");
            let api_error: ApiErrorResponse = err.into();
            return json_response(api_error.status, &api_error.error);
        }
    };

    let calculator = state.calculator(request.parameters.as_ref());
    let summary = calculate_year(&calculator, &plan);

    let non_finite = summary
        .months
        .iter()
        .filter_map(|entry| entry.result.as_ref().map(|result| (entry.month, result)))
        .filter(|(_, result)| !result.is_finite())
        .map(|(month, _)| month.to_string())
        .collect::<Vec<_>>();
    if !non_finite.is_empty() {
        warn!(
            correlation_id = %correlation_id,
            months = ?non_finite,
            "Year calculation produced non-finite values"
        );
    }

    info!(
        correlation_id = %correlation_id,
        months_with_result = summary.months_with_result(),
        net_income = summary.totals.net_income,
        "Year calculation completed"
    );

    let response = YearResponse {
        calculation_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        profile_code: state.config().metadata().code.clone(),
        months: summary.months,
        totals: summary.totals,
    };
    json_response(StatusCode::OK, &response)
}

/// Handler for GET /profile.
async fn profile_handler(State(state): State<AppState>) -> Response {
    json_response(StatusCode::OK, state.config().profile())
}

fn calculation_response(
    state: &AppState,
    correlation_id: Uuid,
    result: CalculationResult,
    audit_trace: AuditTrace,
) -> Response {
    if !result.is_finite() {
        warn!(
            correlation_id = %correlation_id,
            "Calculation produced non-finite values"
        );
    }

    let response = CalculationResponse {
        calculation_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        profile_code: state.config().metadata().code.clone(),
        result,
        audit_trace,
    };
    json_response(StatusCode::OK, &response)
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Turns a JSON extraction failure into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    json_response(StatusCode::BAD_REQUEST, &error)
}
