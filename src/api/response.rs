//! Response types for the salary engine API.
//!
//! This module defines the success envelopes and the error response
//! structures for the HTTP API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{AuditTrace, CalculationResult, MonthResult};

/// Response body for `/calculate/monthly` and `/calculate/partial`.
///
/// Serialize-only: non-finite amounts are written as `null`, which cannot be
/// read back into an `f64`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// Code of the profile the parameters came from.
    pub profile_code: String,
    /// The breakdown.
    pub result: CalculationResult,
    /// Every stage of the monthly pipeline.
    pub audit_trace: AuditTrace,
}

/// Response body for `/calculate/year`.
///
/// Serialize-only, like [`CalculationResponse`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// Code of the profile the parameters came from.
    pub profile_code: String,
    /// One entry per month in calendar order.
    pub months: Vec<MonthResult>,
    /// Field-wise sum of the months with a result.
    pub totals: CalculationResult,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidSetting { key, value } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Invalid server setting",
                    format!("Invalid value '{}' for setting {}", value, key),
                ),
            },
            EngineError::Server { addr, source } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "SERVER_ERROR",
                    "Server error",
                    format!("{}: {}", addr, source),
                ),
            },
            EngineError::UnknownMonth { name } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "UNKNOWN_MONTH",
                    format!("Unknown month: {}", name),
                    "Use an English or Danish month name, e.g. 'january' or 'Januar'",
                ),
            ),
            EngineError::DuplicateMonth { month } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "DUPLICATE_MONTH",
                    format!("Month '{}' appears more than once", month),
                    "Each month may be listed at most once in a year request",
                ),
            ),
        }
    }
}
