//! Response types for the Attendance Engine API.
//!
//! This module defines the success bodies, the error response structure and
//! the mapping from [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::WorkingDayBreakdown;

/// Response body for the `/working-days` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingDaysResponse {
    /// Number of working days in the evaluated range.
    pub working_days: u32,
    /// How each day in the range was classified.
    pub breakdown: WorkingDayBreakdown,
}

/// Response body for the `/attendance-percentage` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendancePercentageResponse {
    /// The display percentage, e.g. `"87%"`.
    pub percentage: String,
}

/// Response body for the `/health` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the service answers.
    pub status: String,
    /// Name of the loaded school calendar.
    pub calendar: String,
    /// The date the service uses as today.
    pub today: NaiveDate,
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
    /// Creates a 400 response for the given error body.
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
            EngineError::InvalidDate { field, value } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_DATE",
                    format!("Invalid date '{}' in {}", value, field),
                    "Dates must be written as YYYY-MM-DD",
                ),
            ),
            err @ EngineError::NegativePresentCount { .. } => {
                ApiErrorResponse::bad_request(ApiError::validation_error(err.to_string()))
            }
            err @ EngineError::NegativeWorkingDays { .. } => {
                ApiErrorResponse::bad_request(ApiError::validation_error(err.to_string()))
            }
            err @ EngineError::RangeTooLong { .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "RANGE_TOO_LONG",
                    err.to_string(),
                    "Split the request into shorter ranges",
                ),
            ),
        }
    }
}
