//! HTTP request handlers for the Attendance Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_attendance_percentage, calculate_attendance_percentage_strict,
    calculate_working_day_breakdown, summarize_attendance,
};
use crate::error::EngineError;
use crate::models::{AttendanceRecord, CalendarRules};

use super::request::{
    AttendancePercentageRequest, AttendanceSummaryRequest, CalendarRequest, WorkingDaysRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, AttendancePercentageResponse, HealthResponse, WorkingDaysResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/working-days", post(working_days_handler))
        .route("/attendance-percentage", post(attendance_percentage_handler))
        .route("/attendance-summary", post(attendance_summary_handler))
        .with_state(state)
}

/// Serialises a body with an explicit JSON content type.
fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Converts an engine error into a JSON error response.
fn engine_error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request rejected"
    );
    ApiErrorResponse::from(err).into_response()
}

/// Converts a JSON extraction failure into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the problem
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

    ApiErrorResponse::bad_request(error).into_response()
}

/// Builds the calendar rules for a request from the loaded school calendar.
fn resolve_rules(
    state: &AppState,
    calendar: &CalendarRequest,
) -> Result<CalendarRules, EngineError> {
    calendar.resolve(state.calendar().rules())
}

/// Handler for GET /health.
async fn health_handler(State(state): State<AppState>) -> Response {
    json_response(
        StatusCode::OK,
        HealthResponse {
            status: "ok".to_string(),
            calendar: state.calendar().metadata().name.clone(),
            today: state.today(),
        },
    )
}

/// Handler for POST /working-days.
///
/// Counts working days in the requested range under the resolved calendar.
async fn working_days_handler(
    State(state): State<AppState>,
    payload: Result<Json<WorkingDaysRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing working days request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let rules = match resolve_rules(&state, &request.calendar) {
        Ok(rules) => rules,
        Err(err) => return engine_error_response(correlation_id, err),
    };

    let range = match request.range(state.today()) {
        Ok(range) => range,
        Err(err) => return engine_error_response(correlation_id, err),
    };

    let start_time = Instant::now();
    let breakdown = calculate_working_day_breakdown(&range, &rules, state.today());

    info!(
        correlation_id = %correlation_id,
        start_date = %range.start,
        end_date = %range.end,
        working_days = breakdown.working_days,
        clamped = breakdown.clamped,
        duration_us = start_time.elapsed().as_micros(),
        "Working days calculated"
    );

    json_response(
        StatusCode::OK,
        WorkingDaysResponse {
            working_days: breakdown.working_days,
            breakdown,
        },
    )
}

/// Handler for POST /attendance-percentage.
async fn attendance_percentage_handler(
    payload: Result<Json<AttendancePercentageRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance percentage request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let percentage = if request.strict {
        match calculate_attendance_percentage_strict(request.present_count, request.working_days) {
            Ok(percentage) => percentage,
            Err(err) => return engine_error_response(correlation_id, err),
        }
    } else {
        calculate_attendance_percentage(request.present_count, request.working_days)
    };

    info!(
        correlation_id = %correlation_id,
        present_count = request.present_count,
        working_days = request.working_days,
        percentage = %percentage,
        "Attendance percentage calculated"
    );

    json_response(StatusCode::OK, AttendancePercentageResponse { percentage })
}

/// Handler for POST /attendance-summary.
///
/// Summarises one student's records over the requested range.
async fn attendance_summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<AttendanceSummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance summary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let rules = match resolve_rules(&state, &request.calendar) {
        Ok(rules) => rules,
        Err(err) => return engine_error_response(correlation_id, err),
    };

    let range = match request.range(state.today()) {
        Ok(range) => range,
        Err(err) => return engine_error_response(correlation_id, err),
    };

    let start_time = Instant::now();
    let records: Vec<AttendanceRecord> = request.records.into_iter().map(Into::into).collect();
    let summary = summarize_attendance(
        &request.student_id,
        &records,
        &range,
        &rules,
        state.today(),
    );

    info!(
        correlation_id = %correlation_id,
        student_id = %summary.student_id,
        records_count = records.len(),
        present_days = summary.present_days,
        working_days = summary.working_days,
        percentage = %summary.percentage,
        duration_us = start_time.elapsed().as_micros(),
        "Attendance summary completed"
    );

    json_response(StatusCode::OK, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::CalendarLoader;
    use axum::body::Body;
    use axum::http::Request;
    use chrono::NaiveDate;
    use serde_json::Value;
    use tower::ServiceExt;

    fn test_router() -> Router {
        let calendar = CalendarLoader::load("./config/default").unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
        create_router(AppState::with_clock(calendar, FixedClock::new(today)))
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_calendar_and_today() {
        let response = test_router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["calendar"], "Greenfield Public School");
        assert_eq!(json["today"], "2026-10-15");
    }

    #[tokio::test]
    async fn test_missing_content_type_is_rejected() {
        let response = test_router()
            .oneshot(
                Request::post("/attendance-percentage")
                    .body(Body::from(r#"{"present_count":1,"working_days":2}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "MISSING_CONTENT_TYPE");
    }

    #[tokio::test]
    async fn test_engine_error_is_json_with_status() {
        let response = test_router()
            .oneshot(
                Request::post("/attendance-percentage")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"present_count":-1,"working_days":2,"strict":true}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }
}
