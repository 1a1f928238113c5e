//! HTTP API module for the Attendance Engine.
//!
//! This module provides the REST API endpoints that dashboard pages call to
//! count working days and compute attendance figures.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AttendancePercentageRequest, AttendanceRecordRequest, AttendanceSummaryRequest,
    CalendarRequest, DateInput, MAX_RANGE_DAYS, WorkingDaysRequest, bounded_range,
};
pub use response::{
    ApiError, ApiErrorResponse, AttendancePercentageResponse, HealthResponse, WorkingDaysResponse,
};
pub use state::AppState;
