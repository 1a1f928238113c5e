//! Error types for the Attendance Engine.
//!
//! The calculator itself never fails. Errors only arise at the edges: loading
//! a school calendar from disk, and strict-mode validation of caller input.

use thiserror::Error;

/// The main error type for the Attendance Engine.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/calendar.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/calendar.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A date was not in canonical `YYYY-MM-DD` form.
    #[error("Invalid date '{value}' in {field}: expected YYYY-MM-DD")]
    InvalidDate {
        /// The field or set the value came from.
        field: String,
        /// The offending value.
        value: String,
    },

    /// A present-day count was negative.
    #[error("Present count cannot be negative: {count}")]
    NegativePresentCount {
        /// The supplied count.
        count: i64,
    },

    /// A working-day count was negative.
    #[error("Working day count cannot be negative: {count}")]
    NegativeWorkingDays {
        /// The supplied count.
        count: i64,
    },

    /// A requested range covers more days than the API evaluates.
    #[error("Date range spans {days} days; at most {max} are allowed")]
    RangeTooLong {
        /// Days from the range start to its effective end.
        days: i64,
        /// The configured maximum.
        max: i64,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
