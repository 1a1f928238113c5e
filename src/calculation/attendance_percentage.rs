//! Attendance percentage calculation.
//!
//! Turns a present-day count and a working-day count into the whole-number
//! percentage shown on dashboards.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// The highest percentage that can be reported.
pub const MAX_ATTENDANCE_PERCENTAGE: Decimal = Decimal::ONE_HUNDRED;

/// Computes the rounded, upper-clamped attendance percentage.
///
/// Returns zero when `working_days` is zero or negative. Otherwise computes
/// `present_count / working_days * 100`, rounds half up (toward positive
/// infinity) to a whole number and caps the result at 100.
///
/// There is no lower bound: a negative `present_count` yields a negative
/// value. Use [`calculate_attendance_percentage_strict`] to reject it.
///
/// The ratio is computed exactly, so a true half such as 29/200 (14.5) rounds
/// to 15. Dashboards that computed the ratio in binary floating point saw
/// 14.499999999999998 there and displayed 14.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::attendance_percentage_value;
/// use rust_decimal::Decimal;
///
/// assert_eq!(attendance_percentage_value(29, 200), Decimal::from(15)); // 14.5 rounds up
/// assert_eq!(attendance_percentage_value(120, 100), Decimal::from(100));
/// assert_eq!(attendance_percentage_value(5, 0), Decimal::ZERO);
/// ```
pub fn attendance_percentage_value(present_count: i64, working_days: i64) -> Decimal {
    if working_days <= 0 {
        return Decimal::ZERO;
    }

    let ratio = Decimal::from(present_count) * Decimal::ONE_HUNDRED / Decimal::from(working_days);
    let rounded = (ratio + Decimal::new(5, 1)).floor();

    rounded.min(MAX_ATTENDANCE_PERCENTAGE).normalize()
}

/// Formats the attendance percentage for display, e.g. `"87%"`.
///
/// This is the lenient default: it never fails. See
/// [`attendance_percentage_value`] for the arithmetic.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::calculate_attendance_percentage;
///
/// assert_eq!(calculate_attendance_percentage(87, 100), "87%");
/// assert_eq!(calculate_attendance_percentage(50, 50), "100%");
/// assert_eq!(calculate_attendance_percentage(120, 100), "100%");
/// assert_eq!(calculate_attendance_percentage(10, 0), "0%");
/// ```
pub fn calculate_attendance_percentage(present_count: i64, working_days: i64) -> String {
    format!(
        "{}%",
        attendance_percentage_value(present_count, working_days)
    )
}

/// Formats the attendance percentage after validating the counts.
///
/// For valid input the result is identical to
/// [`calculate_attendance_percentage`]. A present count above the working-day
/// count is still accepted and clamped to 100%.
///
/// # Errors
///
/// - [`EngineError::NegativePresentCount`] if `present_count` is negative
/// - [`EngineError::NegativeWorkingDays`] if `working_days` is negative
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::calculate_attendance_percentage_strict;
///
/// assert_eq!(calculate_attendance_percentage_strict(87, 100).unwrap(), "87%");
/// assert!(calculate_attendance_percentage_strict(-1, 100).is_err());
/// ```
pub fn calculate_attendance_percentage_strict(
    present_count: i64,
    working_days: i64,
) -> EngineResult<String> {
    if present_count < 0 {
        return Err(EngineError::NegativePresentCount {
            count: present_count,
        });
    }
    if working_days < 0 {
        return Err(EngineError::NegativeWorkingDays {
            count: working_days,
        });
    }

    Ok(calculate_attendance_percentage(present_count, working_days))
}
