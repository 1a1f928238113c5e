//! Working-day counting over a date range.
//!
//! This module counts the working days between two dates given the calendar
//! rules and today's date. Days after today are never counted: attendance
//! cannot be taken for days that have not happened yet.

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{CalendarRules, DateRange, WorkingDayBreakdown};

use super::{DayClassification, classify_day};

/// Counts the working days in a range.
///
/// # Arguments
///
/// * `range` - The inclusive range to evaluate
/// * `rules` - Holidays, announcement holidays, special working days and the
///   weekend policy
/// * `today` - The reference date; any part of the range after it is ignored
///
/// # Behavior
///
/// - A range whose start is after its end yields 0
/// - An end after `today` is clamped to `today`; if that empties the range the
///   result is 0
/// - Every remaining day is classified with [`classify_day`] and working days
///   are counted
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::calculate_working_days;
/// use attendance_engine::models::{CalendarRules, DateRange};
/// use chrono::NaiveDate;
///
/// let date = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
///
/// let rules = CalendarRules::new()
///     .with_holiday(date("2025-12-25"))
///     .with_special_date(date("2025-12-28")); // a Sunday
///
/// let december = DateRange::new(date("2025-12-01"), date("2025-12-31"));
///
/// // 31 days - 8 weekend days - 1 holiday + 1 special working day
/// assert_eq!(calculate_working_days(&december, &rules, date("2026-10-15")), 23);
/// ```
pub fn calculate_working_days(range: &DateRange, rules: &CalendarRules, today: NaiveDate) -> u32 {
    calculate_working_day_breakdown(range, rules, today).working_days
}

/// Counts the working days in a range and reports how each day was classified.
///
/// Uses the same evaluation as [`calculate_working_days`], whose result always
/// equals the `working_days` field returned here.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::calculate_working_day_breakdown;
/// use attendance_engine::models::{CalendarRules, DateRange};
/// use chrono::NaiveDate;
///
/// let date = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
/// let october = DateRange::new(date("2026-10-01"), date("2026-10-31"));
///
/// let rules = CalendarRules::new();
/// let breakdown = calculate_working_day_breakdown(&october, &rules, date("2026-10-15"));
/// assert!(breakdown.clamped);
/// assert_eq!(breakdown.effective_end_date, date("2026-10-15"));
/// assert_eq!(breakdown.total_days, 15);
/// assert_eq!(breakdown.working_days, 11);
/// assert_eq!(breakdown.weekend_days, 4);
/// ```
pub fn calculate_working_day_breakdown(
    range: &DateRange,
    rules: &CalendarRules,
    today: NaiveDate,
) -> WorkingDayBreakdown {
    if range.is_empty() {
        return WorkingDayBreakdown::empty(range.start, range.end, range.end, false);
    }

    let effective = range.clamp_to(today);
    let clamped = effective.end != range.end;
    if clamped {
        debug!(
            requested_end = %range.end,
            effective_end = %effective.end,
            "Clamped range end to today"
        );
    }

    let mut breakdown = WorkingDayBreakdown::empty(range.start, range.end, effective.end, clamped);

    for day in effective.days() {
        breakdown.total_days += 1;
        match classify_day(day, rules) {
            DayClassification::SpecialWorkingDay => {
                breakdown.working_days += 1;
                breakdown.special_working_days += 1;
            }
            DayClassification::Working => breakdown.working_days += 1,
            DayClassification::Holiday => breakdown.holiday_days += 1,
            DayClassification::AnnouncementHoliday => breakdown.announcement_holiday_days += 1,
            DayClassification::Weekend => breakdown.weekend_days += 1,
        }
    }

    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn range(start: &str, end: &str) -> DateRange {
        DateRange::new(make_date(start), make_date(end))
    }

    fn today() -> NaiveDate {
        make_date("2026-10-15")
    }

    // ==========================================================================
    // Empty and clamped ranges
    // ==========================================================================
    #[test]
    fn test_start_after_end_is_zero() {
        let rules = CalendarRules::new();
        assert_eq!(
            calculate_working_days(&range("2026-01-18", "2026-01-12"), &rules, today()),
            0
        );
    }

    #[test]
    fn test_reversed_range_reports_no_clamp() {
        let breakdown = calculate_working_day_breakdown(
            &range("2026-12-18", "2026-12-12"),
            &CalendarRules::new(),
            today(),
        );
        assert!(!breakdown.clamped);
        assert_eq!(breakdown.total_days, 0);
    }

    #[test]
    fn test_range_entirely_in_future_is_zero() {
        let rules = CalendarRules::new();
        let breakdown =
            calculate_working_day_breakdown(&range("2026-11-02", "2026-11-30"), &rules, today());
        assert_eq!(breakdown.working_days, 0);
        assert_eq!(breakdown.total_days, 0);
        assert!(breakdown.clamped);
        assert_eq!(breakdown.effective_end_date, today());
    }

    #[test]
    fn test_future_end_equals_today_end() {
        let rules = CalendarRules::new();
        let clamped = calculate_working_days(&range("2026-10-01", "2027-06-30"), &rules, today());
        let explicit = calculate_working_days(&range("2026-10-01", "2026-10-15"), &rules, today());
        assert_eq!(clamped, explicit);
        assert_eq!(clamped, 11);
    }

    #[test]
    fn test_today_itself_is_counted() {
        // 2026-10-15 is a Thursday
        let rules = CalendarRules::new();
        assert_eq!(
            calculate_working_days(&range("2026-10-15", "2026-10-15"), &rules, today()),
            1
        );
    }

    // ==========================================================================
    // Rule interaction over a range
    // ==========================================================================
    #[test]
    fn test_plain_week_has_five_working_days() {
        // Monday 2026-01-12 to Sunday 2026-01-18
        let rules = CalendarRules::new();
        assert_eq!(
            calculate_working_days(&range("2026-01-12", "2026-01-18"), &rules, today()),
            5
        );
    }

    #[test]
    fn test_week_with_weekends_included() {
        let rules = CalendarRules::new().with_exclude_weekends(false);
        assert_eq!(
            calculate_working_days(&range("2026-01-12", "2026-01-18"), &rules, today()),
            7
        );
    }

    #[test]
    fn test_december_scenario() {
        let rules = CalendarRules::new()
            .with_holiday(make_date("2025-12-25"))
            .with_special_date(make_date("2025-12-28"));
        let breakdown =
            calculate_working_day_breakdown(&range("2025-12-01", "2025-12-31"), &rules, today());

        assert_eq!(breakdown.total_days, 31);
        assert_eq!(breakdown.weekend_days, 7);
        assert_eq!(breakdown.holiday_days, 1);
        assert_eq!(breakdown.special_working_days, 1);
        assert_eq!(breakdown.working_days, 23);
        assert!(!breakdown.clamped);
    }

    #[test]
    fn test_holiday_sources_are_unioned() {
        // Republic Day (Mon) from the calendar, an announced closure on Wednesday
        let rules = CalendarRules::new()
            .with_holiday(make_date("2026-01-26"))
            .with_announcement_holiday(make_date("2026-01-28"));
        let breakdown =
            calculate_working_day_breakdown(&range("2026-01-26", "2026-01-30"), &rules, today());
        assert_eq!(breakdown.working_days, 3);
        assert_eq!(breakdown.holiday_days, 1);
        assert_eq!(breakdown.announcement_holiday_days, 1);
    }

    #[test]
    fn test_weekend_holiday_is_not_double_counted() {
        // Holiday on Saturday 2026-01-17: excluded once, as a holiday.
        let rules = CalendarRules::new().with_holiday(make_date("2026-01-17"));
        let breakdown =
            calculate_working_day_breakdown(&range("2026-01-12", "2026-01-18"), &rules, today());
        assert_eq!(breakdown.working_days, 5);
        assert_eq!(breakdown.holiday_days, 1);
        assert_eq!(breakdown.weekend_days, 1);
    }

    #[test]
    fn test_special_date_outside_range_has_no_effect() {
        let rules = CalendarRules::new().with_special_date(make_date("2026-01-25"));
        assert_eq!(
            calculate_working_days(&range("2026-01-12", "2026-01-18"), &rules, today()),
            5
        );
    }

    #[test]
    fn test_special_date_after_today_is_not_counted() {
        let rules = CalendarRules::new().with_special_date(make_date("2026-10-17"));
        assert_eq!(
            calculate_working_days(&range("2026-10-12", "2026-10-18"), &rules, today()),
            4
        );
    }

    #[test]
    fn test_breakdown_buckets_sum_to_total() {
        let rules = CalendarRules::new()
            .with_holiday(make_date("2026-03-02"))
            .with_announcement_holiday(make_date("2026-03-10"))
            .with_special_date(make_date("2026-03-14"));
        let breakdown =
            calculate_working_day_breakdown(&range("2026-03-01", "2026-03-31"), &rules, today());
        assert_eq!(
            breakdown.working_days + breakdown.excluded_days(),
            breakdown.total_days
        );
        // 22 weekdays - 2 holidays + 1 Saturday override
        assert_eq!(breakdown.working_days, 21);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let rules = CalendarRules::new().with_holiday(make_date("2026-03-02"));
        let r = range("2026-03-01", "2026-03-31");
        assert_eq!(
            calculate_working_day_breakdown(&r, &rules, today()),
            calculate_working_day_breakdown(&r, &rules, today())
        );
    }
}
