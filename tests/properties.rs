//! Property tests for working-day counting and attendance percentages.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use attendance_engine::calculation::{
    DayClassification, calculate_attendance_percentage, calculate_working_day_breakdown,
    calculate_working_days, classify_day, get_day_type,
};
use attendance_engine::models::{CalendarRules, DateRange, day_key};

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

/// A date within roughly two years of the base date.
fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..730).prop_map(|offset| base() + Duration::days(offset))
}

/// A Saturday or Sunday in the same window. 2025-06-01 is a Sunday.
fn arb_weekend_day() -> impl Strategy<Value = NaiveDate> {
    (0i64..100, any::<bool>()).prop_map(|(week, saturday)| {
        base() + Duration::days(week * 7 + if saturday { 6 } else { 0 })
    })
}

/// Calendar rules with up to 20 entries per set, drawn from the same window.
fn arb_rules() -> impl Strategy<Value = CalendarRules> {
    (
        prop::collection::vec(arb_date(), 0..20),
        prop::collection::vec(arb_date(), 0..20),
        prop::collection::vec(arb_date(), 0..20),
        any::<bool>(),
    )
        .prop_map(|(holidays, announced, special, exclude_weekends)| {
            let mut rules = CalendarRules::new().with_exclude_weekends(exclude_weekends);
            rules.extend_holidays(holidays.into_iter().map(day_key));
            rules.extend_announcement_holidays(announced.into_iter().map(day_key));
            rules.extend_special_dates(special.into_iter().map(day_key));
            rules
        })
}

proptest! {
    #[test]
    fn reversed_range_is_zero(
        a in arb_date(),
        b in arb_date(),
        rules in arb_rules(),
        today in arb_date(),
    ) {
        prop_assume!(a != b);
        let (start, end) = if a > b { (a, b) } else { (b, a) };
        prop_assert_eq!(calculate_working_days(&DateRange::new(start, end), &rules, today), 0);
    }

    #[test]
    fn future_end_equals_today_end(
        start in arb_date(),
        today in arb_date(),
        extra in 1i64..400,
        rules in arb_rules(),
    ) {
        let future_end = today + Duration::days(extra);
        prop_assert_eq!(
            calculate_working_days(&DateRange::new(start, future_end), &rules, today),
            calculate_working_days(&DateRange::new(start, today), &rules, today)
        );
    }

    #[test]
    fn special_dates_always_work(day in arb_date(), rules in arb_rules()) {
        let rules = rules.with_special_date(day);
        prop_assert_eq!(classify_day(day, &rules), DayClassification::SpecialWorkingDay);
        prop_assert_eq!(
            calculate_working_days(&DateRange::new(day, day), &rules, day),
            1
        );
    }

    #[test]
    fn holidays_without_override_never_work(
        day in arb_date(),
        rules in arb_rules(),
        announced in any::<bool>(),
    ) {
        let mut rules = if announced {
            rules.with_announcement_holiday(day)
        } else {
            rules.with_holiday(day)
        };
        rules.special_dates.remove(&day_key(day));
        prop_assert!(!classify_day(day, &rules).is_working());
        prop_assert_eq!(calculate_working_days(&DateRange::new(day, day), &rules, day), 0);
    }

    #[test]
    fn weekends_follow_policy(day in arb_weekend_day(), rules in arb_rules()) {
        let key = day_key(day);
        prop_assert!(get_day_type(day).is_weekend());
        prop_assume!(!rules.is_special_date(&key));
        prop_assume!(!rules.is_holiday(&key) && !rules.is_announcement_holiday(&key));

        let working = classify_day(day, &rules).is_working();
        prop_assert_eq!(working, !rules.exclude_weekends);
    }

    #[test]
    fn breakdown_is_consistent(
        start in arb_date(),
        end in arb_date(),
        today in arb_date(),
        rules in arb_rules(),
    ) {
        let range = DateRange::new(start, end);
        let breakdown = calculate_working_day_breakdown(&range, &rules, today);

        prop_assert_eq!(breakdown.working_days, calculate_working_days(&range, &rules, today));
        prop_assert_eq!(breakdown.working_days + breakdown.excluded_days(), breakdown.total_days);
        prop_assert!(breakdown.special_working_days <= breakdown.working_days);
        prop_assert!(breakdown.effective_end_date <= end);
    }

    #[test]
    fn counting_is_idempotent(
        start in arb_date(),
        end in arb_date(),
        today in arb_date(),
        rules in arb_rules(),
    ) {
        let range = DateRange::new(start, end);
        prop_assert_eq!(
            calculate_working_day_breakdown(&range, &rules, today),
            calculate_working_day_breakdown(&range, &rules, today)
        );
    }

    #[test]
    fn zero_working_days_is_zero_percent(present in any::<i64>()) {
        prop_assert_eq!(calculate_attendance_percentage(present, 0), "0%");
    }

    #[test]
    fn percentage_stays_within_bounds(working in 1i64..1000, present in 0i64..2000) {
        let text = calculate_attendance_percentage(present, working);
        let value: i64 = text.trim_end_matches('%').parse().unwrap();
        prop_assert!((0..=100).contains(&value));
        if present >= working {
            prop_assert_eq!(value, 100);
        }
    }
}
