//! Integration tests for the working-day counter.

use al_time::{Calendar, Date, Greece, WeekendsOnly};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// Brute-force reference count: every day of `[start, end]` is classified
/// independently through `is_business_day`, with no shared holiday union.
fn reference_count<C: Calendar>(cal: &C, start: Date, end: Date) -> u32 {
    let mut count = 0;
    let mut d = start;
    while d <= end {
        if cal.is_business_day(d).unwrap() {
            count += 1;
        }
        if d == end {
            break;
        }
        d += 1;
    }
    count
}

#[test]
fn absent_inputs() {
    let d = date(2024, 5, 8);
    assert_eq!(Greece.working_days(None, Some(d)).unwrap(), 0);
    assert_eq!(Greece.working_days(Some(d), None).unwrap(), 0);
    assert_eq!(Greece.working_days(None, None).unwrap(), 0);
}

#[test]
fn single_day_classification() {
    // Plain Wednesday.
    assert_eq!(
        Greece
            .working_days(Some(date(2024, 5, 8)), Some(date(2024, 5, 8)))
            .unwrap(),
        1
    );
    // Easter Monday 2024.
    assert_eq!(
        Greece
            .working_days(Some(date(2024, 5, 6)), Some(date(2024, 5, 6)))
            .unwrap(),
        0
    );
    // Saturday.
    assert_eq!(
        Greece
            .working_days(Some(date(2024, 5, 4)), Some(date(2024, 5, 4)))
            .unwrap(),
        0
    );
}

#[test]
fn inverted_range() {
    assert_eq!(
        Greece
            .working_days(Some(date(2024, 5, 10)), Some(date(2024, 5, 1)))
            .unwrap(),
        0
    );
}

#[test]
fn easter_week_2024() {
    // May 1-10, 2024: Good Friday May 3, weekend May 4-5, Easter Monday
    // May 6, moved Labour Day May 7; May 1, 2, 8, 9, 10 remain.
    assert_eq!(
        Greece
            .working_days(Some(date(2024, 5, 1)), Some(date(2024, 5, 10)))
            .unwrap(),
        5
    );
}

#[test]
fn cross_year_range() {
    // Dec 22, 2023 (Fri) through Jan 8, 2024 (Mon). Holidays inside:
    // Dec 25, Dec 26, Jan 1; Jan 6 falls on a Saturday.
    assert_eq!(
        Greece
            .working_days(Some(date(2023, 12, 22)), Some(date(2024, 1, 8)))
            .unwrap(),
        9
    );
}

#[test]
fn full_year_2024() {
    // 262 weekdays in 2024, minus the 11 holidays that do not fall on a
    // weekend (Jan 6 is a Saturday).
    assert_eq!(
        Greece
            .working_days(Some(date(2024, 1, 1)), Some(date(2024, 12, 31)))
            .unwrap(),
        251
    );
}

#[test]
fn repeated_calls_are_identical() {
    let start = Some(date(2023, 12, 22));
    let end = Some(date(2024, 1, 8));
    let first = Greece.working_days(start, end).unwrap();
    let second = Greece.working_days(start, end).unwrap();
    assert_eq!(first, second);
}

#[test]
fn matches_reference_over_holiday_season() {
    // Sweep all subranges of a window dense with holidays.
    let window_start = date(2024, 4, 26);
    let window_end = date(2024, 5, 12);
    let mut s = window_start;
    while s <= window_end {
        let mut e = s;
        while e <= window_end {
            assert_eq!(
                Greece.working_days(Some(s), Some(e)).unwrap(),
                reference_count(&Greece, s, e),
                "mismatch for [{s}, {e}]"
            );
            e += 1;
        }
        s += 1;
    }
}

proptest! {
    #[test]
    fn matches_reference_for_arbitrary_ranges(
        year in 2018u16..=2030,
        month in 1u8..=12,
        day in 1u8..=28,
        span in 0i32..=450,
    ) {
        let start = date(year, month, day);
        let end = start + span;
        prop_assert_eq!(
            Greece.working_days(Some(start), Some(end)).unwrap(),
            reference_count(&Greece, start, end)
        );
    }

    #[test]
    fn weekends_only_counts_weekdays(
        year in 1901u16..=2198,
        month in 1u8..=12,
        day in 1u8..=28,
        span in 0i32..=60,
    ) {
        let start = date(year, month, day);
        let end = start + span;
        let mut expected = 0;
        let mut d = start;
        while d <= end {
            if d.weekday().is_weekday() {
                expected += 1;
            }
            if d == end {
                break;
            }
            d += 1;
        }
        prop_assert_eq!(
            WeekendsOnly.working_days(Some(start), Some(end)).unwrap(),
            expected
        );
    }
}
