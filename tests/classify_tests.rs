mod common;

use common::{date, dec};
use streakfold::{DayComparison, Transition, classify};

const BOTH: [DayComparison; 2] = [DayComparison::CalendarDate, DayComparison::DayOfMonth];

#[test]
fn test_same_day_is_none() {
    for mode in BOTH {
        assert_eq!(classify(dec(12), "12/12/2021", mode), Transition::None);
    }
}

#[test]
fn test_next_day_increments() {
    for mode in BOTH {
        assert_eq!(classify(dec(13), "12/12/2021", mode), Transition::Increment);
    }
}

#[test]
fn test_gap_resets() {
    for mode in BOTH {
        assert_eq!(classify(dec(14), "12/12/2021", mode), Transition::Reset);
        assert_eq!(classify(dec(31), "12/12/2021", mode), Transition::Reset);
    }
}

#[test]
fn test_earlier_date_resets() {
    for mode in BOTH {
        assert_eq!(classify(dec(11), "12/12/2021", mode), Transition::Reset);
    }
}

#[test]
fn test_malformed_last_login_resets() {
    for mode in BOTH {
        assert_eq!(classify(dec(12), "", mode), Transition::Reset);
        assert_eq!(classify(dec(12), "yesterday", mode), Transition::Reset);
    }
}

#[test]
fn test_calendar_date_crosses_month_and_year() {
    let mode = DayComparison::CalendarDate;
    assert_eq!(classify(date(2022, 2, 1), "1/31/2022", mode), Transition::Increment);
    assert_eq!(classify(date(2022, 1, 1), "12/31/2021", mode), Transition::Increment);
    assert_eq!(classify(date(2024, 3, 1), "2/29/2024", mode), Transition::Increment);
    assert_eq!(classify(date(2022, 2, 1), "1/1/2022", mode), Transition::Reset);
    assert_eq!(classify(date(2022, 12, 12), "12/12/2021", mode), Transition::Reset);
}

#[test]
fn test_day_of_month_ignores_month_and_year() {
    let mode = DayComparison::DayOfMonth;
    assert_eq!(classify(date(2022, 2, 1), "1/31/2022", mode), Transition::Reset);
    assert_eq!(classify(date(2022, 2, 1), "1/1/2022", mode), Transition::None);
    assert_eq!(classify(date(2022, 2, 2), "1/1/2022", mode), Transition::Increment);
}

#[test]
fn test_day_of_month_only_reads_day_segment() {
    // Only the middle segment matters in legacy mode.
    assert_eq!(
        classify(dec(13), "99/12/garbage", DayComparison::DayOfMonth),
        Transition::Increment
    );
    assert_eq!(
        classify(dec(13), "99/12/garbage", DayComparison::CalendarDate),
        Transition::Reset
    );
}
