use akshun::params::{end_of_window, parse_from_date};
use chrono::{Local, NaiveDate};

#[test]
fn test_parse_from_date_formal() {
    let date = parse_from_date("2024-01-01").unwrap();
    assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
}

#[test]
fn test_parse_from_date_natural_language() {
    // "today" resolves against the current local date
    let date = parse_from_date("today").unwrap();
    assert_eq!(date, Local::now().date_naive());

    // Relative expressions parse to some date on or after today
    let date = parse_from_date("next friday").unwrap();
    assert!(date > Local::now().date_naive());
}

#[test]
fn test_parse_from_date_failure_is_an_error() {
    // No silent fallback: garbage input must be rejected
    let result = parse_from_date("definitely not a date 12345 xyz");
    assert!(result.is_err());

    let err = result.unwrap_err();
    assert!(err.contains("definitely not a date"));
}

#[test]
fn test_end_of_window_adds_exact_period() {
    let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    assert_eq!(
        end_of_window(from, 7),
        NaiveDate::from_ymd_opt(2024, 1, 8).unwrap()
    );

    // Zero-day period keeps the window closed on a single day
    assert_eq!(end_of_window(from, 0), from);
}

#[test]
fn test_end_of_window_never_precedes_from() {
    let from = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();

    for period in 0..30 {
        let to = end_of_window(from, period);
        assert!(to >= from);
        assert_eq!((to - from).num_days(), period as i64);
    }
}

#[test]
fn test_end_of_window_crosses_month_and_year_boundaries() {
    // Leap-year February
    let from = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
    assert_eq!(
        end_of_window(from, 7),
        NaiveDate::from_ymd_opt(2024, 3, 6).unwrap()
    );

    // Year boundary
    let from = NaiveDate::from_ymd_opt(2023, 12, 29).unwrap();
    assert_eq!(
        end_of_window(from, 7),
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
    );
}
