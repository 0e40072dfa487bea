use chrono::NaiveDate;
use rstest::rstest;
use sales_forecast::utils::{future_periods, month_end, month_label, months_after};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn test_month_end_normalization() {
    assert_eq!(month_end(2023, 1).unwrap(), date(2023, 1, 31));
    assert_eq!(month_end(2023, 2).unwrap(), date(2023, 2, 28));
    assert_eq!(month_end(2024, 2).unwrap(), date(2024, 2, 29));
    assert_eq!(month_end(2023, 4).unwrap(), date(2023, 4, 30));
    assert_eq!(month_end(2023, 12).unwrap(), date(2023, 12, 31));
}

#[test]
fn test_month_end_rejects_invalid_month() {
    assert!(month_end(2023, 0).is_err());
    assert!(month_end(2023, 13).is_err());
}

#[rstest]
#[case(date(2023, 1, 31), 1, date(2023, 2, 28))]
#[case(date(2024, 1, 31), 1, date(2024, 2, 29))]
#[case(date(2023, 12, 31), 1, date(2024, 1, 31))]
#[case(date(2023, 11, 30), 3, date(2024, 2, 29))]
#[case(date(2023, 3, 31), 12, date(2024, 3, 31))]
fn test_months_after_preserves_month_end_semantics(
    #[case] start: NaiveDate,
    #[case] months: u32,
    #[case] expected: NaiveDate,
) {
    assert_eq!(months_after(start, months).unwrap(), expected);
}

#[test]
fn test_future_periods_are_consecutive_month_ends() {
    let last = date(2023, 11, 30);
    let periods = future_periods(last, 12).unwrap();

    assert_eq!(periods.len(), 12);
    assert_eq!(periods[0], date(2023, 12, 31));
    assert_eq!(periods[11], date(2024, 11, 30));

    for (previous, next) in periods.iter().zip(periods.iter().skip(1)) {
        assert_eq!(months_after(*previous, 1).unwrap(), *next);
    }
}

#[test]
fn test_month_label() {
    assert_eq!(month_label(date(2024, 1, 31)), "Jan");
    assert_eq!(month_label(date(2024, 12, 31)), "Dec");
}
