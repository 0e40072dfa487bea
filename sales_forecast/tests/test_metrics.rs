use assert_approx_eq::assert_approx_eq;
use chrono::NaiveDate;
use sales_forecast::error::SalesForecastError;
use sales_forecast::forecast::ForecastPoint;
use sales_forecast::metrics::summarize;
use sales_forecast::utils::future_periods;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn points_from_values(first_after: NaiveDate, values: &[f64]) -> Vec<ForecastPoint> {
    future_periods(first_after, values.len())
        .unwrap()
        .into_iter()
        .zip(values.iter())
        .map(|(period, &predicted_sales)| ForecastPoint {
            period,
            predicted_sales,
        })
        .collect()
}

#[test]
fn test_summary_of_the_fixed_ramp() {
    // Stub forecast [10, 20, ..., 120] starting February 2024
    let values: Vec<f64> = (1..=12).map(|i| (i * 10) as f64).collect();
    let points = points_from_values(date(2024, 1, 31), &values);

    let summary = summarize(&points).unwrap();

    assert_approx_eq!(summary.mean, 65.0);
    assert_approx_eq!(summary.max, 120.0);
    assert_approx_eq!(summary.min, 10.0);

    // The ramp peaks at the 12th forecast month
    assert_eq!(summary.peak_month, date(2025, 1, 31));
    assert_eq!(summary.peak_month_label(), "Jan");
}

#[test]
fn test_peak_month_takes_the_first_occurrence_on_ties() {
    let points = points_from_values(date(2024, 1, 31), &[50.0, 80.0, 80.0, 30.0]);

    let summary = summarize(&points).unwrap();
    assert_eq!(summary.peak_month, date(2024, 3, 31));
}

#[test]
fn test_summary_handles_negative_forecasts() {
    let points = points_from_values(date(2024, 1, 31), &[-5.0, -20.0, -1.0]);

    let summary = summarize(&points).unwrap();
    assert_approx_eq!(summary.max, -1.0);
    assert_approx_eq!(summary.min, -20.0);
    assert_eq!(summary.peak_month, date(2024, 4, 30));
}

#[test]
fn test_empty_forecast_cannot_be_summarized() {
    let result = summarize(&[]);
    assert!(matches!(result, Err(SalesForecastError::PredictionError(_))));
}

#[test]
fn test_summary_display_lists_the_four_indicators() {
    let values: Vec<f64> = (1..=12).map(|i| (i * 10) as f64).collect();
    let points = points_from_values(date(2024, 1, 31), &values);
    let rendered = summarize(&points).unwrap().to_string();

    assert!(rendered.contains("Mean sales:  65"));
    assert!(rendered.contains("Max sales:   120"));
    assert!(rendered.contains("Min sales:   10"));
    assert!(rendered.contains("Peak month:  Jan"));
}
