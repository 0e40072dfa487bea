//! Calendar helpers for monthly period arithmetic
//!
//! Every period in the pipeline is keyed by the last calendar day of its
//! month, so all arithmetic here is month-end preserving.

use crate::error::{Result, SalesForecastError};
use chrono::{Datelike, NaiveDate};

/// Last calendar day of the given month.
pub fn month_end(year: i32, month: u32) -> Result<NaiveDate> {
    if !(1..=12).contains(&month) {
        return Err(SalesForecastError::LoadError(format!(
            "Month must be between 1 and 12, found {}",
            month
        )));
    }

    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .ok_or_else(|| {
            SalesForecastError::LoadError(format!("Invalid period: {}-{}", year, month))
        })
}

/// Month-end date `months` calendar months after `period`'s month.
///
/// The day-of-month of `period` is irrelevant: one month after January 31
/// is February 28 (or 29 in leap years).
pub fn months_after(period: NaiveDate, months: u32) -> Result<NaiveDate> {
    let total = period.year() * 12 + period.month0() as i32 + months as i32;
    month_end(total.div_euclid(12), total.rem_euclid(12) as u32 + 1)
}

/// The `horizon` consecutive month-end periods following `last`.
pub fn future_periods(last: NaiveDate, horizon: usize) -> Result<Vec<NaiveDate>> {
    (1..=horizon as u32).map(|i| months_after(last, i)).collect()
}

/// Abbreviated month label for display ("Jan", "Feb", ...).
pub fn month_label(period: NaiveDate) -> String {
    period.format("%b").to_string()
}
