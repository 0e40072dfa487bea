//! Summary metrics over the assembled forecast

use crate::error::{Result, SalesForecastError};
use crate::forecast::ForecastPoint;
use crate::utils::month_label;
use chrono::NaiveDate;

/// Headline indicators computed from the twelve forecast points only.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSummary {
    /// Mean forecasted sales
    pub mean: f64,
    /// Maximum forecasted sales
    pub max: f64,
    /// Minimum forecasted sales
    pub min: f64,
    /// Period of the highest forecast value (first occurrence on ties)
    pub peak_month: NaiveDate,
}

impl ForecastSummary {
    /// Abbreviated label of the peak month ("Jan", "Feb", ...)
    pub fn peak_month_label(&self) -> String {
        month_label(self.peak_month)
    }
}

impl std::fmt::Display for ForecastSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Forecast Summary:")?;
        writeln!(f, "  Mean sales:  {:.0}", self.mean)?;
        writeln!(f, "  Max sales:   {:.0}", self.max)?;
        writeln!(f, "  Min sales:   {:.0}", self.min)?;
        writeln!(f, "  Peak month:  {}", self.peak_month_label())?;
        Ok(())
    }
}

/// Compute mean, max, min and peak month over the forecast points
pub fn summarize(forecast: &[ForecastPoint]) -> Result<ForecastSummary> {
    let first = forecast.first().ok_or_else(|| {
        SalesForecastError::PredictionError("Cannot summarize an empty forecast".to_string())
    })?;

    let mut sum = 0.0;
    let mut max = first.predicted_sales;
    let mut min = first.predicted_sales;
    let mut peak_month = first.period;

    for point in forecast {
        sum += point.predicted_sales;
        if point.predicted_sales > max {
            max = point.predicted_sales;
            peak_month = point.period;
        }
        if point.predicted_sales < min {
            min = point.predicted_sales;
        }
    }

    Ok(ForecastSummary {
        mean: sum / forecast.len() as f64,
        max,
        min,
        peak_month,
    })
}
