//! Lag/difference feature engineering over the monthly sales series

use crate::data::{SalesRecord, SalesSeries};
use crate::error::{Result, SalesForecastError};
use crate::utils::months_after;
use chrono::NaiveDate;

/// Minimum number of historical rows needed before the four-period
/// difference column is well defined.
pub const MIN_HISTORY: usize = 4;

/// Named feature fields understood by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    /// Sales shifted back one period
    Lag1,
    /// Sales shifted back two periods
    Lag2,
    /// Sales shifted back three periods
    Lag3,
    /// Sales difference over one period
    Diff1,
    /// Sales difference over two periods
    Diff2,
    /// Sales difference over three periods
    Diff3,
    /// Sales difference over four periods
    Diff4,
    /// Current-period sales
    Sales,
    /// Pass-through covariate A
    ParamA,
    /// Pass-through covariate B
    ParamB,
}

/// Positional input contract of the pre-trained model.
///
/// The order is part of the contract; the model is order-sensitive, so the
/// mapping is spelled out here rather than left implicit in a table layout.
pub const FEATURE_ORDER: [Feature; 10] = [
    Feature::Lag2,
    Feature::Diff1,
    Feature::Diff3,
    Feature::Diff4,
    Feature::Lag1,
    Feature::Sales,
    Feature::Diff2,
    Feature::Lag3,
    Feature::ParamB,
    Feature::ParamA,
];

/// Operator-supplied observation for the period being appended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewObservation {
    /// Current-period sales figure
    pub sales: f64,
    /// Covariate A
    pub param_a: f64,
    /// Covariate B
    pub param_b: f64,
}

/// Derived feature values for one period.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    /// Month-end period the row belongs to
    pub period: NaiveDate,
    pub sales: f64,
    pub lag1: f64,
    pub lag2: f64,
    pub lag3: f64,
    pub diff1: f64,
    pub diff2: f64,
    pub diff3: f64,
    pub diff4: f64,
    pub param_a: f64,
    pub param_b: f64,
}

impl FeatureRow {
    /// Value of a single named feature.
    pub fn value(&self, feature: Feature) -> f64 {
        match feature {
            Feature::Lag1 => self.lag1,
            Feature::Lag2 => self.lag2,
            Feature::Lag3 => self.lag3,
            Feature::Diff1 => self.diff1,
            Feature::Diff2 => self.diff2,
            Feature::Diff3 => self.diff3,
            Feature::Diff4 => self.diff4,
            Feature::Sales => self.sales,
            Feature::ParamA => self.param_a,
            Feature::ParamB => self.param_b,
        }
    }

    /// Feature vector in the model's positional order.
    pub fn to_vector(&self) -> [f64; FEATURE_ORDER.len()] {
        let mut vector = [0.0; FEATURE_ORDER.len()];
        for (slot, feature) in vector.iter_mut().zip(FEATURE_ORDER) {
            *slot = self.value(feature);
        }
        vector
    }
}

/// Builds model-ready feature rows from history plus the new observation
#[derive(Debug)]
pub struct FeatureBuilder;

impl FeatureBuilder {
    /// Append the operator observation exactly one calendar month after the
    /// last existing period. The next period is derived from the data, not
    /// from the wall clock.
    pub fn append_observation(
        series: &SalesSeries,
        observation: &NewObservation,
    ) -> Result<SalesSeries> {
        let last = series.last_period().ok_or(SalesForecastError::InsufficientHistoryError {
            needed: MIN_HISTORY,
            found: 0,
        })?;
        let period = months_after(last, 1)?;

        let mut records = series.records().to_vec();
        records.push(SalesRecord {
            period,
            sales: observation.sales,
            param_a: observation.param_a,
            param_b: observation.param_b,
        });

        Ok(SalesSeries::from_records(records))
    }

    /// Compute the lag and difference columns for every period.
    ///
    /// A value that would be undefined at the start of the series inherits
    /// the value at the row index equal to its shift/diff order (the
    /// back-fill the model was trained against), so the row count always
    /// equals the series length.
    ///
    /// The error counts the rows of the series as given; the historical-rows
    /// framing (history before the appended observation) belongs to
    /// [`FeatureBuilder::latest_features`].
    pub fn build_rows(series: &SalesSeries) -> Result<Vec<FeatureRow>> {
        if series.len() <= MIN_HISTORY {
            return Err(SalesForecastError::InsufficientHistoryError {
                needed: MIN_HISTORY + 1,
                found: series.len(),
            });
        }

        let sales = series.sales_values();

        // Back-filled shift: rows before index k read the value at index k.
        let lag = |k: usize, i: usize| sales[i.max(k) - k];
        let diff = |k: usize, i: usize| {
            let j = i.max(k);
            sales[j] - sales[j - k]
        };

        Ok(series
            .records()
            .iter()
            .enumerate()
            .map(|(i, record)| FeatureRow {
                period: record.period,
                sales: record.sales,
                lag1: lag(1, i),
                lag2: lag(2, i),
                lag3: lag(3, i),
                diff1: diff(1, i),
                diff2: diff(2, i),
                diff3: diff(3, i),
                diff4: diff(4, i),
                param_a: record.param_a,
                param_b: record.param_b,
            })
            .collect())
    }

    /// Append the observation and return the finalized series together with
    /// the feature row for the newly appended period, the only row the
    /// model consumes.
    pub fn latest_features(
        history: &SalesSeries,
        observation: &NewObservation,
    ) -> Result<(SalesSeries, FeatureRow)> {
        if history.len() < MIN_HISTORY {
            return Err(SalesForecastError::InsufficientHistoryError {
                needed: MIN_HISTORY,
                found: history.len(),
            });
        }

        let series = Self::append_observation(history, observation)?;
        let row = Self::build_rows(&series)?
            .into_iter()
            .last()
            .ok_or_else(|| {
                SalesForecastError::PredictionError("Empty feature table".to_string())
            })?;

        Ok((series, row))
    }
}
