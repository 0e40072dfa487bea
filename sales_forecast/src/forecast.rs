//! Forecast assembly: model invocation and dated 12-month expansion

use crate::error::{Result, SalesForecastError};
use crate::features::FeatureRow;
use crate::models::{SalesModel, FORECAST_HORIZON};
use crate::utils::future_periods;
use chrono::NaiveDate;
use std::sync::Arc;

/// One forecasted future month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastPoint {
    /// Month-end date of the forecasted month
    pub period: NaiveDate,
    /// Forecasted sales value
    pub predicted_sales: f64,
}

/// Expands one feature row into the dated 12-month forecast.
#[derive(Debug, Clone)]
pub struct ForecastAssembler {
    model: Arc<dyn SalesModel>,
}

impl ForecastAssembler {
    /// The model is injected read-only at construction, so tests can
    /// substitute a deterministic stub.
    pub fn new(model: Arc<dyn SalesModel>) -> Self {
        Self { model }
    }

    /// Name of the injected model
    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Invoke the model on the feature row and date its twelve values,
    /// starting the month after the row's period.
    pub fn forecast(&self, features: &FeatureRow) -> Result<Vec<ForecastPoint>> {
        let values = self.model.predict(&features.to_vector())?;

        if values.len() != FORECAST_HORIZON {
            return Err(SalesForecastError::PredictionError(format!(
                "Model returned {} values, expected {}",
                values.len(),
                FORECAST_HORIZON
            )));
        }

        let periods = future_periods(features.period, FORECAST_HORIZON)?;

        Ok(periods
            .into_iter()
            .zip(values)
            .map(|(period, predicted_sales)| ForecastPoint {
                period,
                predicted_sales,
            })
            .collect())
    }
}
