//! Per-horizon linear model deserialized from a JSON artifact

use crate::error::{Result, SalesForecastError};
use crate::models::{SalesModel, FEATURE_COUNT, FORECAST_HORIZON};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

fn default_name() -> String {
    "Linear sales model".to_string()
}

/// Pre-trained linear map: one weight row and intercept per forecast
/// horizon, applied to the fixed ten-feature input vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearSalesModel {
    #[serde(default = "default_name")]
    name: String,
    /// One row of feature weights per forecast month
    weights: Vec<Vec<f64>>,
    /// One intercept per forecast month
    intercepts: Vec<f64>,
}

impl LinearSalesModel {
    /// Create a model from explicit coefficients
    pub fn new(
        name: impl Into<String>,
        weights: Vec<Vec<f64>>,
        intercepts: Vec<f64>,
    ) -> Result<Self> {
        let model = Self {
            name: name.into(),
            weights,
            intercepts,
        };
        model.validate()?;
        Ok(model)
    }

    /// Load the model artifact from a local JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(&path).map_err(|e| {
            SalesForecastError::PredictionError(format!(
                "Cannot open model artifact '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let model: LinearSalesModel =
            serde_json::from_reader(BufReader::new(file)).map_err(|e| {
                SalesForecastError::PredictionError(format!("Cannot parse model artifact: {}", e))
            })?;

        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<()> {
        if self.weights.len() != FORECAST_HORIZON || self.intercepts.len() != FORECAST_HORIZON {
            return Err(SalesForecastError::PredictionError(format!(
                "Model artifact must carry {} weight rows and intercepts, found {} and {}",
                FORECAST_HORIZON,
                self.weights.len(),
                self.intercepts.len()
            )));
        }

        for (horizon, row) in self.weights.iter().enumerate() {
            if row.len() != FEATURE_COUNT {
                return Err(SalesForecastError::PredictionError(format!(
                    "Weight row {} must carry {} coefficients, found {}",
                    horizon,
                    FEATURE_COUNT,
                    row.len()
                )));
            }
        }

        Ok(())
    }
}

impl SalesModel for LinearSalesModel {
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> Result<Vec<f64>> {
        Ok(self
            .weights
            .iter()
            .zip(&self.intercepts)
            .map(|(row, intercept)| {
                intercept
                    + row
                        .iter()
                        .zip(features.iter())
                        .map(|(weight, value)| weight * value)
                        .sum::<f64>()
            })
            .collect())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
