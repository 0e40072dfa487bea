//! Error types for the sales_forecast crate

use polars::prelude::PolarsError;
use thiserror::Error;

/// Custom error types for the sales_forecast crate
#[derive(Debug, Error)]
pub enum SalesForecastError {
    /// The sales spreadsheet could not be parsed or lacks required columns
    #[error("Load error: {0}")]
    LoadError(String),

    /// One or more run inputs are absent. The run performs no computation
    /// and reports a single combined message regardless of which input is
    /// missing.
    #[error("Load the sales spreadsheet and enter covariate A, covariate B and the current sales value to generate the forecast")]
    MissingInputError,

    /// Not enough historical rows to derive the difference columns
    #[error("Insufficient history: need at least {needed} monthly rows, found {found}")]
    InsufficientHistoryError { needed: usize, found: usize },

    /// The model call failed or returned an unexpected shape
    #[error("Prediction error: {0}")]
    PredictionError(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from Polars operations
    #[error("Polars error: {0}")]
    PolarsError(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, SalesForecastError>;

impl From<PolarsError> for SalesForecastError {
    fn from(err: PolarsError) -> Self {
        SalesForecastError::PolarsError(err.to_string())
    }
}
