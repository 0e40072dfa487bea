//! Model contract for the pre-trained sales forecaster

use crate::error::Result;
use std::fmt::Debug;

/// Number of future months produced by one predict call
pub const FORECAST_HORIZON: usize = 12;

/// Number of input features per predict call
pub const FEATURE_COUNT: usize = crate::features::FEATURE_ORDER.len();

/// Pre-trained forecasting model: one feature vector in, twelve monthly
/// forecast values out.
///
/// The artifact is loaded once at startup and never mutated afterwards, so
/// it can be shared read-only across runs. The twelve-out shape is the
/// observed external contract and is preserved without assuming deeper
/// structure.
pub trait SalesModel: Debug + Send + Sync {
    /// Forecast the twelve months following the feature row's period
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> Result<Vec<f64>>;

    /// Name of the model
    fn name(&self) -> &str;
}

pub mod linear;

pub use linear::LinearSalesModel;
