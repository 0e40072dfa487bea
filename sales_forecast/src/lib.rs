//! # Sales Forecast
//!
//! A Rust library for 12-month sales forecasting from historical monthly
//! data and a pre-trained model.
//!
//! ## Features
//!
//! - Tabular sales history loading (year/month/target plus two retained
//!   covariates)
//! - Lag and difference feature engineering with back-filled leading rows
//! - A fixed, named feature ordering matching the model's positional
//!   input contract
//! - Forecast assembly into twelve dated month-end points
//! - Summary metrics (mean, max, min, peak month)
//!
//! ## Quick Start
//!
//! ```no_run
//! use sales_forecast::models::LinearSalesModel;
//! use sales_forecast::pipeline::{ForecastPipeline, RunInputs};
//! use std::sync::Arc;
//!
//! # fn main() -> sales_forecast::error::Result<()> {
//! // Load the pre-trained model once at startup
//! let model = LinearSalesModel::from_path("model.json")?;
//! let pipeline = ForecastPipeline::new(Arc::new(model));
//!
//! // One run: a freshly uploaded file plus three operator scalars
//! let inputs = RunInputs {
//!     file: Some("vendas.csv".into()),
//!     param_a: Some(12.5),
//!     param_b: Some(8.0),
//!     current_sales: Some(1450.0),
//! };
//!
//! let report = pipeline.run(&inputs)?;
//! println!("{}", report.summary);
//! # Ok(())
//! # }
//! ```

pub mod data;
pub mod error;
pub mod features;
pub mod forecast;
pub mod metrics;
pub mod models;
pub mod pipeline;
pub mod utils;

// Re-export commonly used types
pub use crate::data::{DataLoader, SalesRecord, SalesSeries};
pub use crate::error::SalesForecastError;
pub use crate::features::{FeatureBuilder, FeatureRow, NewObservation, FEATURE_ORDER};
pub use crate::forecast::{ForecastAssembler, ForecastPoint};
pub use crate::metrics::ForecastSummary;
pub use crate::models::{SalesModel, FORECAST_HORIZON};
pub use crate::pipeline::{ForecastPipeline, ForecastReport, RunInputs};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
