//! Run boundary: input validation through forecast summary

use crate::data::{DataLoader, SalesSeries};
use crate::error::{Result, SalesForecastError};
use crate::features::{FeatureBuilder, NewObservation};
use crate::forecast::{ForecastAssembler, ForecastPoint};
use crate::metrics::{summarize, ForecastSummary};
use crate::models::SalesModel;
use std::path::PathBuf;
use std::sync::Arc;

/// Operator inputs for one run. All are optional until validated so the
/// run can report a single combined message when anything is missing.
#[derive(Debug, Clone, Default)]
pub struct RunInputs {
    /// Path to the sales spreadsheet
    pub file: Option<PathBuf>,
    /// Covariate A for the current period
    pub param_a: Option<f64>,
    /// Covariate B for the current period
    pub param_b: Option<f64>,
    /// Current-period sales figure
    pub current_sales: Option<f64>,
}

/// Everything the presentation layer consumes from one completed run.
#[derive(Debug, Clone)]
pub struct ForecastReport {
    /// Historical series including the appended observation
    pub history: SalesSeries,
    /// The twelve dated forecast points
    pub forecast: Vec<ForecastPoint>,
    /// Headline indicators over the forecast
    pub summary: ForecastSummary,
    /// Name of the model that produced the forecast
    pub model_name: String,
}

/// Single-run forecasting pipeline.
///
/// Each run starts from a freshly supplied file and parameters; the only
/// state carried across runs is the read-only model.
#[derive(Debug, Clone)]
pub struct ForecastPipeline {
    assembler: ForecastAssembler,
}

impl ForecastPipeline {
    /// Create a pipeline around the injected model
    pub fn new(model: Arc<dyn SalesModel>) -> Self {
        Self {
            assembler: ForecastAssembler::new(model),
        }
    }

    /// Run one forecast end to end.
    ///
    /// The first failing stage aborts the run; no partial results are
    /// produced. Missing inputs are reported before any computation and
    /// before the model is touched.
    pub fn run(&self, inputs: &RunInputs) -> Result<ForecastReport> {
        let (path, observation) = validate_inputs(inputs)?;

        let history = DataLoader::from_csv(path)?;
        let (series, features) = FeatureBuilder::latest_features(&history, &observation)?;
        let forecast = self.assembler.forecast(&features)?;
        let summary = summarize(&forecast)?;

        Ok(ForecastReport {
            history: series,
            forecast,
            summary,
            model_name: self.assembler.model_name().to_string(),
        })
    }
}

fn validate_inputs(inputs: &RunInputs) -> Result<(&PathBuf, NewObservation)> {
    match (
        &inputs.file,
        inputs.param_a,
        inputs.param_b,
        inputs.current_sales,
    ) {
        (Some(file), Some(param_a), Some(param_b), Some(sales)) => Ok((
            file,
            NewObservation {
                sales,
                param_a,
                param_b,
            },
        )),
        _ => Err(SalesForecastError::MissingInputError),
    }
}
