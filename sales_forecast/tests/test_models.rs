use assert_approx_eq::assert_approx_eq;
use sales_forecast::error::SalesForecastError;
use sales_forecast::models::{LinearSalesModel, SalesModel, FEATURE_COUNT, FORECAST_HORIZON};
use std::io::Write;
use tempfile::NamedTempFile;

fn selector_model() -> LinearSalesModel {
    // Row h picks out feature h % FEATURE_COUNT and adds h
    let weights = (0..FORECAST_HORIZON)
        .map(|h| {
            let mut row = vec![0.0; FEATURE_COUNT];
            row[h % FEATURE_COUNT] = 1.0;
            row
        })
        .collect();
    let intercepts = (0..FORECAST_HORIZON).map(|h| h as f64).collect();

    LinearSalesModel::new("selector", weights, intercepts).unwrap()
}

#[test]
fn test_linear_model_predicts_one_value_per_horizon() {
    let model = selector_model();
    let features = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];

    let values = model.predict(&features).unwrap();

    assert_eq!(values.len(), FORECAST_HORIZON);
    for (h, value) in values.iter().enumerate() {
        assert_approx_eq!(*value, features[h % FEATURE_COUNT] + h as f64);
    }
}

#[test]
fn test_linear_model_rejects_wrong_horizon_count() {
    let weights = vec![vec![0.0; FEATURE_COUNT]; FORECAST_HORIZON - 1];
    let intercepts = vec![0.0; FORECAST_HORIZON - 1];

    let result = LinearSalesModel::new("short", weights, intercepts);
    assert!(matches!(result, Err(SalesForecastError::PredictionError(_))));
}

#[test]
fn test_linear_model_rejects_wrong_feature_width() {
    let mut weights = vec![vec![0.0; FEATURE_COUNT]; FORECAST_HORIZON];
    weights[7] = vec![0.0; FEATURE_COUNT - 1];
    let intercepts = vec![0.0; FORECAST_HORIZON];

    let result = LinearSalesModel::new("narrow", weights, intercepts);
    assert!(matches!(result, Err(SalesForecastError::PredictionError(_))));
}

#[test]
fn test_artifact_round_trips_through_json() {
    let model = selector_model();

    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", serde_json::to_string(&model).unwrap()).unwrap();

    let loaded = LinearSalesModel::from_path(file.path()).unwrap();
    assert_eq!(loaded.name(), "selector");

    let features = [0.5; FEATURE_COUNT];
    assert_eq!(
        loaded.predict(&features).unwrap(),
        model.predict(&features).unwrap()
    );
}

#[test]
fn test_artifact_name_defaults_when_absent() {
    let weights: Vec<Vec<f64>> = vec![vec![0.1; FEATURE_COUNT]; FORECAST_HORIZON];
    let intercepts = vec![1.0; FORECAST_HORIZON];
    let artifact = serde_json::json!({ "weights": weights, "intercepts": intercepts });

    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", artifact).unwrap();

    let loaded = LinearSalesModel::from_path(file.path()).unwrap();
    assert_eq!(loaded.name(), "Linear sales model");
}

#[test]
fn test_unparseable_artifact_is_a_prediction_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();

    let result = LinearSalesModel::from_path(file.path());
    assert!(matches!(result, Err(SalesForecastError::PredictionError(_))));
}

#[test]
fn test_missing_artifact_is_a_prediction_error() {
    let result = LinearSalesModel::from_path("no_such_model.json");
    assert!(matches!(result, Err(SalesForecastError::PredictionError(_))));
}
