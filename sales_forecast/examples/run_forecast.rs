use sales_forecast::data::{SalesRecord, SalesSeries};
use sales_forecast::features::{FeatureBuilder, NewObservation};
use sales_forecast::forecast::ForecastAssembler;
use sales_forecast::metrics::summarize;
use sales_forecast::models::{LinearSalesModel, FEATURE_COUNT, FORECAST_HORIZON};
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Sales Forecast: Basic Pipeline Example");
    println!("======================================\n");

    // Build two years of synthetic monthly history
    println!("Creating sample history...");
    let history = create_sample_history();
    println!("Sample history created: {} monthly records\n", history.len());

    // A model that carries last observed sales forward with a mild trend
    let model = create_sample_model()?;

    // Append the current month's observation and derive features
    let observation = NewObservation {
        sales: 1480.0,
        param_a: 11.0,
        param_b: 7.5,
    };
    let (series, features) = FeatureBuilder::latest_features(&history, &observation)?;
    println!(
        "Observation appended for {}; series now has {} records",
        features.period, series.len()
    );

    // Forecast the next twelve months
    let assembler = ForecastAssembler::new(Arc::new(model));
    let forecast = assembler.forecast(&features)?;

    println!("\nForecast for the next 12 months:");
    for point in &forecast {
        println!("  {}  {:.0}", point.period.format("%Y-%m"), point.predicted_sales);
    }

    let summary = summarize(&forecast)?;
    println!("\n{}", summary);

    Ok(())
}

fn create_sample_history() -> SalesSeries {
    let mut records = Vec::new();
    for month in 0..24u32 {
        let year = 2022 + (month / 12) as i32;
        let month_of_year = month % 12 + 1;
        let period = sales_forecast::utils::month_end(year, month_of_year)
            .expect("valid sample period");

        // Seasonal swing around a slow upward trend
        let seasonal = (month as f64 / 12.0 * std::f64::consts::TAU).sin() * 180.0;
        records.push(SalesRecord {
            period,
            sales: 1200.0 + month as f64 * 8.0 + seasonal,
            param_a: 10.0 + (month % 3) as f64,
            param_b: 7.0 + (month % 5) as f64 * 0.5,
        });
    }
    SalesSeries::from_records(records)
}

fn create_sample_model() -> Result<LinearSalesModel, Box<dyn std::error::Error>> {
    // Position 5 of the feature vector is the current sales value; weight
    // it close to 1 and grow the intercept with the horizon.
    let mut weights = Vec::with_capacity(FORECAST_HORIZON);
    let mut intercepts = Vec::with_capacity(FORECAST_HORIZON);
    for horizon in 0..FORECAST_HORIZON {
        let mut row = vec![0.0; FEATURE_COUNT];
        row[5] = 0.95;
        row[4] = 0.05;
        weights.push(row);
        intercepts.push(25.0 + horizon as f64 * 5.0);
    }

    Ok(LinearSalesModel::new("Sample linear model", weights, intercepts)?)
}
