//! Sales history loading and the in-memory monthly series

use crate::error::{Result, SalesForecastError};
use crate::utils::month_end;
use chrono::NaiveDate;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Year column in the input spreadsheet
pub const YEAR_COLUMN: &str = "Ano";
/// Month column (1-12) in the input spreadsheet
pub const MONTH_COLUMN: &str = "Mês";
/// Target sales column in the input spreadsheet
pub const TARGET_COLUMN: &str = "TARGET";
/// Retained covariate A column; the other numbered parameters are dropped
pub const PARAM_A_COLUMN: &str = "PARAMETRO 5";
/// Retained covariate B column; the other numbered parameters are dropped
pub const PARAM_B_COLUMN: &str = "PARAMETRO 8";

/// One historical monthly observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalesRecord {
    /// Month-end date identifying the period
    pub period: NaiveDate,
    /// Target sales value
    pub sales: f64,
    /// Covariate A, from "PARAMETRO 5"
    pub param_a: f64,
    /// Covariate B, from "PARAMETRO 8"
    pub param_b: f64,
}

/// Monthly sales series, chronologically ascending by period.
///
/// The series lives only for the duration of one run; it is never
/// persisted. A single operator-supplied record is appended before
/// feature computation.
#[derive(Debug, Clone, Default)]
pub struct SalesSeries {
    records: Vec<SalesRecord>,
}

impl SalesSeries {
    /// Create a series from records, ordering them by period ascending.
    pub fn from_records(mut records: Vec<SalesRecord>) -> Self {
        records.sort_by_key(|r| r.period);
        Self { records }
    }

    /// Get the records in chronological order
    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    /// Get the sales values in chronological order
    pub fn sales_values(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.sales).collect()
    }

    /// Get the last (most recent) record
    pub fn last(&self) -> Option<&SalesRecord> {
        self.records.last()
    }

    /// Get the most recent period
    pub fn last_period(&self) -> Option<NaiveDate> {
        self.records.last().map(|r| r.period)
    }

    /// Check if the series is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get the length of the series
    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// Loader for the tabular sales history
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load the sales history from a CSV file
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<SalesSeries> {
        let file = File::open(&path).map_err(|e| {
            SalesForecastError::LoadError(format!(
                "Cannot open sales spreadsheet '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let df = CsvReader::new(file)
            .infer_schema(None)
            .has_header(true)
            .finish()
            .map_err(|e| {
                SalesForecastError::LoadError(format!("Cannot parse sales spreadsheet: {}", e))
            })?;

        Self::from_dataframe(df)
    }

    /// Build the sales series from an existing DataFrame
    pub fn from_dataframe(df: DataFrame) -> Result<SalesSeries> {
        let column_names = df.get_column_names();
        for required in [
            YEAR_COLUMN,
            MONTH_COLUMN,
            TARGET_COLUMN,
            PARAM_A_COLUMN,
            PARAM_B_COLUMN,
        ] {
            if !column_names.iter().any(|name| *name == required) {
                return Err(SalesForecastError::LoadError(format!(
                    "Missing required column '{}'",
                    required
                )));
            }
        }

        let years = column_as_f64(&df, YEAR_COLUMN)?;
        let months = column_as_f64(&df, MONTH_COLUMN)?;
        let sales = column_as_f64(&df, TARGET_COLUMN)?;
        let param_a = column_as_f64(&df, PARAM_A_COLUMN)?;
        let param_b = column_as_f64(&df, PARAM_B_COLUMN)?;

        let height = df.height();
        for (name, column) in [
            (YEAR_COLUMN, &years),
            (MONTH_COLUMN, &months),
            (TARGET_COLUMN, &sales),
            (PARAM_A_COLUMN, &param_a),
            (PARAM_B_COLUMN, &param_b),
        ] {
            if column.len() != height {
                return Err(SalesForecastError::LoadError(format!(
                    "Column '{}' contains missing values",
                    name
                )));
            }
        }

        let mut records = Vec::with_capacity(height);
        for i in 0..height {
            let period = month_end(years[i] as i32, months[i] as u32)?;
            records.push(SalesRecord {
                period,
                sales: sales[i],
                param_a: param_a[i],
                param_b: param_b[i],
            });
        }

        Ok(SalesSeries::from_records(records))
    }
}

/// Get a column as f64 values, converting from the inferred numeric dtype
fn column_as_f64(df: &DataFrame, column_name: &str) -> Result<Vec<f64>> {
    let col = df.column(column_name).map_err(|e| {
        SalesForecastError::LoadError(format!("Column '{}' not found: {}", column_name, e))
    })?;

    match col.dtype() {
        DataType::Float64 => Ok(col.f64()?.into_iter().flatten().collect()),
        DataType::Float32 => Ok(col.f32()?.into_iter().flatten().map(|v| v as f64).collect()),
        DataType::Int64 => Ok(col.i64()?.into_iter().flatten().map(|v| v as f64).collect()),
        DataType::Int32 => Ok(col.i32()?.into_iter().flatten().map(|v| v as f64).collect()),
        DataType::UInt64 => Ok(col.u64()?.into_iter().flatten().map(|v| v as f64).collect()),
        DataType::UInt32 => Ok(col.u32()?.into_iter().flatten().map(|v| v as f64).collect()),
        _ => Err(SalesForecastError::LoadError(format!(
            "Column '{}' cannot be converted to f64",
            column_name
        ))),
    }
}
