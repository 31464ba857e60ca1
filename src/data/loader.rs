//! CSV Data Loader Module
//! Handles CSV file loading and column extraction using Polars.

use polars::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Cell values read as missing, the same set pandas treats as NA by default.
pub const NA_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("No data loaded from {}", .0.display())]
    NoData(PathBuf),
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Handles CSV file loading with Polars.
///
/// Every column is read as a string: formatted numbers and dates stay
/// untouched until they are coerced explicitly.
pub struct DataLoader;

impl DataLoader {
    /// Load a header-first CSV file with schema inference disabled.
    pub fn load_csv(file_path: &Path) -> Result<DataFrame, LoaderError> {
        if !file_path.is_file() {
            return Err(LoaderError::NotFound(file_path.to_path_buf()));
        }
        let size = fs::metadata(file_path)
            .map_err(|source| LoaderError::Io {
                path: file_path.to_path_buf(),
                source,
            })?
            .len();
        if size == 0 {
            return Err(LoaderError::NoData(file_path.to_path_buf()));
        }

        let null_values = NA_TOKENS.iter().map(|t| (*t).into()).collect();

        // Zero inference rows reads every column as String
        let df = LazyCsvReader::new(file_path)
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .with_null_values(Some(NullValues::AllColumns(null_values)))
            .finish()?
            .collect()?;

        if df.width() == 0 {
            return Err(LoaderError::NoData(file_path.to_path_buf()));
        }
        let df = Self::drop_blank_rows(&df)?;

        tracing::debug!(
            path = %file_path.display(),
            rows = df.height(),
            columns = df.width(),
            "Loaded CSV"
        );
        Ok(df)
    }

    /// Drop rows in which every cell is missing, such as blank lines.
    fn drop_blank_rows(df: &DataFrame) -> Result<DataFrame, LoaderError> {
        let mut keep = BooleanChunked::full("keep".into(), false, df.height());
        for col in df.get_columns() {
            keep = &keep | &col.as_materialized_series().is_not_null();
        }
        Ok(df.filter(&keep)?)
    }

    /// Get list of column names from a DataFrame.
    pub fn get_columns(df: &DataFrame) -> Vec<String> {
        df.get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Get the values of a string column, one entry per row.
    ///
    /// A column absent from the source is materialized as all-missing.
    pub fn string_column(df: &DataFrame, column: &str) -> Result<Vec<Option<String>>, LoaderError> {
        let Ok(col) = df.column(column) else {
            return Ok(vec![None; df.height()]);
        };

        let as_str = col.cast(&DataType::String)?;
        let values = as_str
            .as_materialized_series()
            .str()?
            .into_iter()
            .map(|v| v.map(str::to_string))
            .collect();
        Ok(values)
    }
}
