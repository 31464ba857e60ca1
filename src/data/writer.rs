//! CSV Writer Module
//! Persists DataFrames so readers never observe a partially written file.

use super::LoaderError;
use polars::prelude::*;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Null out empty strings so they are written as bare empty cells, not `""`.
fn blank_empty_strings(df: &DataFrame) -> PolarsResult<DataFrame> {
    let columns = df
        .get_columns()
        .iter()
        .map(|col| {
            if col.dtype() != &DataType::String {
                return Ok(col.clone());
            }
            let blanked: StringChunked = col
                .as_materialized_series()
                .str()?
                .into_iter()
                .map(|v| v.filter(|s| !s.is_empty()))
                .collect();
            Ok(Column::from(blanked.with_name(col.name().clone()).into_series()))
        })
        .collect::<PolarsResult<Vec<_>>>()?;
    DataFrame::new(columns)
}

/// Write a DataFrame as CSV (with header) to `path` atomically.
///
/// The frame is serialized into a temporary file in the target directory,
/// which is then renamed over `path`. Missing values and empty strings are both
/// written as empty cells.
pub fn write_csv_atomic(df: &DataFrame, path: &Path) -> Result<(), LoaderError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let io_err = |source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    };

    fs::create_dir_all(parent).map_err(io_err)?;

    // Same directory as the target so the rename stays on one filesystem
    let mut temp_file = NamedTempFile::new_in(parent).map_err(io_err)?;

    let mut out = blank_empty_strings(df)?;
    CsvWriter::new(temp_file.as_file_mut())
        .include_header(true)
        .finish(&mut out)?;
    temp_file.as_file_mut().flush().map_err(io_err)?;

    temp_file.persist(path).map_err(|e| io_err(e.error))?;

    tracing::debug!(path = %path.display(), rows = df.height(), "Wrote CSV");
    Ok(())
}
