//! Stage B: a small fixed-column extract of the cleaned roster.

use super::PipelineError;
use crate::data::{write_csv_atomic, DataLoader};
use polars::prelude::*;
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Sample columns, in order.
pub const SAMPLE_COLUMNS: [&str; 8] = [
    "employee_id",
    "full_name",
    "email",
    "salary",
    "salary_band",
    "age",
    "tenure_years",
    "department",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampleReport {
    pub rows_available: usize,
    pub rows_written: usize,
}

/// First `limit` rows of `df`, restricted to `SAMPLE_COLUMNS`. File order is kept.
pub fn sample_frame(df: &DataFrame, limit: usize) -> Result<DataFrame, PipelineError> {
    if let Some(missing) = SAMPLE_COLUMNS.iter().find(|c| df.column(c).is_err()) {
        return Err(PipelineError::MissingColumn(missing.to_string()));
    }

    let selected = df.select(SAMPLE_COLUMNS)?;
    Ok(selected.head(Some(limit)))
}

/// Stage B end to end. The cleaned file is read all-string so values are copied verbatim.
pub fn run_sample(
    input: &Path,
    output: &Path,
    limit: usize,
) -> Result<SampleReport, PipelineError> {
    let cleaned = DataLoader::load_csv(input)?;
    let sample = sample_frame(&cleaned, limit)?;
    write_csv_atomic(&sample, output)?;

    let report = SampleReport {
        rows_available: cleaned.height(),
        rows_written: sample.height(),
    };
    info!(
        output = %output.display(),
        rows = report.rows_written,
        "Wrote roster sample"
    );
    Ok(report)
}
