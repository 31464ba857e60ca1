//! Pipeline module - the clean and sample stages

pub mod clean;
pub mod sample;

use crate::data::LoaderError;
use chrono::{Local, NaiveDate, Utc};
use polars::prelude::PolarsError;
use thiserror::Error;

pub use clean::{clean_frame, run_clean, CleanReport, FINAL_COLUMNS};
pub use sample::{run_sample, sample_frame, SampleReport, SAMPLE_COLUMNS};

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Loader(#[from] LoaderError),
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Input is missing required column '{0}'")]
    MissingColumn(String),
}

/// Reference points captured once at the start of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    /// UTC calendar date used for age, tenure and the future-hire filter.
    pub run_date: NaiveDate,
    /// Local ISO-8601 time stamped on every record of the run.
    pub run_timestamp: String,
}

impl RunContext {
    pub fn now() -> Self {
        Self {
            run_date: Utc::now().date_naive(),
            run_timestamp: Local::now()
                .naive_local()
                .format("%Y-%m-%dT%H:%M:%S%.6f")
                .to_string(),
        }
    }

    pub fn fixed(run_date: NaiveDate, run_timestamp: impl Into<String>) -> Self {
        Self {
            run_date,
            run_timestamp: run_timestamp.into(),
        }
    }
}
