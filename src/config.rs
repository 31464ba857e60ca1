//! Fixed pipeline locations and limits.

use std::path::PathBuf;

pub const DEFAULT_RAW_INPUT: &str = "data/input/employees_raw.csv";
pub const DEFAULT_CLEAN_OUTPUT: &str = "output/employees_clean.csv";
pub const DEFAULT_SAMPLE_OUTPUT: &str = "output/employees_sample.csv";
pub const DEFAULT_SAMPLE_SIZE: usize = 10;

/// Where each stage reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub raw_input: PathBuf,
    pub clean_output: PathBuf,
    pub sample_output: PathBuf,
    pub sample_size: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            raw_input: PathBuf::from(DEFAULT_RAW_INPUT),
            clean_output: PathBuf::from(DEFAULT_CLEAN_OUTPUT),
            sample_output: PathBuf::from(DEFAULT_SAMPLE_OUTPUT),
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}
