//! Roster Clean - Employee roster cleaning pipeline
//!
//! Stage A cleans a raw roster CSV (dedup, normalization, coercion, derived
//! fields, projection). Stage B extracts a small fixed-column sample of the
//! cleaned output.

pub mod config;
pub mod data;
pub mod pipeline;
pub mod roster;

pub use config::PipelineConfig;
pub use pipeline::{run_clean, run_sample, CleanReport, PipelineError, RunContext, SampleReport};
