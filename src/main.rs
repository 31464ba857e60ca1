//! Roster Clean - command line entry point
//!
//! `clean` runs Stage A, `sample` runs Stage B, `run` does both in order.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use roster_clean::config::{
    DEFAULT_CLEAN_OUTPUT, DEFAULT_RAW_INPUT, DEFAULT_SAMPLE_OUTPUT, DEFAULT_SAMPLE_SIZE,
};
use roster_clean::{run_clean, run_sample, CleanReport, PipelineConfig, RunContext, SampleReport};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "roster-clean")]
#[command(about = "Cleans an employee roster CSV and writes a sample extract", long_about = None)]
#[command(version)]
struct Cli {
    /// Print run reports as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dedup, normalize and derive fields from the raw roster
    Clean {
        #[arg(long, default_value = DEFAULT_RAW_INPUT)]
        input: PathBuf,

        #[arg(long, default_value = DEFAULT_CLEAN_OUTPUT)]
        output: PathBuf,
    },

    /// Extract the first rows of the cleaned roster
    Sample {
        #[arg(long, default_value = DEFAULT_CLEAN_OUTPUT)]
        input: PathBuf,

        #[arg(long, default_value = DEFAULT_SAMPLE_OUTPUT)]
        output: PathBuf,

        /// Number of rows to keep
        #[arg(long, default_value_t = DEFAULT_SAMPLE_SIZE)]
        rows: usize,
    },

    /// Clean, then sample
    Run {
        #[arg(long, default_value = DEFAULT_RAW_INPUT)]
        input: PathBuf,

        #[arg(long, default_value = DEFAULT_CLEAN_OUTPUT)]
        clean_output: PathBuf,

        #[arg(long, default_value = DEFAULT_SAMPLE_OUTPUT)]
        sample_output: PathBuf,
    },
}

fn init_logging() {
    // RUST_LOG=roster_clean=debug shows every degraded field
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("roster_clean=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_clean(report: &CleanReport, config: &PipelineConfig, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(report)?);
    } else {
        println!(
            "Wrote cleaned data to {} with {} rows",
            config.clean_output.display(),
            report.rows_written
        );
    }
    Ok(())
}

fn print_sample(report: &SampleReport, config: &PipelineConfig, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(report)?);
    } else {
        println!(
            "Wrote sample to {} with {} rows",
            config.sample_output.display(),
            report.rows_written
        );
    }
    Ok(())
}

fn clean(config: &PipelineConfig, json: bool) -> Result<()> {
    let ctx = RunContext::now();
    let report = run_clean(&config.raw_input, &config.clean_output, &ctx)
        .with_context(|| format!("Clean stage failed for {}", config.raw_input.display()))?;
    print_clean(&report, config, json)
}

fn sample(config: &PipelineConfig, json: bool) -> Result<()> {
    let report = run_sample(&config.clean_output, &config.sample_output, config.sample_size)
        .with_context(|| format!("Sample stage failed for {}", config.clean_output.display()))?;
    print_sample(&report, config, json)
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let defaults = PipelineConfig::default();

    match cli.command {
        Commands::Clean { input, output } => {
            let config = PipelineConfig {
                raw_input: input,
                clean_output: output,
                ..defaults
            };
            clean(&config, cli.json)
        }
        Commands::Sample {
            input,
            output,
            rows,
        } => {
            let config = PipelineConfig {
                clean_output: input,
                sample_output: output,
                sample_size: rows,
                ..defaults
            };
            sample(&config, cli.json)
        }
        Commands::Run {
            input,
            clean_output,
            sample_output,
        } => {
            let config = PipelineConfig {
                raw_input: input,
                clean_output,
                sample_output,
                ..defaults
            };
            clean(&config, cli.json)?;
            sample(&config, cli.json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;

    #[test]
    fn test_cli_parse_clean_defaults() -> Result<()> {
        let args = Cli::parse_from(["roster-clean", "clean"]);
        match args.command {
            Commands::Clean { input, output } => {
                assert_eq!(input, PathBuf::from(DEFAULT_RAW_INPUT));
                assert_eq!(output, PathBuf::from(DEFAULT_CLEAN_OUTPUT));
                assert!(!args.json);
                Ok(())
            }
            _ => bail!("Expected Clean command"),
        }
    }

    #[test]
    fn test_cli_parse_sample_rows() -> Result<()> {
        let args = Cli::parse_from(["roster-clean", "sample", "--rows", "3", "--json"]);
        match args.command {
            Commands::Sample { rows, input, .. } => {
                assert_eq!(rows, 3);
                assert_eq!(input, PathBuf::from(DEFAULT_CLEAN_OUTPUT));
                assert!(args.json);
                Ok(())
            }
            _ => bail!("Expected Sample command"),
        }
    }

    #[test]
    fn test_cli_parse_run_paths() -> Result<()> {
        let args = Cli::parse_from([
            "roster-clean",
            "run",
            "--input",
            "/tmp/raw.csv",
            "--sample-output",
            "/tmp/s.csv",
        ]);
        match args.command {
            Commands::Run {
                input,
                clean_output,
                sample_output,
            } => {
                assert_eq!(input, PathBuf::from("/tmp/raw.csv"));
                assert_eq!(clean_output, PathBuf::from(DEFAULT_CLEAN_OUTPUT));
                assert_eq!(sample_output, PathBuf::from("/tmp/s.csv"));
                Ok(())
            }
            _ => bail!("Expected Run command"),
        }
    }
}
