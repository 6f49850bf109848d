//! Configuration management for errorf-lint.
//!
//! Handles:
//! - Command-line argument parsing
//! - The summary file taken from `GITHUB_STEP_SUMMARY`

use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::report::{ReporterConfig, SummarySink};
use crate::scanner::{ErrorfRule, DEFAULT_REQUIRED_WORDING};

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "errorf-lint")]
#[command(about = "Check that fmt.Errorf messages start with the required wording")]
#[command(version)]
pub struct Args {
    /// Go source files to check
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Wording every error message must start with
    #[arg(long, default_value = DEFAULT_REQUIRED_WORDING)]
    pub prefix: String,

    /// File the run summary is appended to
    #[arg(long, env = "GITHUB_STEP_SUMMARY", value_name = "PATH")]
    pub summary_file: Option<PathBuf>,

    /// Log level
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub files: Vec<PathBuf>,
    pub required_wording: String,
    pub summary_file: Option<PathBuf>,
    pub log_level: String,
}

impl Config {
    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        if args.prefix.is_empty() {
            bail!("--prefix must not be empty");
        }

        let summary_file = args
            .summary_file
            .filter(|path| !path.as_os_str().is_empty());

        Ok(Config {
            files: args.files,
            required_wording: args.prefix,
            summary_file,
            log_level: args.log_level,
        })
    }

    /// Explicit reporter configuration; nothing downstream reads the environment
    pub fn reporter_config(&self) -> ReporterConfig {
        ReporterConfig {
            rule: ErrorfRule::new(self.required_wording.clone()),
            summary: SummarySink::from_path(self.summary_file.clone()),
        }
    }
}
