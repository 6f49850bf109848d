//! errorf-lint
//!
//! A small CI lint that checks Go `fmt.Errorf` messages start with a
//! required wording and reports offenders as GitHub Actions annotations.
//!
//! This library provides:
//! - Line-by-line textual scanning of Go sources
//! - Annotation formatting and the run summary
//! - Configuration from the command line and environment

pub mod config;
pub mod report;
pub mod scanner;

pub use config::Config;
pub use report::{Annotation, Reporter, ReporterConfig, RunSummary, SummarySink};
pub use scanner::{scan_file, ErrorfRule, ScanError, Violation};
