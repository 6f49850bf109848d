//! Run summary: error totals, exit status and the end-of-run report.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const SUMMARY_HEADING: &str = "### Go Error Message Linting";

/// Where the end-of-run report goes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SummarySink {
    /// Append to a file, e.g. the path in `GITHUB_STEP_SUMMARY`
    File(PathBuf),
    #[default]
    Stdout,
}

impl SummarySink {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) if !path.as_os_str().is_empty() => SummarySink::File(path),
            _ => SummarySink::Stdout,
        }
    }
}

/// Aggregate count of errors across all files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub total_errors: usize,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, errors: usize) {
        self.total_errors += errors;
    }

    pub fn has_errors(&self) -> bool {
        self.total_errors > 0
    }

    /// Process exit status: 1 if anything was reported, else 0
    pub fn exit_code(&self) -> u8 {
        u8::from(self.has_errors())
    }

    fn count_line(&self) -> String {
        format!("Found {} formatting error(s).", self.total_errors)
    }

    /// Write the report, if there is anything to report.
    ///
    /// A sink file that cannot be appended to is logged and the report goes
    /// to `stdout` instead.
    pub fn write<W: Write>(&self, sink: &SummarySink, stdout: &mut W) -> io::Result<()> {
        if !self.has_errors() {
            return Ok(());
        }

        if let SummarySink::File(path) = sink {
            match self.append_to(path) {
                Ok(()) => return Ok(()),
                Err(e) => log::warn!(
                    "Failed to append summary to {}: {}",
                    path.display(),
                    e
                ),
            }
        }

        writeln!(stdout)?;
        writeln!(stdout, "{}", self.count_line())
    }

    fn append_to(&self, path: &Path) -> io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        write!(file, "{}\n\n{}\n", SUMMARY_HEADING, self.count_line())
    }
}
