//! Reporter
//!
//! Drives the scanner over every input path, writes one annotation per
//! finding and finishes with the run summary.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;

use super::annotation::Annotation;
use super::summary::{RunSummary, SummarySink};
use crate::scanner::{scan_file, ErrorfRule};

/// Everything the reporter needs, resolved up front
#[derive(Debug, Clone, Default)]
pub struct ReporterConfig {
    pub rule: ErrorfRule,
    pub summary: SummarySink,
}

/// Writes annotations for a set of files to `out`
pub struct Reporter<W: Write> {
    config: ReporterConfig,
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(config: ReporterConfig, out: W) -> Self {
        Self { config, out }
    }

    /// Annotations for one path. Each annotation counts as one error.
    pub fn check_path(&self, path: &Path) -> Vec<Annotation> {
        match scan_file(path, &self.config.rule) {
            Ok(violations) => violations
                .into_iter()
                .map(|v| Annotation::for_violation(path, v, &self.config.rule))
                .collect(),
            Err(e) => {
                log::debug!("{}: {}", path.display(), e);
                vec![Annotation::for_scan_error(path, &e)]
            }
        }
    }

    /// Check every path in order and write the summary.
    ///
    /// Per-file failures become annotations; only a failure to write the
    /// output itself is returned as an error.
    pub fn run(&mut self, paths: &[PathBuf]) -> Result<RunSummary> {
        let mut summary = RunSummary::new();

        for path in paths {
            let annotations = self.check_path(path);
            for annotation in &annotations {
                writeln!(self.out, "{annotation}")?;
            }
            summary.record(annotations.len());
        }

        summary.write(&self.config.summary, &mut self.out)?;
        self.out.flush()?;

        Ok(summary)
    }

    /// Give back the output writer
    pub fn into_inner(self) -> W {
        self.out
    }
}
