//! Scan Engine
//!
//! Line-by-line scanning of Go sources for `fmt.Errorf` messages that do not
//! start with the required wording.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use super::rule::ErrorfRule;

/// An error message that does not start with the required wording
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// 1-based line number
    pub line: usize,
    /// 1-based column of the first character of the message
    pub col: usize,
    /// 1-based column of the last character of the message
    pub end_col: usize,
    /// The offending message text
    pub text: String,
}

impl Violation {
    /// Human-readable explanation used in annotations
    pub fn message(&self, rule: &ErrorfRule) -> String {
        format!(
            "Error message must start with \"{}\". Found: \"{}\"",
            rule.required(),
            self.text
        )
    }
}

/// Why a file could not be scanned
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("file not found")]
    NotFound,
    #[error("{0}")]
    ReadFailure(#[source] io::Error),
}

impl From<io::Error> for ScanError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => ScanError::NotFound,
            _ => ScanError::ReadFailure(err),
        }
    }
}

/// Outcome of scanning a single path
pub type FileResult = Result<Vec<Violation>, ScanError>;

/// Scan a file on disk.
///
/// The file handle is dropped before returning, on success or failure.
pub fn scan_file(path: &Path, rule: &ErrorfRule) -> FileResult {
    let file = File::open(path)?;
    let violations = scan_reader(BufReader::new(file), rule).map_err(ScanError::ReadFailure)?;
    log::debug!("{}: {} violation(s)", path.display(), violations.len());
    Ok(violations)
}

/// Scan any buffered source, one line at a time.
///
/// Fails on I/O errors and on invalid UTF-8.
pub fn scan_reader<R: BufRead>(mut reader: R, rule: &ErrorfRule) -> io::Result<Vec<Violation>> {
    let mut violations = Vec::new();
    let mut line_buffer = String::new();
    let mut line_num = 0;

    loop {
        line_buffer.clear();
        if reader.read_line(&mut line_buffer)? == 0 {
            break;
        }
        line_num += 1;

        let line = line_buffer.trim_end_matches('\n').trim_end_matches('\r');
        if let Some(violation) = rule.check_line(line_num, line) {
            violations.push(violation);
        }
    }

    Ok(violations)
}

/// Scan in-memory content
pub fn scan_text(content: &str, rule: &ErrorfRule) -> Vec<Violation> {
    content
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| rule.check_line(idx + 1, line))
        .collect()
}
