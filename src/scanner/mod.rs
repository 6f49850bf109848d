//! Scanner
//!
//! Textual detection of `fmt.Errorf` messages with the wrong wording.
//! No Go grammar is involved; each line is matched independently.

pub mod engine;
pub mod rule;

pub use engine::{scan_file, scan_reader, scan_text, FileResult, ScanError, Violation};
pub use rule::{ErrorfRule, DEFAULT_REQUIRED_WORDING};
