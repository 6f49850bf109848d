//! GitHub Actions workflow-command annotations.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::scanner::{ErrorfRule, ScanError, Violation};

/// Title shown on line-level annotations
pub const ANNOTATION_TITLE: &str = "Incorrect error message format";

/// A single `::error ...` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    Violation {
        path: PathBuf,
        violation: Violation,
        message: String,
    },
    FileNotFound {
        path: PathBuf,
    },
    ReadFailure {
        path: PathBuf,
        reason: String,
    },
}

impl Annotation {
    pub fn for_violation(path: &Path, violation: Violation, rule: &ErrorfRule) -> Self {
        let message = violation.message(rule);
        Annotation::Violation {
            path: path.to_path_buf(),
            violation,
            message,
        }
    }

    pub fn for_scan_error(path: &Path, err: &ScanError) -> Self {
        match err {
            ScanError::NotFound => Annotation::FileNotFound {
                path: path.to_path_buf(),
            },
            ScanError::ReadFailure(source) => Annotation::ReadFailure {
                path: path.to_path_buf(),
                reason: source.to_string(),
            },
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Annotation::Violation { path, .. }
            | Annotation::FileNotFound { path }
            | Annotation::ReadFailure { path, .. } => path,
        }
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Annotation::Violation {
                path,
                violation,
                message,
            } => write!(
                f,
                "::error title={},file={},line={},col={},endLine={},endColumn={}::{}",
                ANNOTATION_TITLE,
                path.display(),
                violation.line,
                violation.col,
                violation.line,
                violation.end_col,
                message
            ),
            Annotation::FileNotFound { path } => {
                write!(f, "::error file={}::File not found.", path.display())
            }
            Annotation::ReadFailure { path, reason } => write!(
                f,
                "::error file={}::Error processing file: {}",
                path.display(),
                reason
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn violation_line_format() {
        let rule = ErrorfRule::default();
        let violation = rule
            .check_line(3, r#"fmt.Errorf("could not open config")"#)
            .expect("violation");
        let annotation = Annotation::for_violation(Path::new("pkg/a.go"), violation, &rule);

        assert_eq!(
            annotation.to_string(),
            "::error title=Incorrect error message format,file=pkg/a.go,line=3,col=13,endLine=3,endColumn=33::Error message must start with \"failed to\". Found: \"could not open config\""
        );
    }

    #[test]
    fn not_found_has_no_position() {
        let annotation = Annotation::for_scan_error(Path::new("missing.go"), &ScanError::NotFound);
        assert_eq!(annotation.to_string(), "::error file=missing.go::File not found.");
        assert_eq!(annotation.path(), Path::new("missing.go"));
    }

    #[test]
    fn read_failure_includes_reason() {
        let err = ScanError::ReadFailure(io::Error::new(io::ErrorKind::InvalidData, "bad utf-8"));
        let annotation = Annotation::for_scan_error(Path::new("x.go"), &err);
        assert_eq!(
            annotation.to_string(),
            "::error file=x.go::Error processing file: bad utf-8"
        );
    }
}
