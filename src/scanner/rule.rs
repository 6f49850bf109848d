//! Errorf Rule
//!
//! The textual pattern and the required-wording check for one line.

use regex::Regex;

use super::engine::Violation;

/// Wording every `fmt.Errorf` message must start with unless overridden.
pub const DEFAULT_REQUIRED_WORDING: &str = "failed to";

/// A `fmt.Errorf` call immediately followed by a non-empty string literal.
const ERRORF_PATTERN: &str = r#"fmt\.Errorf\("([^"]+)""#;

/// Matches `fmt.Errorf("...")` calls and checks the message prefix
#[derive(Debug, Clone)]
pub struct ErrorfRule {
    pattern: Regex,
    required: String,
}

impl Default for ErrorfRule {
    fn default() -> Self {
        Self::new(DEFAULT_REQUIRED_WORDING)
    }
}

impl ErrorfRule {
    pub fn new(required: impl Into<String>) -> Self {
        Self {
            // The pattern is a compile-time constant.
            pattern: Regex::new(ERRORF_PATTERN).expect("errorf pattern is valid"),
            required: required.into(),
        }
    }

    /// The wording messages must start with
    pub fn required(&self) -> &str {
        &self.required
    }

    /// Check the first `fmt.Errorf` call on a line.
    ///
    /// Columns are 1-based and counted in characters. `end_col` is the
    /// column of the last captured character.
    pub fn check_line(&self, line_num: usize, line: &str) -> Option<Violation> {
        let captures = self.pattern.captures(line)?;
        let message = captures.get(1)?;

        if message.as_str().starts_with(&self.required) {
            return None;
        }

        let col = line[..message.start()].chars().count() + 1;
        let end_col = line[..message.end()].chars().count();

        Some(Violation {
            line: line_num,
            col,
            end_col,
            text: message.as_str().to_string(),
        })
    }
}
