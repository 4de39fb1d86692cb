//! Linter report types and JSON deserialization.
//!
//! The linter is expected to emit a JSON array of per-file reports on
//! stdout, one entry per checked file:
//!
//! ```json
//! [{"path": "src/app.js",
//!   "errors": [{"line": 4, "column": 7, "severity": 2,
//!               "rule": "no-unused-vars", "message": "'x' is never used"}]}]
//! ```

use crate::error::{DifflintError, Result};
use serde::Deserialize;

/// Severity of a finding, in the 0/1/2 scheme most linters emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(from = "u8")]
pub enum Severity {
    Info,
    Warn,
    Error,
}

impl From<u8> for Severity {
    fn from(level: u8) -> Self {
        match level {
            0 => Severity::Info,
            1 => Severity::Warn,
            _ => Severity::Error,
        }
    }
}

impl Severity {
    /// Rendering tag. Info-level findings carry none.
    pub fn tag(self) -> &'static str {
        match self {
            Severity::Info => "",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

/// A single finding reported by the linter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Finding {
    /// 1-based line number the finding is anchored at.
    pub line: u32,
    /// 1-based column number.
    #[serde(default)]
    pub column: u32,
    pub severity: Severity,
    #[serde(default)]
    pub rule: String,
    pub message: String,
}

/// All findings the linter reported for one file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileReport {
    pub path: String,
    #[serde(default)]
    pub errors: Vec<Finding>,
}

/// Parse linter stdout as a JSON report.
///
/// # Arguments
///
/// * `stdout` - Raw stdout text from the linter process
///
/// # Returns
///
/// * `Ok(Vec<FileReport>)` - Parsed reports (empty stdout means no findings)
/// * `Err(DifflintError::LinterError)` - stdout was not a valid JSON report
pub fn parse_report(stdout: &str) -> Result<Vec<FileReport>> {
    let stdout = stdout.trim();
    if stdout.is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(stdout).map_err(|e| {
        DifflintError::LinterError(format!(
            "failed to parse linter JSON output: {}\nFix: configure a linter command that emits a JSON report.",
            e
        ))
    })
}
