//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for difflint.
///
/// This struct represents the contents of `.difflint.yml` at the repository
/// root. Unknown fields in the YAML are ignored for forward compatibility,
/// and every field has a default so the file itself is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Linter command line. Split with shell quoting rules; the checked
    /// file's path is appended as the final argument. The command must emit
    /// a JSON report on stdout.
    #[serde(default = "default_linter_command")]
    pub linter_command: String,

    /// File extensions to check (lowercase, no leading dots). Files with
    /// other extensions are rejected before the linter runs.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Whether to restrict findings to git-changed lines (default: true).
    /// The `--all` flag overrides this to false for one run.
    #[serde(default = "default_true")]
    pub changed_lines_only: bool,

    /// Minimum severity level to report: 0 info, 1 warning, 2 error.
    #[serde(default = "default_min_level")]
    pub min_level: u8,

    /// Whether a purely deleted region marks its insertion point as a
    /// changed line (default: true). With false, deletions contribute no
    /// lines and findings anchored there are dropped in changed-only mode.
    #[serde(default = "default_true")]
    pub deletion_marks_line: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            linter_command: default_linter_command(),
            extensions: default_extensions(),
            changed_lines_only: true,
            min_level: default_min_level(),
            deletion_marks_line: true,
        }
    }
}
