//! Error types for the difflint CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::diff::DiffParseError;
use crate::exit_codes;
use thiserror::Error;

/// Main error type for difflint operations.
///
/// Each variant maps to a specific exit code. Diff parse failures are a
/// separate nested enum because the `check` command recovers from them by
/// falling back to unfiltered reporting instead of exiting.
#[derive(Error, Debug)]
pub enum DifflintError {
    /// User provided invalid arguments or the system is in an invalid state.
    #[error("{0}")]
    UserError(String),

    /// Git operation failed.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// The linter could not be invoked or produced unreadable output.
    #[error("Linter invocation failed: {0}")]
    LinterError(String),

    /// The diff output could not be parsed.
    #[error("Diff parsing failed: {0}")]
    Diff(#[from] DiffParseError),
}

impl DifflintError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            DifflintError::UserError(_) => exit_codes::USER_ERROR,
            DifflintError::GitError(_) => exit_codes::GIT_FAILURE,
            DifflintError::LinterError(_) => exit_codes::LINTER_FAILURE,
            // A diff parse error that escapes all the way to main is a git
            // output problem from the user's point of view.
            DifflintError::Diff(_) => exit_codes::GIT_FAILURE,
        }
    }
}

/// Result type alias for difflint operations.
pub type Result<T> = std::result::Result<T, DifflintError>;
