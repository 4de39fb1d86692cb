//! Command implementations for difflint.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Commands return the process exit code so that "findings
//! were reported" (exit 2) stays distinct from hard errors.

mod check;
mod lines;

use crate::cli::Command;
use crate::error::{DifflintError, Result};
use crate::git;
use std::path::{Path, PathBuf};

/// Dispatch a command to its implementation.
///
/// Returns the exit code to terminate with on success; errors carry their
/// own exit code mapping.
pub fn dispatch(command: Command) -> Result<i32> {
    match command {
        Command::Check(args) => check::cmd_check(args),
        Command::Lines(args) => lines::cmd_lines(args),
    }
}

/// Canonicalize the target file and locate its repository root.
fn resolve_file(raw: &str) -> Result<(PathBuf, PathBuf)> {
    let file = Path::new(raw)
        .canonicalize()
        .map_err(|e| DifflintError::UserError(format!("cannot access file '{}': {}", raw, e)))?;

    if !file.is_file() {
        return Err(DifflintError::UserError(format!("'{}' is not a file", raw)));
    }

    let parent = file
        .parent()
        .ok_or_else(|| DifflintError::UserError(format!("'{}' has no parent directory", raw)))?;
    let repo_root = git::get_repo_root(parent)?
        .canonicalize()
        .map_err(|e| DifflintError::GitError(format!("cannot access repository root: {}", e)))?;

    Ok((file, repo_root))
}
