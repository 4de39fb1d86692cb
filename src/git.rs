//! Git command runner for difflint.
//!
//! Provides a safe wrapper around git commands with captured stdout/stderr
//! and structured error handling. All git operations go through this module.

use crate::error::{DifflintError, Result};
use std::path::Path;
use std::process::{Command, Output};

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command. Not trimmed: diff text is
    /// whitespace-sensitive (a context line can be a single space).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    /// Create a new GitOutput from raw output bytes.
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    /// Returns stdout with surrounding whitespace removed.
    pub fn trimmed(&self) -> &str {
        self.stdout.trim()
    }
}

/// Run a git command with the specified working directory.
///
/// # Arguments
///
/// * `cwd` - The working directory to run the command in
/// * `args` - The git command arguments (without "git" prefix)
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(DifflintError::GitError)` - On non-zero exit code (mapped to exit code 3)
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let cwd = cwd.as_ref();

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            DifflintError::GitError(format!(
                "failed to execute git {}: {}",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if git_output.stderr.is_empty() {
            git_output.trimmed().to_string()
        } else {
            git_output.stderr.clone()
        };

        Err(DifflintError::GitError(format!(
            "git {} failed (exit code {}): {}",
            args.first().unwrap_or(&""),
            exit_code,
            error_msg
        )))
    }
}

/// Get the repository root directory using `git rev-parse --show-toplevel`.
///
/// # Arguments
///
/// * `cwd` - The directory to start the search from
///
/// # Returns
///
/// * `Ok(PathBuf)` - The absolute path to the repository root
/// * `Err(DifflintError::UserError)` - If not inside a git repository (exit code 1)
pub fn get_repo_root<P: AsRef<Path>>(cwd: P) -> Result<std::path::PathBuf> {
    let cwd = cwd.as_ref();

    let output = Command::new("git")
        .current_dir(cwd)
        .args(["rev-parse", "--show-toplevel"])
        .output()
        .map_err(|e| {
            DifflintError::UserError(format!("failed to execute git: {} (is git installed?)", e))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(std::path::PathBuf::from(git_output.trimmed()))
    } else {
        // "not a git repository" is a clean user error (exit 1), not a git
        // error (exit 3).
        let stderr = &git_output.stderr;
        if stderr.contains("not a git repository") || stderr.contains("fatal:") {
            Err(DifflintError::UserError(
                "not inside a git repository. Run this command from within a git repository."
                    .to_string(),
            ))
        } else {
            Err(DifflintError::UserError(format!(
                "git command failed: {}",
                if stderr.is_empty() {
                    git_output.trimmed()
                } else {
                    stderr
                }
            )))
        }
    }
}

/// Get the unified diff for a single tracked, modified file.
///
/// Runs `git diff --diff-filter=M -M --no-ext-diff -- <path>` relative to the
/// repository root. Failures degrade to empty text: filtering by changed
/// lines is a convenience, so a broken diff invocation must map to "no
/// changed lines" rather than surface as a fatal error.
///
/// # Arguments
///
/// * `repo_root` - The repository root directory
/// * `rel_path` - The file path, relative to `repo_root`
///
/// # Returns
///
/// Raw diff text, or an empty string when the file is unmodified or the
/// invocation failed.
pub fn modified_file_diff<P: AsRef<Path>>(repo_root: P, rel_path: &str) -> String {
    match run_git(
        repo_root,
        &["diff", "--diff-filter=M", "-M", "--no-ext-diff", "--", rel_path],
    ) {
        Ok(output) => output.stdout,
        Err(_) => String::new(),
    }
}
