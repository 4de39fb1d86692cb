//! Linter process invocation.

use crate::error::{DifflintError, Result};
use std::path::Path;
use std::process::Command;

use super::report::{FileReport, parse_report};

/// Run the configured linter command on one file and parse its JSON output.
///
/// The command string is split with shell-words and the file path is appended
/// as the final argument. A non-zero exit status is normal for linters (they
/// signal findings through it), so the exit code is ignored as long as stdout
/// parses; only spawn failures and unreadable output are errors.
///
/// # Arguments
///
/// * `command` - The linter command line from config, e.g. `eslint --format json`
/// * `file_path` - Absolute path of the file to check
/// * `cwd` - Working directory for the linter process (the repo root)
///
/// # Returns
///
/// * `Ok(Vec<FileReport>)` - Parsed findings
/// * `Err(DifflintError::LinterError)` - Spawn failure or unparseable output
pub fn run_linter<P: AsRef<Path>>(
    command: &str,
    file_path: &Path,
    cwd: P,
) -> Result<Vec<FileReport>> {
    let command = command.trim();
    if command.is_empty() {
        return Err(DifflintError::LinterError(
            "linter command is empty.\nFix: set linter_command in .difflint.yml.".to_string(),
        ));
    }

    let mut args = shell_words::split(command).map_err(|e| {
        DifflintError::LinterError(format!(
            "failed to parse linter command: {}\nCommand: {}\nFix: check for unmatched quotes or invalid escape sequences.",
            e, command
        ))
    })?;
    args.push(file_path.display().to_string());

    let program = &args[0];
    let output = Command::new(program)
        .args(&args[1..])
        .current_dir(cwd)
        .output()
        .map_err(|e| {
            DifflintError::LinterError(format!(
                "failed to execute '{}': {}\nFix: ensure the linter is installed and in PATH.",
                program, e
            ))
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let reports = parse_report(&stdout)?;

    // An empty report with a failing exit status means the linter died
    // before producing one, not that the file is clean.
    if reports.is_empty() && !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(DifflintError::LinterError(format!(
            "'{}' exited with {} and produced no report: {}",
            program,
            output.status.code().unwrap_or(-1),
            stderr.trim()
        )));
    }

    Ok(reports)
}
