//! The `check` command: lint one file, filter to changed lines, report.

use std::path::Path;

use super::resolve_file;
use crate::cli::CheckArgs;
use crate::config::Config;
use crate::diff::{self, DeletionPolicy};
use crate::error::{DifflintError, Result};
use crate::exit_codes;
use crate::git;
use crate::lint::{self, Severity};

/// Run the check flow end to end.
///
/// 1. Resolve the file and its repository root.
/// 2. Load config and apply CLI overrides.
/// 3. Gate on the file extension.
/// 4. Run the linter and parse its JSON report.
/// 5. In changed-only mode, derive the changed-line set from `git diff`;
///    a diff that fails to parse falls back to unfiltered reporting.
/// 6. Filter, render, print. Findings present means exit code 2.
pub fn cmd_check(args: CheckArgs) -> Result<i32> {
    let (file, repo_root) = resolve_file(&args.file)?;
    let config = load_config(&repo_root, &args)?;

    if !config.should_check_file(&file) {
        return Err(DifflintError::UserError(format!(
            "'{}' is not a checked file type (configured extensions: {})",
            args.file,
            config.extensions.join(", ")
        )));
    }

    let reports = lint::run_linter(&config.linter_command, &file, &repo_root)?;

    let changed = if config.changed_lines_only {
        changed_line_set(&repo_root, &file, &config)
    } else {
        None
    };

    let min_severity = Severity::from(config.min_level);
    let findings = lint::filter_findings(&reports, changed.as_deref(), min_severity);

    if findings.is_empty() {
        // The notice covers both an empty changed-line set and a non-empty
        // set that intersects no findings; silence is reserved for full-file
        // mode.
        if changed.is_some() {
            println!("{}", lint::NO_FINDINGS_NOTICE);
        }
        return Ok(exit_codes::SUCCESS);
    }

    println!("{}", lint::render_findings(&findings));
    Ok(exit_codes::FINDINGS)
}

fn load_config(repo_root: &Path, args: &CheckArgs) -> Result<Config> {
    let mut config = Config::load_or_default(repo_root)?;

    if args.all {
        config.changed_lines_only = false;
    }
    if let Some(level) = args.level {
        config.min_level = level;
        config.validate()?;
    }

    Ok(config)
}

/// Derive the changed-line set for the file, or None to report unfiltered.
///
/// An empty or failed diff invocation means "no changed lines" (Some(empty)),
/// while unparseable diff text disables filtering entirely: filtering is a
/// convenience, so it degrades rather than hiding findings or crashing.
fn changed_line_set(repo_root: &Path, file: &Path, config: &Config) -> Option<Vec<u32>> {
    let rel_path = file
        .strip_prefix(repo_root)
        .ok()?
        .to_string_lossy()
        .replace('\\', "/");

    let raw = git::modified_file_diff(repo_root, &rel_path);

    let policy = if config.deletion_marks_line {
        DeletionPolicy::MarkInsertionPoint
    } else {
        DeletionPolicy::Ignore
    };

    match diff::parse(&raw) {
        Ok(parsed) => Some(diff::changed_lines_opt(parsed.as_ref(), policy)),
        Err(e) => {
            eprintln!("Warning: {}; reporting all findings", e);
            None
        }
    }
}
