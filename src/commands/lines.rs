//! The `lines` command: print the git-changed line numbers of a file.

use super::resolve_file;
use crate::cli::LinesArgs;
use crate::config::Config;
use crate::diff::{self, DeletionPolicy};
use crate::error::{DifflintError, Result};
use crate::exit_codes;
use crate::git;

/// Print one changed 1-based new-file line number per output line.
///
/// Unlike `check`, a diff that fails to parse is reported as an error here:
/// this command exists to inspect the parser's view of the diff.
pub fn cmd_lines(args: LinesArgs) -> Result<i32> {
    let (file, repo_root) = resolve_file(&args.file)?;
    let config = Config::load_or_default(&repo_root)?;

    let rel_path = file
        .strip_prefix(&repo_root)
        .map_err(|_| {
            DifflintError::UserError(format!(
                "'{}' is not inside the repository at {}",
                args.file,
                repo_root.display()
            ))
        })?
        .to_string_lossy()
        .replace('\\', "/");

    let raw = git::modified_file_diff(&repo_root, &rel_path);
    let parsed = diff::parse(&raw)?;

    let policy = if config.deletion_marks_line {
        DeletionPolicy::MarkInsertionPoint
    } else {
        DeletionPolicy::Ignore
    };

    for line in diff::changed_lines_opt(parsed.as_ref(), policy) {
        println!("{}", line);
    }

    Ok(exit_codes::SUCCESS)
}
