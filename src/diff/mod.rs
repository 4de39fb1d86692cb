//! Diff parsing primitives for difflint.
//!
//! This module turns the raw output of `git diff` for one file into a
//! structured form and derives the set of changed new-file line numbers
//! from it:
//!
//! - `parse` reconstructs hunks with exact old/new line numbers
//! - `changed_lines` reduces the hunks to a sorted set of changed lines
//!
//! Parsing failures never surface to the user as a crash: the `check`
//! command falls back to unfiltered reporting when the diff text cannot be
//! trusted.

mod hunks;
mod lines;
mod parser;


// Re-export public API
pub use hunks::{DiffFile, DiffHunk, DiffLine, DiffLineKind};
pub use lines::{DeletionPolicy, changed_lines, changed_lines_opt};
pub use parser::{DiffParseError, parse};
