//! Changed-line extraction from parsed hunks.

use std::collections::BTreeSet;

use super::hunks::{DiffFile, DiffLineKind};

/// How a pure deletion (a hunk with `new_count == 0`) contributes to the
/// changed-line set. There is no new-file line to point at, but findings
/// anchored at the deletion point usually deserve a look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletionPolicy {
    /// Mark the insertion point of the deletion as a touched line.
    #[default]
    MarkInsertionPoint,
    /// Deletions contribute nothing.
    Ignore,
}

/// Extract the sorted, deduplicated new-file line numbers that changed.
///
/// Added lines always contribute their new-file number; context lines never
/// do. Removed lines carry no new-file number, but when a hunk is a pure
/// deletion the hunk's `new_start` is reported as touched according to
/// `policy`. git reports top-of-file deletions as `+0,0`, so the insertion
/// point is clamped to line 1.
///
/// This function is pure and total: malformed input was already rejected at
/// parse time. Overlapping or adjacent hunks collapse to one entry per line.
///
/// # Arguments
///
/// * `diff` - Parsed hunks for one file
/// * `policy` - Pure-deletion handling
///
/// # Returns
///
/// Ascending 1-based new-file line numbers, without duplicates.
pub fn changed_lines(diff: &DiffFile, policy: DeletionPolicy) -> Vec<u32> {
    let mut lines: BTreeSet<u32> = BTreeSet::new();

    for hunk in &diff.hunks {
        for line in &hunk.lines {
            if line.kind == DiffLineKind::Added
                && let Some(new_line) = line.new_line
            {
                lines.insert(new_line);
            }
        }

        if hunk.new_count == 0 && policy == DeletionPolicy::MarkInsertionPoint {
            lines.insert(hunk.new_start.max(1));
        }
    }

    lines.into_iter().collect()
}

/// Convenience wrapper for an optional parse result: `None` (no hunks, no
/// changes) yields the empty set.
pub fn changed_lines_opt(diff: Option<&DiffFile>, policy: DeletionPolicy) -> Vec<u32> {
    match diff {
        Some(diff) => changed_lines(diff, policy),
        None => Vec::new(),
    }
}
