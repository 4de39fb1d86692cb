//! Unified-diff text parser.
//!
//! Consumes the raw output of `git diff` for a single file and reconstructs
//! the hunk structure with exact old/new line numbers. Only the conventional
//! unified format with `@@ -a,b +c,d @@` headers is handled; this module
//! never computes diffs itself.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

use super::hunks::{DiffFile, DiffHunk, DiffLine};

/// Hunk header pattern. Counts are optional and default to 1 per the
/// unified-diff convention; trailing section context after the closing `@@`
/// is allowed and ignored.
static HUNK_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@@ -(\d+)(?:,(\d+))? \+(\d+)(?:,(\d+))? @@").expect("hunk header regex")
});

/// Marker emitted by git when a file version lacks a trailing newline.
const NO_NEWLINE_MARKER: &str = "\\ No newline at end of file";

/// Errors produced while parsing diff text.
///
/// Callers recover from these by falling back to unfiltered reporting;
/// producing line numbers known to be wrong is never an option.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiffParseError {
    /// A line opened with `@@` but its integer fields could not be parsed.
    #[error("malformed hunk header: {0}")]
    MalformedHunkHeader(String),

    /// A hunk body line had an unknown leading character.
    #[error("unrecognized line in hunk body: {0}")]
    UnrecognizedBodyLine(String),

    /// A hunk body consumed a different number of lines than its header
    /// declared, so the reconstructed line numbers cannot be trusted.
    #[error(
        "hunk @@ -{old_start},{old_declared} +{new_start},{new_declared} @@ consumed \
         {old_seen} old and {new_seen} new lines"
    )]
    HunkCountMismatch {
        old_start: u32,
        new_start: u32,
        old_declared: u32,
        new_declared: u32,
        old_seen: u32,
        new_seen: u32,
    },
}

/// Parse raw unified-diff text into hunks with reconstructed line numbers.
///
/// Metadata lines before the first hunk header (`diff --git`, `index`,
/// `---`/`+++`, mode lines and so on) are skipped. Returns `Ok(None)` when
/// the text contains no hunk header at all, which covers empty output from
/// an unmodified file.
///
/// # Arguments
///
/// * `raw` - Diff text as produced by `git diff` for one file
///
/// # Returns
///
/// * `Ok(Some(DiffFile))` - At least one hunk was parsed
/// * `Ok(None)` - No hunks found (empty or preamble-only input)
/// * `Err(DiffParseError)` - The text matched the format but was inconsistent
pub fn parse(raw: &str) -> Result<Option<DiffFile>, DiffParseError> {
    let mut hunks: Vec<DiffHunk> = Vec::new();
    let mut current: Option<OpenHunk> = None;

    for line in raw.lines() {
        if line.starts_with("@@") {
            let header = parse_hunk_header(line)?;
            if let Some(open) = current.take() {
                hunks.push(open.finish()?);
            }
            current = Some(OpenHunk::new(header));
            continue;
        }

        match current.as_mut() {
            // Preamble before the first hunk carries no line-number
            // information for this parser.
            None => continue,
            Some(open) => open.push_line(line)?,
        }
    }

    if let Some(open) = current.take() {
        hunks.push(open.finish()?);
    }

    if hunks.is_empty() {
        Ok(None)
    } else {
        Ok(Some(DiffFile { hunks }))
    }
}

/// Header coordinates of one hunk.
#[derive(Debug, Clone, Copy)]
struct HunkHeader {
    old_start: u32,
    old_count: u32,
    new_start: u32,
    new_count: u32,
}

fn parse_hunk_header(line: &str) -> Result<HunkHeader, DiffParseError> {
    let caps = HUNK_HEADER
        .captures(line)
        .ok_or_else(|| DiffParseError::MalformedHunkHeader(line.to_string()))?;

    let field = |i: usize, default: u32| -> Result<u32, DiffParseError> {
        match caps.get(i) {
            Some(m) => m
                .as_str()
                .parse()
                .map_err(|_| DiffParseError::MalformedHunkHeader(line.to_string())),
            None => Ok(default),
        }
    };

    Ok(HunkHeader {
        old_start: field(1, 0)?,
        old_count: field(2, 1)?,
        new_start: field(3, 0)?,
        new_count: field(4, 1)?,
    })
}

/// A hunk under construction, tracking the two running line cursors.
struct OpenHunk {
    header: HunkHeader,
    old_cursor: u32,
    new_cursor: u32,
    lines: Vec<DiffLine>,
}

impl OpenHunk {
    fn new(header: HunkHeader) -> Self {
        Self {
            header,
            old_cursor: header.old_start,
            new_cursor: header.new_start,
            lines: Vec::new(),
        }
    }

    /// Classify one body line by its leading marker and advance the cursors.
    fn push_line(&mut self, line: &str) -> Result<(), DiffParseError> {
        if line == NO_NEWLINE_MARKER {
            return Ok(());
        }

        match line.chars().next() {
            Some(' ') => {
                self.lines
                    .push(DiffLine::context(&line[1..], self.old_cursor, self.new_cursor));
                self.old_cursor += 1;
                self.new_cursor += 1;
            }
            Some('+') => {
                self.lines.push(DiffLine::added(&line[1..], self.new_cursor));
                self.new_cursor += 1;
            }
            Some('-') => {
                self.lines.push(DiffLine::removed(&line[1..], self.old_cursor));
                self.old_cursor += 1;
            }
            // Guessing a classification here would silently shift every
            // following line number.
            _ => return Err(DiffParseError::UnrecognizedBodyLine(line.to_string())),
        }

        Ok(())
    }

    /// Verify the consumed line counts against the header and seal the hunk.
    fn finish(self) -> Result<DiffHunk, DiffParseError> {
        let hunk = DiffHunk {
            old_start: self.header.old_start,
            old_count: self.header.old_count,
            new_start: self.header.new_start,
            new_count: self.header.new_count,
            lines: self.lines,
        };

        let old_seen = hunk.old_lines_consumed();
        let new_seen = hunk.new_lines_consumed();
        if old_seen != hunk.old_count || new_seen != hunk.new_count {
            return Err(DiffParseError::HunkCountMismatch {
                old_start: hunk.old_start,
                new_start: hunk.new_start,
                old_declared: hunk.old_count,
                new_declared: hunk.new_count,
                old_seen,
                new_seen,
            });
        }

        Ok(hunk)
    }
}
