//! Value types for parsed unified-diff text.
//!
//! All types are plain immutable records, built fresh for each parse call.
//! Line numbers are 1-based and reconstructed from the hunk headers, so a
//! hunk can be inspected in isolation without any global counter.

/// Classification of one physical line inside a hunk body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffLineKind {
    /// Unchanged line, present in both file versions.
    Context,
    /// Line added in the new version.
    Added,
    /// Line removed from the old version.
    Removed,
}

/// One classified line inside a hunk, with the leading marker stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffLine {
    pub kind: DiffLineKind,
    /// Line content without the leading ' ', '+' or '-' marker.
    pub text: String,
    /// 1-based line number in the old file. None for added lines.
    pub old_line: Option<u32>,
    /// 1-based line number in the new file. None for removed lines.
    pub new_line: Option<u32>,
}

impl DiffLine {
    pub(super) fn context(text: &str, old_line: u32, new_line: u32) -> Self {
        Self {
            kind: DiffLineKind::Context,
            text: text.to_string(),
            old_line: Some(old_line),
            new_line: Some(new_line),
        }
    }

    pub(super) fn added(text: &str, new_line: u32) -> Self {
        Self {
            kind: DiffLineKind::Added,
            text: text.to_string(),
            old_line: None,
            new_line: Some(new_line),
        }
    }

    pub(super) fn removed(text: &str, old_line: u32) -> Self {
        Self {
            kind: DiffLineKind::Removed,
            text: text.to_string(),
            old_line: Some(old_line),
            new_line: None,
        }
    }
}

/// One `@@ -a,b +c,d @@` section with its classified body lines.
///
/// A count of 0 means "no lines on that side": a hunk with `new_count == 0`
/// is a pure deletion and `new_start` is the insertion point in the new file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffHunk {
    pub old_start: u32,
    pub old_count: u32,
    pub new_start: u32,
    pub new_count: u32,
    /// Body lines in file order.
    pub lines: Vec<DiffLine>,
}

impl DiffHunk {
    /// Number of body lines consumed from the old file (context + removed).
    pub fn old_lines_consumed(&self) -> u32 {
        self.lines
            .iter()
            .filter(|l| l.old_line.is_some())
            .count() as u32
    }

    /// Number of body lines consumed from the new file (context + added).
    pub fn new_lines_consumed(&self) -> u32 {
        self.lines
            .iter()
            .filter(|l| l.new_line.is_some())
            .count() as u32
    }
}

/// Parse result for one block of diff text: the ordered hunks of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffFile {
    pub hunks: Vec<DiffHunk>,
}
