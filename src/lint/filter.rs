//! Finding filtering: severity floor and changed-line intersection.

use super::report::{FileReport, Finding, Severity};

/// A finding together with the file it was reported for, flattened out of
/// the per-file report structure for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiledFinding {
    pub path: String,
    pub finding: Finding,
}

/// Filter findings down to what should be reported.
///
/// The severity floor applies in every mode. `changed_lines` is the sorted
/// changed-line set from the diff core: `Some(set)` keeps only findings
/// anchored on one of those lines, `None` is full-file mode and keeps
/// everything. An empty set in changed-only mode keeps nothing.
///
/// Report order is preserved (file order, then linter order within a file).
///
/// # Arguments
///
/// * `reports` - Per-file linter reports
/// * `changed_lines` - Sorted new-file line numbers, or None for full-file mode
/// * `min_severity` - Findings below this level are dropped
pub fn filter_findings(
    reports: &[FileReport],
    changed_lines: Option<&[u32]>,
    min_severity: Severity,
) -> Vec<FiledFinding> {
    let mut kept = Vec::new();

    for report in reports {
        for finding in &report.errors {
            if finding.severity < min_severity {
                continue;
            }
            if let Some(lines) = changed_lines
                && lines.binary_search(&finding.line).is_err()
            {
                continue;
            }
            kept.push(FiledFinding {
                path: report.path.clone(),
                finding: finding.clone(),
            });
        }
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(errors: Vec<Finding>) -> Vec<FileReport> {
        vec![FileReport {
            path: "src/app.js".to_string(),
            errors,
        }]
    }

    fn finding(line: u32, severity: Severity) -> Finding {
        Finding {
            line,
            column: 1,
            severity,
            rule: "semi".to_string(),
            message: "missing semicolon".to_string(),
        }
    }

    #[test]
    fn full_file_mode_keeps_everything() {
        let reports = report(vec![finding(3, Severity::Error), finding(9, Severity::Warn)]);
        let kept = filter_findings(&reports, None, Severity::Info);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn changed_only_mode_intersects_lines() {
        let reports = report(vec![
            finding(3, Severity::Error),
            finding(9, Severity::Error),
            finding(20, Severity::Error),
        ]);
        let kept = filter_findings(&reports, Some(&[9, 10, 11]), Severity::Info);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].finding.line, 9);
    }

    #[test]
    fn empty_changed_set_keeps_nothing() {
        let reports = report(vec![finding(3, Severity::Error)]);
        let kept = filter_findings(&reports, Some(&[]), Severity::Info);
        assert!(kept.is_empty());
    }

    #[test]
    fn severity_floor_applies_in_both_modes() {
        let reports = report(vec![
            finding(3, Severity::Info),
            finding(3, Severity::Warn),
            finding(3, Severity::Error),
        ]);

        let full = filter_findings(&reports, None, Severity::Warn);
        assert_eq!(full.len(), 2);

        let changed = filter_findings(&reports, Some(&[3]), Severity::Error);
        assert_eq!(changed.len(), 1);
        assert_eq!(changed[0].finding.severity, Severity::Error);
    }

    #[test]
    fn report_order_is_preserved() {
        let reports = vec![
            FileReport {
                path: "b.js".to_string(),
                errors: vec![finding(7, Severity::Error)],
            },
            FileReport {
                path: "a.js".to_string(),
                errors: vec![finding(2, Severity::Error)],
            },
        ];

        let kept = filter_findings(&reports, None, Severity::Info);
        assert_eq!(kept[0].path, "b.js");
        assert_eq!(kept[1].path, "a.js");
    }
}
