//! Text rendering of filtered findings.

use super::filter::FiledFinding;

/// Notice printed when changed-only mode has nothing to report.
pub const NO_FINDINGS_NOTICE: &str = "[difflint] no findings on changed lines";

/// Render findings as plain text, one per line:
///
/// ```text
/// ERROR src/app.js:4:7 'x' is never used (no-unused-vars)
/// WARN src/app.js:9:1 missing semicolon (semi)
/// ```
///
/// Info-level findings carry no tag. The rule suffix is omitted when the
/// linter reported none.
pub fn render_findings(findings: &[FiledFinding]) -> String {
    let mut out = Vec::with_capacity(findings.len());

    for filed in findings {
        let f = &filed.finding;
        let mut line = String::new();
        let tag = f.severity.tag();
        if !tag.is_empty() {
            line.push_str(tag);
            line.push(' ');
        }
        line.push_str(&format!(
            "{}:{}:{} {}",
            filed.path, f.line, f.column, f.message
        ));
        if !f.rule.is_empty() {
            line.push_str(&format!(" ({})", f.rule));
        }
        out.push(line);
    }

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::report::{Finding, Severity};

    fn filed(line: u32, severity: Severity, rule: &str, message: &str) -> FiledFinding {
        FiledFinding {
            path: "src/app.js".to_string(),
            finding: Finding {
                line,
                column: 7,
                severity,
                rule: rule.to_string(),
                message: message.to_string(),
            },
        }
    }

    #[test]
    fn renders_severity_tags() {
        let findings = vec![
            filed(4, Severity::Error, "no-unused-vars", "'x' is never used"),
            filed(9, Severity::Warn, "semi", "missing semicolon"),
        ];

        let text = render_findings(&findings);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "ERROR src/app.js:4:7 'x' is never used (no-unused-vars)"
        );
        assert_eq!(lines[1], "WARN src/app.js:9:7 missing semicolon (semi)");
    }

    #[test]
    fn info_findings_have_no_tag() {
        let findings = vec![filed(2, Severity::Info, "", "consider const")];
        assert_eq!(render_findings(&findings), "src/app.js:2:7 consider const");
    }

    #[test]
    fn empty_input_renders_empty() {
        assert_eq!(render_findings(&[]), "");
    }
}
