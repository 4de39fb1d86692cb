//! Linter invocation and finding handling.
//!
//! The linter is an external process configured as a command string. This
//! module runs it, parses its JSON report, filters the findings by severity
//! and (optionally) by the changed-line set from the diff core, and renders
//! the survivors as text.

mod filter;
mod render;
mod report;
mod runner;

// Re-export public API
pub use filter::{FiledFinding, filter_findings};
pub use render::{NO_FINDINGS_NOTICE, render_findings};
pub use report::{FileReport, Finding, Severity};
pub use runner::run_linter;
