//! CLI argument parsing for difflint.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};

/// Difflint: run a linter over a file and report only findings on
/// git-changed lines.
///
/// The linter and the set of checked file types are configured in
/// `.difflint.yml` at the repository root. Without changes relative to git,
/// changed-only mode reports nothing; `--all` reports every finding.
#[derive(Parser, Debug)]
#[command(name = "difflint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for difflint.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Lint a file and report findings.
    ///
    /// Runs the configured linter, then restricts the report to lines
    /// changed relative to git unless --all (or config) disables that.
    Check(CheckArgs),

    /// Print the git-changed line numbers of a file.
    ///
    /// One 1-based new-file line number per output line. Useful for
    /// inspecting what `check` would filter against.
    Lines(LinesArgs),
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// File to check.
    pub file: String,

    /// Report all findings, not just those on changed lines.
    #[arg(long)]
    pub all: bool,

    /// Minimum severity level to report: 0 info, 1 warning, 2 error.
    /// Overrides the config value.
    #[arg(long)]
    pub level: Option<u8>,
}

/// Arguments for the `lines` command.
#[derive(Parser, Debug)]
pub struct LinesArgs {
    /// File to inspect.
    pub file: String,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
