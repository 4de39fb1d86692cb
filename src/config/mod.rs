//! Configuration model for difflint.
//!
//! This module defines the Config struct that represents `.difflint.yml` at
//! the repository root. It supports forward-compatible YAML parsing (unknown
//! fields are ignored), sensible defaults for optional fields, and validation
//! of config values. The file is optional; defaults cover the common setup.

mod model;
mod operations;
mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::Config;
pub use operations::CONFIG_FILE_NAME;
