//! Configuration defaults for difflint.
//!
//! Default value functions used by the Config struct's serde attributes.

/// Default linter command. The file path is appended as the last argument.
pub(crate) fn default_linter_command() -> String {
    "eslint --format json".to_string()
}

/// Default file extensions difflint will check.
///
/// Mirrors what front-end linters cover out of the box.
pub(crate) fn default_extensions() -> Vec<String> {
    ["js", "es", "jsx", "ts", "tsx", "vue", "css", "less", "html"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

pub(crate) fn default_true() -> bool {
    true
}

/// Default minimum severity level (1 = warnings and up).
pub(crate) fn default_min_level() -> u8 {
    1
}
