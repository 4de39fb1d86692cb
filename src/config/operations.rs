//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{DifflintError, Result};
use std::path::Path;

/// File name looked up at the repository root.
pub const CONFIG_FILE_NAME: &str = ".difflint.yml";

impl Config {
    /// Load config from the repository root, falling back to defaults when
    /// no config file exists.
    pub fn load_or_default<P: AsRef<Path>>(repo_root: P) -> Result<Self> {
        let path = repo_root.as_ref().join(CONFIG_FILE_NAME);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the .difflint.yml file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(DifflintError::UserError)` - Parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            DifflintError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| DifflintError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            DifflintError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `extensions` entries must be non-empty and have no leading dots
    /// - `min_level` must be 0, 1, or 2
    pub fn validate(&self) -> Result<()> {
        for ext in &self.extensions {
            if ext.is_empty() {
                return Err(DifflintError::UserError(
                    "config validation failed: extensions entries must be non-empty".to_string(),
                ));
            }
            if ext.starts_with('.') {
                return Err(DifflintError::UserError(format!(
                    "config validation failed: extensions entries must not start with a dot \
                     (got '{}')",
                    ext
                )));
            }
        }

        if self.min_level > 2 {
            return Err(DifflintError::UserError(format!(
                "config validation failed: min_level must be 0, 1 or 2 (got {})",
                self.min_level
            )));
        }

        Ok(())
    }

    /// Returns true when the file's extension is in the checked list.
    ///
    /// Comparison is case-insensitive; a file without an extension is never
    /// checked.
    pub fn should_check_file<P: AsRef<Path>>(&self, path: P) -> bool {
        let Some(ext) = path.as_ref().extension() else {
            return false;
        };
        let ext = ext.to_string_lossy().to_lowercase();
        self.extensions.iter().any(|e| e.to_lowercase() == ext)
    }
}
