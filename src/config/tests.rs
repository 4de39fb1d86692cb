//! Tests for config loading and validation.

use super::Config;
use crate::error::DifflintError;

#[test]
fn default_config_is_valid() {
    let config = Config::default();
    assert!(config.validate().is_ok());
    assert!(config.changed_lines_only);
    assert!(config.deletion_marks_line);
    assert_eq!(config.min_level, 1);
    assert!(config.extensions.iter().any(|e| e == "js"));
}

#[test]
fn from_yaml_overrides_fields() {
    let yaml = r#"
linter_command: "stylelint --formatter json"
extensions: [css, less]
changed_lines_only: false
min_level: 2
"#;

    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.linter_command, "stylelint --formatter json");
    assert_eq!(config.extensions, vec!["css", "less"]);
    assert!(!config.changed_lines_only);
    assert_eq!(config.min_level, 2);
    // Untouched fields keep their defaults.
    assert!(config.deletion_marks_line);
}

#[test]
fn unknown_yaml_fields_are_ignored() {
    let yaml = r#"
min_level: 0
some_future_knob: 42
"#;

    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.min_level, 0);
}

#[test]
fn config_round_trips_through_yaml() {
    let config = Config {
        linter_command: "mylint --json".to_string(),
        extensions: vec!["rs".to_string()],
        changed_lines_only: false,
        min_level: 0,
        deletion_marks_line: false,
    };

    let yaml = config.to_yaml().unwrap();
    let reloaded = Config::from_yaml(&yaml).unwrap();
    assert_eq!(reloaded.linter_command, config.linter_command);
    assert_eq!(reloaded.extensions, config.extensions);
    assert_eq!(reloaded.changed_lines_only, config.changed_lines_only);
    assert_eq!(reloaded.min_level, config.min_level);
    assert_eq!(reloaded.deletion_marks_line, config.deletion_marks_line);
}

#[test]
fn empty_extension_fails_validation() {
    let yaml = "extensions: [js, '']";
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(matches!(err, DifflintError::UserError(_)));
    assert!(err.to_string().contains("non-empty"));
}

#[test]
fn dotted_extension_fails_validation() {
    let yaml = "extensions: ['.js']";
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("must not start with a dot"));
}

#[test]
fn out_of_range_level_fails_validation() {
    let yaml = "min_level: 3";
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("min_level"));
}

#[test]
fn invalid_yaml_is_user_error() {
    let err = Config::from_yaml("extensions: [unclosed").unwrap_err();
    assert!(matches!(err, DifflintError::UserError(_)));
}

#[test]
fn should_check_file_matches_extension_case_insensitively() {
    let config = Config::default();
    assert!(config.should_check_file("src/app.js"));
    assert!(config.should_check_file("src/App.JSX"));
    assert!(config.should_check_file("styles/site.less"));
    assert!(!config.should_check_file("README.md"));
    assert!(!config.should_check_file("Makefile"));
}

#[test]
fn load_or_default_without_file_uses_defaults() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config = Config::load_or_default(temp_dir.path()).unwrap();
    assert_eq!(config.min_level, Config::default().min_level);
}

#[test]
fn load_or_default_reads_config_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(".difflint.yml"),
        "changed_lines_only: false\n",
    )
    .unwrap();

    let config = Config::load_or_default(temp_dir.path()).unwrap();
    assert!(!config.changed_lines_only);
}
