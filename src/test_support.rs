use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Create a temp git repository with committed fixture files.
///
/// Contains `app.js` (five lines) and `trailing.js` (a line of code followed
/// by a blank line, so hunks against it end in a blank context line).
pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    run(path, &["init", "--quiet"]);
    run(path, &["config", "user.email", "test@example.com"]);
    run(path, &["config", "user.name", "Test User"]);

    std::fs::write(
        path.join("app.js"),
        "const a = 1;\nconst b = 2;\nconst c = 3;\nconst d = 4;\nconst e = 5;\n",
    )
    .unwrap();
    std::fs::write(path.join("trailing.js"), "const x = 1;\n\n").unwrap();

    run(path, &["add", "."]);
    run(path, &["commit", "--quiet", "-m", "initial"]);

    temp_dir
}

/// Replace one 1-based line of a tracked file without committing.
pub(crate) fn modify_tracked_file(repo: &Path, file: &str, line_no: usize, new_line: &str) {
    let path = repo.join(file);
    let content = std::fs::read_to_string(&path).unwrap();
    let mut lines: Vec<&str> = content.lines().collect();
    lines[line_no - 1] = new_line;
    std::fs::write(&path, format!("{}\n", lines.join("\n"))).unwrap();
}

/// Write an executable script that prints `json` on stdout regardless of
/// arguments, standing in for a linter. Returns its absolute path.
pub(crate) fn write_fake_linter(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("fake-lint.sh");
    std::fs::write(&path, format!("#!/bin/sh\necho '{}'\n", json)).unwrap();

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    path
}

fn run(cwd: &Path, args: &[&str]) {
    let status = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .status()
        .unwrap();
    assert!(status.success(), "git {:?} failed in test setup", args);
}
