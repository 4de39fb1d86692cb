//! Exit code constants for the difflint CLI.
//!
//! - 0: Success, nothing to report
//! - 1: User error (bad args, unsupported file, config errors)
//! - 2: Lint findings were reported
//! - 3: Git operation failure
//! - 4: Linter invocation failure

/// Successful execution with no findings to report.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unsupported file type, or invalid config.
pub const USER_ERROR: i32 = 1;

/// Lint findings were reported after filtering.
pub const FINDINGS: i32 = 2;

/// Git operation failure: repository discovery errors.
pub const GIT_FAILURE: i32 = 3;

/// Linter failure: the linter could not be run or its output was unreadable.
pub const LINTER_FAILURE: i32 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, FINDINGS, GIT_FAILURE, LINTER_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn exit_codes_are_stable() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(USER_ERROR, 1);
        assert_eq!(FINDINGS, 2);
        assert_eq!(GIT_FAILURE, 3);
        assert_eq!(LINTER_FAILURE, 4);
    }
}
