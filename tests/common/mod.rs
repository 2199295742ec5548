//! Common utilities for integration tests
//!
//! This module provides shared functionality across all integration tests,
//! ensuring consistency and reducing duplication.

use assert_cmd::Command;
use std::path::PathBuf;

/// Get the path to the `taskdeck` binary
///
/// This function is compatible with both standard and custom target
/// directories. It first checks the `CARGO_BIN_EXE_taskdeck` environment
/// variable (set by cargo when using custom target directories like in CI
/// coverage tests), and falls back to the standard `cargo_bin()` helper for
/// local development.
///
/// # Panics
///
/// Panics if the `taskdeck` binary cannot be found in either the environment
/// variable or the standard cargo build directory.
#[allow(deprecated)] // cargo_bin() is deprecated but needed for fallback
pub fn taskdeck_binary() -> PathBuf {
    std::env::var("CARGO_BIN_EXE_taskdeck")
        .map(PathBuf::from)
        .unwrap_or_else(|_| assert_cmd::cargo::cargo_bin("taskdeck"))
}

/// Create a Command for `taskdeck` with environment isolation
///
/// PORT and TASKDECK_DB are cleared so an ambient shell environment cannot
/// leak into a test's flag-resolution behavior.
#[allow(dead_code)] // Not all test files use this
pub fn taskdeck_command() -> Command {
    let mut cmd = Command::new(taskdeck_binary());
    cmd.env_remove("PORT").env_remove("TASKDECK_DB");
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taskdeck_binary_exists() {
        let binary = taskdeck_binary();
        assert!(
            binary.exists(),
            "taskdeck binary should exist at {:?}",
            binary
        );
    }
}
