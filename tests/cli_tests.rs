/// CLI surface tests: argument parsing, help output, and the fast-exit
/// bootstrap failure paths of `taskdeck serve`
mod common;

use predicates::prelude::*;
use std::time::Duration;

// ============================================================================
// Help and Version
// ============================================================================

#[test]
fn test_cli_no_args_shows_usage() {
    let mut cmd = common::taskdeck_command();

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_help_lists_endpoints() {
    let mut cmd = common::taskdeck_command();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("GET    /tasks"))
        .stdout(predicate::str::contains("PATCH  /tasks/:id/toggle"))
        .stdout(predicate::str::contains("Start the task server"));
}

#[test]
fn test_cli_serve_help_lists_flags() {
    let mut cmd = common::taskdeck_command();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--db"))
        .stdout(predicate::str::contains("--static-dir"))
        .stdout(predicate::str::contains("--log-file"));
}

#[test]
fn test_cli_version() {
    let mut cmd = common::taskdeck_command();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ============================================================================
// Argument Parsing Errors
// ============================================================================

#[test]
fn test_cli_unknown_subcommand() {
    let mut cmd = common::taskdeck_command();
    cmd.arg("launch");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_cli_invalid_port_value() {
    let mut cmd = common::taskdeck_command();
    cmd.arg("serve").arg("--port").arg("not-a-port");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

// ============================================================================
// Serve Bootstrap Failures
// ============================================================================

#[test]
fn test_cli_serve_fails_on_unreachable_db() {
    let mut cmd = common::taskdeck_command();
    cmd.arg("serve")
        .arg("--port")
        .arg("3110")
        .arg("--db")
        .arg("/nonexistent-dir/sub/tasks.db")
        .timeout(Duration::from_secs(10));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to connect to database"))
        .stderr(predicate::str::contains("INTERNAL_ERROR"));
}

#[test]
fn test_cli_serve_fails_when_port_taken() {
    // Occupy a port so the server's bind fails after migrations succeed
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir.path().join("tasks.db");

    let mut cmd = common::taskdeck_command();
    cmd.arg("serve")
        .arg("--port")
        .arg(port.to_string())
        .arg("--db")
        .arg(&db_path)
        .timeout(Duration::from_secs(10));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to bind"));

    drop(listener);
}
