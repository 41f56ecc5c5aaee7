//! Tests for error handling and CLI flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("quay") || out.contains("Usage"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    t.cmd().arg("unknown-command").assert().failure();
}

#[test]
fn test_not_initialized_hint() {
    let t = Test::new();

    t.cmd()
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not initialized"))
        .stderr(predicate::str::contains("quay init"));
}

#[test]
fn test_malformed_config() {
    let t = Test::with_config("this is not valid toml { [ }");

    t.cmd()
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let t = Test::with_config(SEPOLIA_CONFIG);

    let output = t
        .cmd()
        .args(["--verbose", "check"])
        .envs(SEPOLIA_SECRETS.iter().copied())
        .output()
        .unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "resolving configuration");
    for (_, value) in SEPOLIA_SECRETS {
        assert_not_leaked(&output, value);
    }
}

#[test]
fn test_default_has_no_debug_output() {
    let t = Test::with_config(SEPOLIA_CONFIG);

    let output = t.check_with(SEPOLIA_SECRETS);
    assert_success(&output);
    let err = stderr(&output);
    assert!(!err.contains("DEBUG") && !err.contains("TRACE"));
}

#[test]
fn test_completions_bash() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("_quay") || out.contains("complete"));
}
