//! Tests for `quay targets` command.

use crate::support::*;

#[test]
fn test_targets_lists_without_secrets() {
    let t = Test::with_config(SEPOLIA_CONFIG);

    // No secrets provided: listing never resolves.
    let output = t.cmd().arg("targets").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "sepolia");
    assert_stdout_contains(&output, "ALCHEMY_API_KEY, SEPOLIA_PRIVATE_KEY");
    assert_stdout_contains(&output, "no secrets");
}

#[test]
fn test_targets_empty() {
    let t = Test::with_config(BAD_VERSION_CONFIG);

    let output = t.cmd().arg("targets").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "no targets configured");
}
