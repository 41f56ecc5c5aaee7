//! Tests for `quay init` command.

use crate::support::*;

#[test]
fn test_init_writes_config_and_gitignore() {
    let t = Test::new();

    let output = t.init_cmd();
    assert_success(&output);
    assert_stdout_contains(&output, "initialized");
    assert_stdout_contains(&output, "ALCHEMY_API_KEY");

    let config = t.read(".quay.toml");
    assert!(config.contains("[[targets]]"));
    assert!(config.contains("{key}"));
    assert!(config.contains("0.8.28"));

    let gitignore = t.read(".gitignore");
    assert!(gitignore.lines().any(|l| l == ".env"));
    assert!(gitignore.lines().any(|l| l == "!.env.example"));
}

#[test]
fn test_init_twice_fails() {
    let t = Test::init();

    let output = t.init_cmd();
    assert_failure(&output);
    assert_stderr_contains(&output, "already initialized");
}

#[test]
fn test_init_force_overwrites() {
    let t = Test::init();

    let output = t
        .cmd()
        .args(["init", "--force", "--compiler", "0.8.30"])
        .output()
        .unwrap();
    assert_success(&output);
    assert!(t.read(".quay.toml").contains("0.8.30"));
}

#[test]
fn test_init_rejects_bad_compiler_version() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["init", "--compiler", "latest"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid version");
    assert!(!t.dir.path().join(".quay.toml").exists());
}

#[test]
fn test_init_then_check_with_env_secrets() {
    let t = Test::init();

    let output = t.check_with(SEPOLIA_SECRETS);
    assert_success(&output);
    assert_stdout_contains(&output, "configuration resolved");
}
