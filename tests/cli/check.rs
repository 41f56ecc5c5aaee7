//! Tests for `quay check` command.

use crate::support::*;

#[test]
fn test_check_resolves_with_env_secrets() {
    let t = Test::with_config(SEPOLIA_CONFIG);

    let output = t.check_with(SEPOLIA_SECRETS);
    assert_success(&output);
    assert_stdout_contains(&output, "configuration resolved (2 targets)");
    assert_stdout_contains(&output, "https://eth-sepolia.g.alchemy.com/v2/***");
    for (_, value) in SEPOLIA_SECRETS {
        assert_not_leaked(&output, value);
    }
}

#[test]
fn test_check_reads_project_env_file() {
    let t = Test::with_config(SEPOLIA_CONFIG);
    let env: String = SEPOLIA_SECRETS
        .iter()
        .map(|(k, v)| format!("{}={}\n", k, v))
        .collect();
    t.write(".env", &env);

    let output = t.check_with(&[]);
    assert_success(&output);
    assert_stdout_contains(&output, ".env");
}

#[test]
fn test_check_empty_env_var_falls_back_to_env_file() {
    let t = Test::with_config(SEPOLIA_CONFIG);
    let env: String = SEPOLIA_SECRETS
        .iter()
        .map(|(k, v)| format!("{}={}\n", k, v))
        .collect();
    t.write(".env", &env);

    let output = t.check_with(&[("ALCHEMY_API_KEY", "")]);
    assert_success(&output);
    assert_stdout_contains(&output, "configuration resolved (2 targets)");
}

#[test]
fn test_check_explicit_env_file() {
    let t = Test::with_config(SEPOLIA_CONFIG);
    let env: String = SEPOLIA_SECRETS
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"\n", k, v))
        .collect();
    t.write("secrets/dev.env", &env);

    let output = t
        .cmd()
        .args(["check", "--env-file", "secrets/dev.env"])
        .output()
        .unwrap();
    assert_success(&output);
}

#[test]
fn test_check_missing_explicit_env_file_fails() {
    let t = Test::with_config(SEPOLIA_CONFIG);

    let output = t
        .cmd()
        .args(["check", "--env-file", "nope.env"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "nope.env");
}

#[test]
fn test_check_environment_wins_over_env_file() {
    let t = Test::with_config(SEPOLIA_CONFIG);
    // A malformed key in .env would make the endpoint invalid.
    t.write(
        ".env",
        "ALCHEMY_API_KEY=\"bad key\"\nSEPOLIA_PRIVATE_KEY=0xabc\nETHERSCAN_API_KEY=E1\n",
    );

    let output = t.check_with(&[("ALCHEMY_API_KEY", "goodkey")]);
    assert_success(&output);
}

#[test]
fn test_check_missing_secret_names_reference() {
    let t = Test::with_config(SEPOLIA_CONFIG);

    let output = t.check_with(&[
        ("SEPOLIA_PRIVATE_KEY", "0xabc"),
        ("ETHERSCAN_API_KEY", "E1"),
    ]);
    assert_failure(&output);
    assert_stderr_contains(&output, "missing secret 'ALCHEMY_API_KEY'");
    assert_stderr_contains(&output, "target 'sepolia'");
    assert_not_leaked(&output, "0xabc");
}

#[test]
fn test_check_missing_explorer_key() {
    let t = Test::with_config(SEPOLIA_CONFIG);

    let output = t.check_with(&SEPOLIA_SECRETS[..2]);
    assert_failure(&output);
    assert_stderr_contains(&output, "ETHERSCAN_API_KEY");
    assert_stderr_contains(&output, "explorer");
}

#[test]
fn test_check_single_target() {
    let t = Test::with_config(SEPOLIA_CONFIG);

    let mut cmd = t.cmd();
    cmd.args(["check", "--target", "local"]);
    for (k, v) in SEPOLIA_SECRETS {
        cmd.env(k, v);
    }
    let output = cmd.output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "target 'local' resolved");
    assert_stdout_contains(&output, "0.8.24");
}

#[test]
fn test_check_unknown_target() {
    let t = Test::with_config(SEPOLIA_CONFIG);

    let mut cmd = t.cmd();
    cmd.args(["check", "--target", "mainnet"]);
    for (k, v) in SEPOLIA_SECRETS {
        cmd.env(k, v);
    }
    let output = cmd.output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "unknown target: mainnet");
}

#[test]
fn test_check_duplicate_target() {
    let t = Test::with_config(DUPLICATE_CONFIG);

    let output = t.check_with(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "duplicate target name: local");
}

#[test]
fn test_check_bad_compiler_version() {
    let t = Test::with_config(BAD_VERSION_CONFIG);

    let output = t.check_with(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid version 'abc'");
}

#[test]
fn test_check_compiler_override_from_environment() {
    let t = Test::with_config(BAD_VERSION_CONFIG);

    let output = t
        .cmd()
        .env("QUAY_COMPILER_VERSION", "0.8.26")
        .arg("check")
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "0.8.26");
}

#[test]
fn test_check_literal_secret_reference_is_rejected() {
    let t = Test::with_config(LITERAL_SECRET_CONFIG);

    let output = t.check_with(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "literal secret");
    assert_not_leaked(&output, "D3F8CM2KFS8X443YVR7T9SXUEA4A6ZM4CT");
}

#[test]
fn test_check_config_from_environment_path() {
    let t = Test::new();
    t.write("deploy/targets.toml", DUPLICATE_CONFIG);

    let output = t
        .cmd()
        .env("QUAY_CONFIG", "deploy/targets.toml")
        .arg("check")
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "duplicate target name");
}
