//! Command helper methods for Test.

use super::fixtures::ALL_REFERENCES;
use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a quay command isolated from the caller's environment.
    ///
    /// Returns a Command configured with:
    /// - Current directory set to the test project directory
    /// - `NO_COLOR` set, quay overrides and fixture secrets cleared
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("quay").expect("failed to find quay binary");
        cmd.current_dir(self.dir.path());
        cmd.env("NO_COLOR", "1");
        for var in [
            "QUAY_CONFIG",
            "QUAY_COMPILER_VERSION",
            "QUAY_DEFAULT_TARGET",
            "QUAY_LOG",
        ] {
            cmd.env_remove(var);
        }
        for reference in ALL_REFERENCES {
            cmd.env_remove(reference);
        }
        cmd
    }

    /// Shortcut for `quay init`.
    pub fn init_cmd(&self) -> Output {
        self.cmd()
            .arg("init")
            .output()
            .expect("failed to run quay init")
    }

    /// Shortcut for `quay check` with secrets in the environment.
    pub fn check_with(&self, secrets: &[(&str, &str)]) -> Output {
        let mut cmd = self.cmd();
        cmd.arg("check");
        for (k, v) in secrets {
            cmd.env(k, v);
        }
        cmd.output().expect("failed to run quay check")
    }

    /// Shortcut for `quay show` with secrets in the environment.
    pub fn show_with(&self, secrets: &[(&str, &str)], json: bool) -> Output {
        let mut cmd = self.cmd();
        cmd.arg("show");
        if json {
            cmd.arg("--json");
        }
        for (k, v) in secrets {
            cmd.env(k, v);
        }
        cmd.output().expect("failed to run quay show")
    }
}
