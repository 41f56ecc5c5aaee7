//! Constants used throughout quay.
//!
//! Centralizes file names, environment variable names and placeholders.

/// Target file name (.quay.toml).
pub const CONFIG_FILE: &str = ".quay.toml";

/// Environment variables file name (.env).
pub const ENV_FILE: &str = ".env";

/// Placeholder in an endpoint template that is replaced by the target's credential.
pub const KEY_PLACEHOLDER: &str = "{key}";

/// Overrides the target file path.
pub const CONFIG_ENV: &str = "QUAY_CONFIG";

/// Overrides the global compiler version.
pub const COMPILER_VERSION_ENV: &str = "QUAY_COMPILER_VERSION";

/// Overrides the default target.
pub const DEFAULT_TARGET_ENV: &str = "QUAY_DEFAULT_TARGET";

/// Log filter environment variable.
pub const LOG_ENV: &str = "QUAY_LOG";

/// Compiler version written by `quay init` when none is given.
pub const DEFAULT_COMPILER_VERSION: &str = "0.8.28";

/// Endpoint schemes accepted after template substitution.
pub const ENDPOINT_SCHEMES: &[&str] = &["https://", "http://", "wss://", "ws://"];

/// Gitignore entries to protect secrets.
///
/// These entries ensure that .env files are not accidentally committed.
pub const GITIGNORE_ENTRIES: &[&str] = &[".env", ".env.*", "!.env.example"];
