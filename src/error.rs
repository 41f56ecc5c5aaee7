//! Error types.
//!
//! Each concern has its own enum; all of them convert into [`Error`] so
//! callers can use `?` across module boundaries.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures while turning raw configuration into a [`ResolvedConfig`].
///
/// [`ResolvedConfig`]: crate::core::domain::ResolvedConfig
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("missing secret '{reference}' required by {required_by}")]
    MissingSecret {
        reference: String,
        required_by: String,
    },

    #[error("invalid endpoint for target '{target}': {reason}")]
    InvalidEndpoint { target: String, reason: String },

    #[error("invalid version '{value}': {reason}")]
    InvalidVersion { value: String, reason: String },

    #[error("duplicate target name: {0}")]
    DuplicateTargetName(String),

    #[error("unknown target: {0}")]
    UnknownTarget(String),
}

/// Target file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("not initialized: no {0} found")]
    NotInitialized(PathBuf),

    #[error("already initialized: {0} exists (use --force to overwrite)")]
    AlreadyInitialized(PathBuf),

    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Secret source errors.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("secret '{0}' is not valid unicode")]
    NotUnicode(String),
}

/// Input validation errors for names and references.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("target name cannot be empty")]
    EmptyName,

    #[error("invalid target name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("invalid secret reference '{reference}': {reason}")]
    InvalidReference { reference: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
