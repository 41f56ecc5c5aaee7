//! Target file management.
//!
//! Handles reading, writing, and validating `.quay.toml`. The file holds
//! secret references only, so it is safe to commit.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::domain::{Optimizer, ResolvedConfig};
use crate::core::resolver::ConfigResolver;
use crate::core::source::SecretSource;
use crate::core::types::{EndpointTemplate, SecretRef, TargetName};
use crate::error::{ConfigError, Result};

/// Project configuration stored in `.quay.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Metadata about the file
    pub quay: Meta,
    /// Global compiler settings
    pub compiler: RawCompiler,
    /// Deployment targets, in file order.
    ///
    /// Stored as an array so that a repeated name reaches the resolver
    /// instead of failing as a TOML syntax error.
    #[serde(default)]
    pub targets: Vec<RawTarget>,
    /// Optional block-explorer settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explorer: Option<RawExplorer>,
}

/// Metadata section of the configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Meta {
    /// Configuration version
    pub version: String,
    /// Target used when none is named on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_target: Option<TargetName>,
}

/// Compiler section, before validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawCompiler {
    /// Compiler version, e.g. "0.8.28"
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimizer: Option<Optimizer>,
}

/// One `[[targets]]` entry, before validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawTarget {
    /// Target name
    pub name: TargetName,
    /// Endpoint URL; `{key}` is replaced by the secret behind `credential`
    pub url: EndpointTemplate,
    /// Reference to the endpoint API key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential: Option<SecretRef>,
    /// References to signing keys
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accounts: Vec<SecretRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
    /// Compiler version override for this target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compiler: Option<String>,
}

/// Explorer section, before validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawExplorer {
    /// Reference to the explorer API key
    pub api_key: SecretRef,
}

impl Config {
    /// Create a new configuration with no targets
    pub fn new(compiler_version: impl Into<String>) -> Self {
        Self {
            quay: Meta {
                version: env!("CARGO_PKG_VERSION").to_string(),
                default_target: None,
            },
            compiler: RawCompiler {
                version: compiler_version.into(),
                optimizer: None,
            },
            targets: Vec::new(),
            explorer: None,
        }
    }

    /// Starter configuration written by `quay init`.
    ///
    /// Contains a Sepolia target and an explorer entry that reference
    /// secrets by name.
    pub fn template(compiler_version: impl Into<String>) -> Self {
        let mut config = Self::new(compiler_version);
        config.quay.default_target = Some("sepolia".to_string());
        config.compiler.optimizer = Some(Optimizer {
            enabled: true,
            runs: 200,
        });
        config.targets.push(RawTarget {
            name: "sepolia".to_string(),
            url: format!(
                "https://eth-sepolia.g.alchemy.com/v2/{}",
                constants::KEY_PLACEHOLDER
            ),
            credential: Some("ALCHEMY_API_KEY".to_string()),
            accounts: vec!["SEPOLIA_PRIVATE_KEY".to_string()],
            chain_id: Some(11_155_111),
            compiler: None,
        });
        config.explorer = Some(RawExplorer {
            api_key: "ETHERSCAN_API_KEY".to_string(),
        });
        config
    }

    /// Path to the target file: `$QUAY_CONFIG` or `.quay.toml`
    pub fn config_path() -> PathBuf {
        Self::config_path_with(|name| std::env::var(name).ok())
    }

    /// Path to the target file, reading `QUAY_CONFIG` through `var`.
    ///
    /// An unset or blank value falls back to `.quay.toml`.
    pub fn config_path_with(var: impl Fn(&str) -> Option<String>) -> PathBuf {
        var(constants::CONFIG_ENV)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(constants::CONFIG_FILE))
    }

    /// Load the target file from the default path
    ///
    /// # Errors
    ///
    /// See [`Config::load_from`].
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path())
    }

    /// Load a target file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotInitialized` if the file doesn't exist,
    /// `ConfigError::Parse` if the TOML is malformed, or
    /// `ConfigError::InvalidValue` if structural validation fails.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            return Err(ConfigError::NotInitialized(path.to_path_buf()).into());
        }
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;

        debug!(
            targets = config.targets.len(),
            explorer = config.explorer.is_some(),
            "config loaded"
        );

        config.validate()?;

        Ok(config)
    }

    /// Save the configuration
    ///
    /// # Errors
    ///
    /// Returns error if serialization or file write fails.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        debug!(path = %path.display(), "saving config");

        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(path, contents)?;

        Ok(())
    }

    /// Structural checks that don't need secrets.
    ///
    /// Semantic checks (versions, endpoints, duplicates) belong to
    /// resolution so that they are reported with resolution errors.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` on failure.
    pub fn validate(&self) -> Result<()> {
        if self.quay.version.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "quay.version",
                reason: "cannot be empty".to_string(),
            }
            .into());
        }

        if let Some(optimizer) = self.compiler.optimizer {
            if optimizer.enabled && optimizer.runs == 0 {
                return Err(ConfigError::InvalidValue {
                    field: "compiler.optimizer.runs",
                    reason: "must be positive when the optimizer is enabled".to_string(),
                }
                .into());
            }
        }

        Ok(())
    }

    /// Apply `QUAY_COMPILER_VERSION` and `QUAY_DEFAULT_TARGET` overrides
    /// from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Apply overrides from an arbitrary variable lookup.
    ///
    /// Empty values are ignored.
    pub fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        let var = |name: &str| var(name).filter(|v| !v.trim().is_empty());

        if let Some(version) = var(constants::COMPILER_VERSION_ENV) {
            debug!(version = %version, "compiler version overridden from environment");
            self.compiler.version = version;
        }

        if let Some(target) = var(constants::DEFAULT_TARGET_ENV) {
            debug!(target = %target, "default target overridden from environment");
            self.quay.default_target = Some(target);
        }
    }

    /// Resolve against a secret source.
    ///
    /// # Errors
    ///
    /// See [`ConfigResolver::resolve`].
    pub fn resolve(&self, source: &dyn SecretSource) -> Result<ResolvedConfig> {
        ConfigResolver::new()
            .default_target(self.quay.default_target.clone())
            .resolve(&self.targets, self.explorer.as_ref(), &self.compiler, source)
    }
}

/// Ensure `.gitignore` in `dir` contains entries to ignore `.env` files
///
/// Adds `.env`, `.env.*`, and `!.env.example` if not already present.
///
/// # Errors
///
/// Returns error if file operations fail.
pub fn ensure_gitignore(dir: &Path) -> Result<()> {
    let gitignore = dir.join(".gitignore");

    let existing = if gitignore.exists() {
        std::fs::read_to_string(&gitignore)?
    } else {
        String::new()
    };

    let mut updated = existing.clone();
    for entry in constants::GITIGNORE_ENTRIES {
        if !existing.lines().any(|l| l.trim() == *entry) {
            if !updated.is_empty() && !updated.ends_with('\n') {
                updated.push('\n');
            }
            updated.push_str(entry);
            updated.push('\n');
        }
    }

    if updated != existing {
        std::fs::write(&gitignore, updated)?;
    }

    Ok(())
}
