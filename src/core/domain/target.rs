//! Resolved target, explorer and compiler types.

use serde::{Deserialize, Serialize};

use super::{Endpoint, Version};
use crate::core::types::{SecretRef, TargetName};

/// A validated deployment target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentTarget {
    pub(crate) name: TargetName,
    pub(crate) endpoint: Endpoint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) credential: Option<SecretRef>,
    pub(crate) accounts: Vec<SecretRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) chain_id: Option<u64>,
    pub(crate) compiler_version: Version,
}

impl DeploymentTarget {
    /// Target name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolved endpoint
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Reference substituted into the endpoint template, if any
    pub fn credential_ref(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    /// References to the signing keys for this target
    pub fn accounts(&self) -> &[SecretRef] {
        &self.accounts
    }

    /// Expected chain id
    pub fn chain_id(&self) -> Option<u64> {
        self.chain_id
    }

    /// Compiler version used when building for this target
    pub fn compiler_version(&self) -> &Version {
        &self.compiler_version
    }
}

/// Block-explorer credential reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplorerCredential {
    pub(crate) api_key_ref: SecretRef,
}

impl ExplorerCredential {
    /// Reference to the explorer API key
    pub fn api_key_ref(&self) -> &str {
        &self.api_key_ref
    }
}

/// Optimizer settings passed through to the compiler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Optimizer {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_runs")]
    pub runs: u32,
}

fn default_runs() -> u32 {
    200
}

/// Validated compiler settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompilerSettings {
    pub(crate) version: Version,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) optimizer: Option<Optimizer>,
}

impl CompilerSettings {
    /// Global compiler version
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Optimizer settings, if configured
    pub fn optimizer(&self) -> Option<Optimizer> {
        self.optimizer
    }
}
