//! ResolvedConfig type.
//!
//! The validated, immutable result of resolution. Holds references to
//! signing keys and the explorer key, never their values; those are
//! fetched from a [`SecretSource`] at the point of use.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{CompilerSettings, DeploymentTarget, ExplorerCredential, Secret};
use crate::core::source::SecretSource;
use crate::core::types::TargetName;
use crate::error::{ResolveError, Result};

/// A fully resolved configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    compiler: CompilerSettings,
    targets: BTreeMap<TargetName, DeploymentTarget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    explorer: Option<ExplorerCredential>,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_target: Option<TargetName>,
}

impl ResolvedConfig {
    pub(crate) fn new(
        compiler: CompilerSettings,
        targets: BTreeMap<TargetName, DeploymentTarget>,
        explorer: Option<ExplorerCredential>,
        default_target: Option<TargetName>,
    ) -> Self {
        Self {
            compiler,
            targets,
            explorer,
            default_target,
        }
    }

    /// Global compiler settings
    pub fn compiler(&self) -> &CompilerSettings {
        &self.compiler
    }

    /// All targets, ordered by name
    pub fn targets(&self) -> impl Iterator<Item = &DeploymentTarget> {
        self.targets.values()
    }

    /// Number of targets
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether no targets are configured
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Look up a target by name
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::UnknownTarget` if no target has that name.
    pub fn target(&self, name: &str) -> Result<&DeploymentTarget> {
        self.targets
            .get(name)
            .ok_or_else(|| ResolveError::UnknownTarget(name.to_string()).into())
    }

    /// Name of the default target, if one is configured
    pub fn default_target(&self) -> Option<&str> {
        self.default_target.as_deref()
    }

    /// Explorer credential reference, if configured
    pub fn explorer(&self) -> Option<&ExplorerCredential> {
        self.explorer.as_ref()
    }

    /// Fetch the signing keys for a target.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::UnknownTarget` for an unknown name, or
    /// `ResolveError::MissingSecret` if a key has disappeared from the source
    /// since resolution.
    pub fn signing_keys(&self, name: &str, source: &dyn SecretSource) -> Result<Vec<Secret>> {
        let target = self.target(name)?;
        let required_by = format!("target '{}'", target.name());
        target
            .accounts()
            .iter()
            .map(|reference| source.require(reference, &required_by))
            .collect()
    }

    /// Fetch the explorer API key, if an explorer is configured.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::MissingSecret` if the key is absent.
    pub fn explorer_key(&self, source: &dyn SecretSource) -> Result<Option<Secret>> {
        self.explorer
            .as_ref()
            .map(|explorer| source.require(explorer.api_key_ref(), "explorer"))
            .transpose()
    }
}
