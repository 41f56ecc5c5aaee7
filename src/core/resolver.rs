//! Configuration resolution.
//!
//! Turns raw targets, explorer and compiler settings into a validated
//! [`ResolvedConfig`]. Resolution is all-or-nothing: the first failure is
//! returned and nothing partial escapes.
//!
//! Order of checks:
//! 1. Global compiler version
//! 2. Each target in file order: name, duplicate, compiler override,
//!    endpoint substitution and validation, account keys
//! 3. Explorer key
//! 4. Default target exists

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::core::config::{RawCompiler, RawExplorer, RawTarget};
use crate::core::constants::KEY_PLACEHOLDER;
use crate::core::domain::{
    CompilerSettings, DeploymentTarget, Endpoint, ExplorerCredential, ResolvedConfig, Version,
};
use crate::core::source::SecretSource;
use crate::core::types::TargetName;
use crate::core::validation;
use crate::error::{ResolveError, Result};

/// Resolves raw configuration against a secret source.
///
/// Holds no state between calls; the same inputs and an unchanged source
/// always produce equal results.
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    default_target: Option<TargetName>,
}

impl ConfigResolver {
    /// Create a resolver with no default target
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `name` to be one of the resolved targets and record it as the default
    pub fn default_target(mut self, name: Option<TargetName>) -> Self {
        self.default_target = name;
        self
    }

    /// Resolve raw configuration into a [`ResolvedConfig`].
    ///
    /// # Arguments
    ///
    /// * `targets` - Raw targets in file order
    /// * `explorer` - Raw explorer settings, if any
    /// * `compiler` - Raw global compiler settings
    /// * `source` - Where secrets are looked up
    ///
    /// # Errors
    ///
    /// - `ResolveError::InvalidVersion` for a malformed compiler version
    /// - `ResolveError::DuplicateTargetName` when two targets share a name
    /// - `ResolveError::MissingSecret` when a referenced secret is absent
    /// - `ResolveError::InvalidEndpoint` when the resolved URL is malformed
    /// - `ResolveError::UnknownTarget` when the default target doesn't exist
    /// - `ValidationError` for malformed names or references
    /// - `SourceError` if the source itself fails
    pub fn resolve(
        &self,
        targets: &[RawTarget],
        explorer: Option<&RawExplorer>,
        compiler: &RawCompiler,
        source: &dyn SecretSource,
    ) -> Result<ResolvedConfig> {
        debug!(
            targets = targets.len(),
            source = %source.describe(),
            "resolving configuration"
        );

        let version: Version = compiler.version.parse()?;
        let compiler = CompilerSettings {
            version,
            optimizer: compiler.optimizer,
        };

        let mut resolved = BTreeMap::new();
        for raw in targets {
            validation::validate_target_name(&raw.name)?;
            if resolved.contains_key(&raw.name) {
                return Err(ResolveError::DuplicateTargetName(raw.name.clone()).into());
            }

            let target = resolve_target(raw, &compiler.version, source)?;
            debug!(target = %target.name, accounts = target.accounts.len(), "target resolved");
            resolved.insert(raw.name.clone(), target);
        }

        let explorer = explorer
            .map(|raw| resolve_explorer(raw, source))
            .transpose()?;

        if let Some(name) = &self.default_target {
            if !resolved.contains_key(name) {
                return Err(ResolveError::UnknownTarget(name.clone()).into());
            }
        }

        info!(targets = resolved.len(), "configuration resolved");

        Ok(ResolvedConfig::new(
            compiler,
            resolved,
            explorer,
            self.default_target.clone(),
        ))
    }
}

fn resolve_target(
    raw: &RawTarget,
    global_version: &Version,
    source: &dyn SecretSource,
) -> Result<DeploymentTarget> {
    let required_by = format!("target '{}'", raw.name);

    let compiler_version = match &raw.compiler {
        Some(version) => version.parse()?,
        None => global_version.clone(),
    };

    let endpoint = resolve_endpoint(raw, &required_by, source)?;

    for account in &raw.accounts {
        validation::validate_reference(account)?;
        // Only presence is checked; the key itself is fetched again at use.
        source.require(account, &required_by)?;
    }

    Ok(DeploymentTarget {
        name: raw.name.clone(),
        endpoint,
        credential: raw.credential.clone(),
        accounts: raw.accounts.clone(),
        chain_id: raw.chain_id,
        compiler_version,
    })
}

fn resolve_endpoint(
    raw: &RawTarget,
    required_by: &str,
    source: &dyn SecretSource,
) -> Result<Endpoint> {
    let template = raw.url.trim();
    let needs_key = template.contains(KEY_PLACEHOLDER);

    let url = match (&raw.credential, needs_key) {
        (Some(reference), true) => {
            validation::validate_reference(reference)?;
            let secret = source.require(reference, required_by)?;
            template.replace(KEY_PLACEHOLDER, secret.expose())
        }
        (Some(reference), false) => {
            validation::validate_reference(reference)?;
            source.require(reference, required_by)?;
            template.to_string()
        }
        (None, true) => {
            return Err(ResolveError::InvalidEndpoint {
                target: raw.name.clone(),
                reason: format!("{} placeholder but no credential", KEY_PLACEHOLDER),
            }
            .into());
        }
        (None, false) => template.to_string(),
    };

    validation::validate_endpoint(&raw.name, &url)?;

    Ok(Endpoint::new(template.to_string(), url))
}

fn resolve_explorer(raw: &RawExplorer, source: &dyn SecretSource) -> Result<ExplorerCredential> {
    validation::validate_reference(&raw.api_key)?;
    source.require(&raw.api_key, "explorer")?;
    Ok(ExplorerCredential {
        api_key_ref: raw.api_key.clone(),
    })
}
