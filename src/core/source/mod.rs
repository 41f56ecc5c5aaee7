//! Secret sources.
//!
//! A secret source turns a reference (e.g. `ALCHEMY_API_KEY`) into secret
//! material. The resolver never reads secret files itself; it only asks a
//! source.
//!
//! ## Adding a New Source
//!
//! 1. Implement the `SecretSource` trait
//! 2. Add the implementation in a new file (e.g., `keychain.rs`)
//! 3. Re-export from this module
//!
//! ## Example
//!
//! ```ignore
//! struct Vault { /* ... */ }
//!
//! impl SecretSource for Vault {
//!     fn lookup(&self, reference: &str) -> Result<Option<Secret>> {
//!         // Fetch from the vault
//!     }
//!     fn describe(&self) -> String {
//!         "vault".to_string()
//!     }
//! }
//! ```

use std::path::Path;

use tracing::debug;

use crate::core::constants;
use crate::core::domain::Secret;
use crate::error::{ResolveError, Result};

mod chain;
mod dotenv;
mod env;
mod memory;

pub use chain::Chain;
pub use dotenv::DotEnv;
pub use env::Env;
pub use memory::Memory;

/// Secret lookup trait.
///
/// Implementations must not have side effects beyond reading their backing
/// store.
pub trait SecretSource: Send + Sync {
    /// Look up the secret behind a reference.
    ///
    /// # Returns
    ///
    /// `Ok(None)` if the source has no value for the reference.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if the source itself fails.
    fn lookup(&self, reference: &str) -> Result<Option<Secret>>;

    /// Short human-readable description, used in logs and `quay check`.
    fn describe(&self) -> String;

    /// Look up a secret that must be present.
    ///
    /// Empty values count as absent.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::MissingSecret` naming `required_by` if the
    /// secret is absent or empty.
    fn require(&self, reference: &str, required_by: &str) -> Result<Secret> {
        match self.lookup(reference)? {
            Some(secret) if !secret.is_empty() => Ok(secret),
            _ => Err(ResolveError::MissingSecret {
                reference: reference.to_string(),
                required_by: required_by.to_string(),
            }
            .into()),
        }
    }
}

/// Build the default secret source.
///
/// The process environment always comes first. After it:
/// - `env_file`, if given (it must exist)
/// - otherwise `<project_dir>/.env`, if it exists
///
/// # Errors
///
/// Returns `SourceError` if an explicitly requested env file cannot be read.
pub fn default_source(env_file: Option<&Path>, project_dir: &Path) -> Result<Chain> {
    let mut chain = Chain::new().with(Env);

    match env_file {
        Some(path) => {
            chain.push(DotEnv::load(path)?);
        }
        None => {
            let path = project_dir.join(constants::ENV_FILE);
            if path.is_file() {
                chain.push(DotEnv::load(&path)?);
            }
        }
    }

    debug!(source = %chain.describe(), "secret source ready");
    Ok(chain)
}
