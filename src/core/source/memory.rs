//! In-memory source.

use std::collections::BTreeMap;

use super::SecretSource;
use crate::core::domain::Secret;
use crate::error::Result;

/// Serves secrets from an in-memory map.
///
/// Useful for embedding quay in another tool that already holds its
/// secrets, and for tests.
#[derive(Debug, Clone, Default)]
pub struct Memory {
    secrets: BTreeMap<String, Secret>,
}

impl Memory {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a secret, builder style
    pub fn with(mut self, reference: impl Into<String>, value: impl Into<Secret>) -> Self {
        self.insert(reference, value);
        self
    }

    /// Add or replace a secret
    pub fn insert(&mut self, reference: impl Into<String>, value: impl Into<Secret>) {
        self.secrets.insert(reference.into(), value.into());
    }

    /// Remove a secret
    pub fn remove(&mut self, reference: &str) -> Option<Secret> {
        self.secrets.remove(reference)
    }

    /// Number of secrets
    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Memory
where
    K: Into<String>,
    V: Into<Secret>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut memory = Self::new();
        for (k, v) in iter {
            memory.insert(k, v);
        }
        memory
    }
}

impl SecretSource for Memory {
    fn lookup(&self, reference: &str) -> Result<Option<Secret>> {
        Ok(self.secrets.get(reference).cloned())
    }

    fn describe(&self) -> String {
        format!("memory ({} secrets)", self.secrets.len())
    }
}
