//! Ordered fallback across several sources.

use super::SecretSource;
use crate::core::domain::Secret;
use crate::error::Result;

/// Asks each source in order; the first one with a non-empty value wins.
#[derive(Default)]
pub struct Chain {
    sources: Vec<Box<dyn SecretSource>>,
}

impl Chain {
    /// Create an empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a source, builder style
    pub fn with(mut self, source: impl SecretSource + 'static) -> Self {
        self.push(source);
        self
    }

    /// Append a source
    pub fn push(&mut self, source: impl SecretSource + 'static) {
        self.sources.push(Box::new(source));
    }

    /// Number of sources
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl SecretSource for Chain {
    fn lookup(&self, reference: &str) -> Result<Option<Secret>> {
        for source in &self.sources {
            if let Some(secret) = source.lookup(reference)?.filter(|s| !s.is_empty()) {
                return Ok(Some(secret));
            }
        }
        Ok(None)
    }

    fn describe(&self) -> String {
        if self.sources.is_empty() {
            return "none".to_string();
        }
        self.sources
            .iter()
            .map(|s| s.describe())
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}
