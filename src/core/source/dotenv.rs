//! `.env` file source.
//!
//! The file is parsed once with `dotenvy`. The process environment is left
//! untouched.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::SecretSource;
use crate::core::domain::Secret;
use crate::error::{Result, SourceError};

/// Serves secrets parsed from a `.env` file.
#[derive(Debug, Clone)]
pub struct DotEnv {
    path: PathBuf,
    entries: BTreeMap<String, Secret>,
}

impl DotEnv {
    /// Parse a `.env` file.
    ///
    /// Later definitions of the same variable replace earlier ones.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Read` if the file cannot be opened, or
    /// `SourceError::Parse` on a syntax error. Parse errors report the
    /// position only, never the offending line.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading env file");

        let iter = dotenvy::from_path_iter(path).map_err(|e| map_error(path, e))?;

        let mut entries = BTreeMap::new();
        for item in iter {
            let (key, value) = item.map_err(|e| map_error(path, e))?;
            entries.insert(key, Secret::new(value));
        }

        debug!(entries = entries.len(), "env file loaded");

        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// File path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn map_error(path: &Path, error: dotenvy::Error) -> crate::error::Error {
    match error {
        dotenvy::Error::Io(source) => SourceError::Read {
            path: path.to_path_buf(),
            source,
        }
        .into(),
        dotenvy::Error::LineParse(_, index) => SourceError::Parse {
            path: path.to_path_buf(),
            reason: format!("syntax error at offset {}", index),
        }
        .into(),
        other => SourceError::Parse {
            path: path.to_path_buf(),
            reason: other.to_string(),
        }
        .into(),
    }
}

impl SecretSource for DotEnv {
    fn lookup(&self, reference: &str) -> Result<Option<Secret>> {
        Ok(self.entries.get(reference).cloned())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
