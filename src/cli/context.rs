//! Shared loading for CLI commands.

use std::path::{Path, PathBuf};

use crate::core::config::Config;
use crate::core::domain::ResolvedConfig;
use crate::core::source::{self, Chain};
use crate::error::Result;

/// Paths selected on the command line.
#[derive(Debug, Clone)]
pub struct Context {
    pub config_path: PathBuf,
    pub env_file: Option<PathBuf>,
}

impl Context {
    pub fn new(config_path: PathBuf, env_file: Option<PathBuf>) -> Self {
        Self {
            config_path,
            env_file,
        }
    }

    /// Directory holding the target file; the default `.env` lives here too.
    pub fn project_dir(&self) -> &Path {
        match self.config_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }

    /// Load the target file and apply environment overrides.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_from(&self.config_path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Build the secret source for this invocation.
    pub fn source(&self) -> Result<Chain> {
        source::default_source(self.env_file.as_deref(), self.project_dir())
    }

    /// Load, build the source and resolve.
    pub fn resolve(&self) -> Result<(ResolvedConfig, Chain)> {
        let config = self.load_config()?;
        let source = self.source()?;
        let resolved = config.resolve(&source)?;
        Ok((resolved, source))
    }
}
