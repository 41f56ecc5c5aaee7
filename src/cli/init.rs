//! Init command - write a starter target file.

use tracing::info;

use crate::cli::{output, Context};
use crate::core::config::{self, Config};
use crate::core::constants;
use crate::core::domain::Version;
use crate::error::{ConfigError, Result};

/// Write a starter `.quay.toml` and add `.env` to `.gitignore`.
pub fn execute(ctx: &Context, compiler: Option<String>, force: bool) -> Result<()> {
    let path = &ctx.config_path;
    if path.exists() && !force {
        return Err(ConfigError::AlreadyInitialized(path.clone()).into());
    }

    let compiler = compiler.unwrap_or_else(|| constants::DEFAULT_COMPILER_VERSION.to_string());
    compiler.parse::<Version>()?;

    let config = Config::template(compiler);
    config.save_to(path)?;
    config::ensure_gitignore(ctx.project_dir())?;

    info!(path = %path.display(), "initialized");

    output::success(&format!("initialized {}", path.display()));
    output::dimmed("secrets referenced (set these in your environment or .env):");
    for target in &config.targets {
        for reference in target.credential.iter().chain(&target.accounts) {
            output::list_item(&output::reference(reference));
        }
    }
    if let Some(explorer) = &config.explorer {
        output::list_item(&output::reference(&explorer.api_key));
    }

    Ok(())
}
