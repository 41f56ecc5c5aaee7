//! Check command.
//!
//! Resolves the configuration and reports the outcome. Exits non-zero on
//! any resolution error.

use crate::cli::{output, Context};
use crate::core::domain::DeploymentTarget;
use crate::core::source::SecretSource;
use crate::error::Result;

/// Resolve and report.
pub fn execute(ctx: &Context, target: Option<&str>) -> Result<()> {
    let (resolved, source) = ctx.resolve()?;

    match target {
        Some(name) => {
            let target = resolved.target(name)?;
            output::success(&format!("target '{}' resolved", target.name()));
            print_target(target);
        }
        None => {
            if resolved.is_empty() {
                output::warn("no targets configured");
            } else {
                output::success(&format!(
                    "configuration resolved ({} target{})",
                    resolved.len(),
                    if resolved.len() == 1 { "" } else { "s" }
                ));
            }
            output::kv("compiler", resolved.compiler().version());
            output::kv("source", source.describe());
            if let Some(name) = resolved.default_target() {
                output::kv("default", name);
            }
            for target in resolved.targets() {
                print_target(target);
            }
        }
    }

    Ok(())
}

fn print_target(target: &DeploymentTarget) {
    output::section(target.name());
    output::kv("endpoint", target.endpoint());
    output::kv("compiler", target.compiler_version());
    if let Some(chain_id) = target.chain_id() {
        output::kv("chain id", chain_id);
    }
    output::kv("accounts", target.accounts().len());
}
