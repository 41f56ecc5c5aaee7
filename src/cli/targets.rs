//! Targets command - list targets without resolving secrets.

use crate::cli::{output, Context};
use crate::error::Result;

/// List targets and the references they use.
pub fn execute(ctx: &Context) -> Result<()> {
    let config = ctx.load_config()?;

    if config.targets.is_empty() {
        output::dimmed("no targets configured");
        return Ok(());
    }

    for target in &config.targets {
        let mut refs: Vec<String> = target
            .credential
            .iter()
            .chain(&target.accounts)
            .map(|r| output::reference(r))
            .collect();
        if refs.is_empty() {
            refs.push("no secrets".to_string());
        }
        output::kv(&target.name, refs.join(", "));
    }

    Ok(())
}
