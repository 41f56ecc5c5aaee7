//! Show command - print the redacted resolved configuration.

use crate::cli::{output, Context};
use crate::error::Result;

/// Print the resolved configuration.
pub fn execute(ctx: &Context, json: bool) -> Result<()> {
    let (resolved, _) = ctx.resolve()?;

    if json {
        output::data(&serde_json::to_string_pretty(&resolved)?);
        return Ok(());
    }

    output::header("Compiler");
    output::kv("version", resolved.compiler().version());
    if let Some(optimizer) = resolved.compiler().optimizer() {
        output::kv(
            "optimizer",
            if optimizer.enabled {
                format!("on ({} runs)", optimizer.runs)
            } else {
                "off".to_string()
            },
        );
    }

    for target in resolved.targets() {
        let title = if resolved.default_target() == Some(target.name()) {
            format!("{} (default)", target.name())
        } else {
            target.name().to_string()
        };
        output::section(&title);
        let endpoint = target.endpoint();
        if endpoint.has_credential() {
            output::kv("endpoint", format!("{} (keyed)", endpoint));
        } else {
            output::kv("endpoint", endpoint);
        }
        if let Some(credential) = target.credential_ref() {
            output::kv("credential", output::reference(credential));
        }
        for account in target.accounts() {
            output::kv("account", output::reference(account));
        }
        if let Some(chain_id) = target.chain_id() {
            output::kv("chain id", chain_id);
        }
        output::kv("compiler", target.compiler_version());
    }

    if let Some(explorer) = resolved.explorer() {
        output::section("Explorer");
        output::kv("api key", output::reference(explorer.api_key_ref()));
    }

    Ok(())
}
