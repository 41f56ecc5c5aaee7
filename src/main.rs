//! Quay - deployment-target configuration for smart-contract toolchains.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use quay::cli::output;
use quay::cli::{execute, Cli, Context};
use quay::core::constants;
use quay::error::{ConfigError, Error, ResolveError, ValidationError};

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so `show --json` stays parseable.
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("quay=debug")
        } else {
            EnvFilter::new("quay=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let ctx = Context::new(cli.config, cli.env_file);

    if let Err(e) = execute(cli.command, &ctx) {
        let suggestion = match &e {
            Error::Config(ConfigError::NotInitialized(_)) => Some("run: quay init"),
            Error::Config(ConfigError::AlreadyInitialized(_)) => Some("run: quay init --force"),
            Error::Resolve(ResolveError::MissingSecret { .. }) => {
                Some("export the variable, or add it to .env (never to .quay.toml)")
            }
            Error::Validation(ValidationError::InvalidReference { .. }) => {
                Some("reference secrets by variable name, e.g. ALCHEMY_API_KEY")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
