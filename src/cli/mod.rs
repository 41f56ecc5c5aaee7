//! Command-line interface.

pub mod check;
pub mod completions;
pub mod context;
pub mod init;
pub mod output;
pub mod show;
pub mod targets;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::constants;
pub use context::Context;

/// Quay - deployment-target configuration without secrets in the repo.
#[derive(Parser)]
#[command(
    name = "quay",
    about = "Deployment-target configuration for smart-contract toolchains",
    version
)]
pub struct Cli {
    /// Path to the target file
    #[arg(long, global = true, env = constants::CONFIG_ENV, default_value = constants::CONFIG_FILE)]
    pub config: PathBuf,

    /// Read secrets from this .env file after the environment
    #[arg(long, global = true)]
    pub env_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Write a starter .quay.toml and protect .env in .gitignore
    Init {
        /// Compiler version to record
        #[arg(long)]
        compiler: Option<String>,
        /// Overwrite an existing target file
        #[arg(short, long)]
        force: bool,
    },

    /// Resolve the configuration and report problems
    Check {
        /// Only report this target
        #[arg(short, long)]
        target: Option<String>,
    },

    /// Print the resolved configuration with secrets redacted
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List targets and the secrets they reference
    Targets,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command, ctx: &Context) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Init { compiler, force } => init::execute(ctx, compiler, force),
        Check { target } => check::execute(ctx, target.as_deref()),
        Show { json } => show::execute(ctx, json),
        Targets => targets::execute(ctx),
        Completions { shell } => completions::execute(shell),
    }
}
