mod bake;
mod completions;
mod headers;
mod init;

use std::path::{Path, PathBuf};

use bake::BakeCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use ctlegen_manifest::{Manifest, ManifestFile};
use eyre::Result;
use headers::HeadersCommand;
use init::InitCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for ctlegen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Load `--config` when given, else `./ctlegen.toml` if present, else defaults.
pub(crate) fn load_manifest(config: Option<&Path>) -> ctlegen_manifest::Result<Manifest> {
    Ok(ManifestFile::discover(config, Path::new("."))?
        .map(ManifestFile::into_manifest)
        .unwrap_or_default())
}

#[derive(Parser)]
#[command(name = "ctlegen")]
#[command(version)]
#[command(about = "Generate and check the sources of the ctle C++ library")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Bake(cmd) => cmd.run(),
            Commands::Headers(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the ctle headers, inline files and unit-test variants
    Bake(BakeCommand),

    /// Check (and optionally fix) license headers and include guards
    Headers(HeadersCommand),

    /// Write a default ctlegen.toml
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Shared `--config` argument.
#[derive(clap::Args)]
pub(crate) struct ConfigArg {
    /// Path to ctlegen.toml (defaults to ./ctlegen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
