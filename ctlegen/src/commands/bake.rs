use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::{ConfigArg, UnwrapOrExit, load_manifest};
use crate::{
    ops::{self, BakeOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct BakeCommand {
    #[command(flatten)]
    pub config: ConfigArg,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Print the generated files instead of writing them
    #[arg(long)]
    pub dry_run: bool,
}

impl BakeCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = load_manifest(self.config.config.as_deref()).unwrap_or_exit();
        let mut out = TerminalOutput::new();
        let report = ops::bake(
            &manifest,
            BakeOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
            },
            &mut |status| status.render(&mut out),
        )?;
        report.render(&mut out);
        Ok(())
    }
}
