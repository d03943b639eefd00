use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::{ConfigArg, UnwrapOrExit, load_manifest};
use crate::{
    ops::{self, HeadersOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct HeadersCommand {
    #[command(flatten)]
    pub config: ConfigArg,

    /// Directory to scan; repeatable (defaults to the configured roots)
    #[arg(short, long)]
    pub root: Vec<PathBuf>,

    /// Rewrite lines that do not match
    #[arg(long)]
    pub fix: bool,
}

impl HeadersCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = load_manifest(self.config.config.as_deref()).unwrap_or_exit();
        let roots = if self.root.is_empty() {
            manifest.headers.roots.iter().map(PathBuf::from).collect()
        } else {
            self.root.clone()
        };

        let report = ops::headers(
            &manifest,
            HeadersOptions {
                roots: &roots,
                fix: self.fix,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        if !report.passed() {
            std::process::exit(1);
        }
        Ok(())
    }
}
