use std::path::PathBuf;

use clap::Args;
use ctlegen_codegen::generation::CtlegenToml;
use ctlegen_core::{GeneratedFile, Overwrite, WriteResult};
use ctlegen_manifest::Manifest;
use dialoguer::{Confirm, theme::ColorfulTheme};
use eyre::{Context, Result};

#[derive(Args)]
pub struct InitCommand {
    /// Directory to write ctlegen.toml into
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Overwrite an existing ctlegen.toml without asking
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let path = self.output.join(Manifest::FILE_NAME);
        let overwrite = if !path.exists() {
            Overwrite::IfMissing
        } else if self.force || Self::confirm_overwrite(&path)? {
            Overwrite::Always
        } else {
            println!("Kept existing {}", path.display());
            return Ok(());
        };

        let result = CtlegenToml::default()
            .with_overwrite(overwrite)
            .write(&self.output)
            .wrap_err_with(|| format!("failed to write {}", path.display()))?;

        match result {
            WriteResult::Written => println!("Created {}", path.display()),
            WriteResult::Skipped => println!("Kept existing {}", path.display()),
        }
        Ok(())
    }

    fn confirm_overwrite(path: &std::path::Path) -> Result<bool> {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("{} already exists. Overwrite it?", path.display()))
            .default(false)
            .interact()
            .wrap_err("Failed to get confirmation")
    }
}
