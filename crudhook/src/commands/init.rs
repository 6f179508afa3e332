use std::path::PathBuf;

use clap::Args;
use dialoguer::{Confirm, theme::ColorfulTheme};
use eyre::{Context, Result};

use crate::ops;

#[derive(Args)]
pub struct InitCommand {
    /// Where to write the config
    #[arg(short, long, default_value = "crudhook.toml")]
    pub config: PathBuf,

    /// Overwrite an existing config without asking
    #[arg(short, long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        if self.config.exists() && !self.force && !Self::confirm_overwrite(&self.config)? {
            println!("Left {} unchanged", self.config.display());
            return Ok(());
        }

        ops::init(&self.config)?;

        println!("Created {}", self.config.display());
        println!();
        println!("Next steps:");
        println!("  crudhook generate --entity-name User --schema-file user.json");

        Ok(())
    }

    fn confirm_overwrite(path: &std::path::Path) -> Result<bool> {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("{} already exists. Overwrite it?", path.display()))
            .default(false)
            .interact()
            .wrap_err("Failed to get overwrite confirmation")
    }
}
