use std::path::PathBuf;

use clap::Args;
use crudhook_codegen_typescript::GeneratorOptions;
use crudhook_schema::Config;
use eyre::Result;

use super::{EntityArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub entity: EntityArgs,

    /// Path to crudhook.toml (defaults apply when it does not exist)
    #[arg(short, long, default_value = "crudhook.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = Config::load(&self.config).unwrap_or_exit();
        let (entity, schema) = self.entity.load().unwrap_or_exit();

        let report = ops::check(&entity, schema, GeneratorOptions::from(&config));
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
