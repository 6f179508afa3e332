use std::path::PathBuf;

use clap::Args;
use crudhook_codegen_typescript::GeneratorOptions;
use crudhook_schema::{Config, HooksLayout};
use eyre::Result;

use super::{EntityArgs, UnwrapOrExit};
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub entity: EntityArgs,

    /// Path to crudhook.toml (defaults apply when it does not exist)
    #[arg(short, long, default_value = "crudhook.toml")]
    pub config: PathBuf,

    /// Target root (overrides `output.root`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Hooks file layout: `single` or `per-operation` (overrides `output.hooks`)
    #[arg(long, value_name = "LAYOUT")]
    pub hooks: Option<HooksLayout>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = Config::load(&self.config).unwrap_or_exit();
        let (entity, schema) = self.entity.load().unwrap_or_exit();

        let mut options = GeneratorOptions::from(&config);
        if let Some(hooks) = self.hooks {
            options.hooks = hooks;
        }
        let root = self
            .output
            .clone()
            .unwrap_or_else(|| config.output.root.clone());

        let report = ops::generate(
            &entity,
            schema,
            options,
            GenerateOptions {
                root: &root,
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
