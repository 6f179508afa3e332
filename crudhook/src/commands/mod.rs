mod check;
mod completions;
mod generate;
mod init;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use crudhook_schema::{EntityName, Schema, SchemaSource};
use eyre::Result;
use generate::GenerateCommand;
use init::InitCommand;

/// Extension trait for exiting on schema and config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for crudhook_schema::Result<T> {
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

#[derive(Parser)]
#[command(name = "crudhook")]
#[command(version)]
#[command(about = "Generate API clients, types and React Query hooks for an entity")]
pub(crate) struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the client, types, hooks and barrel for an entity
    Generate(GenerateCommand),

    /// Validate an entity schema and show what would be generated
    Check(CheckCommand),

    /// Write a default crudhook.toml
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Entity name and schema input shared by `generate` and `check`.
#[derive(Args)]
pub(crate) struct EntityArgs {
    /// Entity name, used verbatim for type names and the entity directory
    #[arg(long = "entity-name", visible_alias = "entityName", value_name = "NAME")]
    pub entity_name: String,

    /// Entity schema as inline JSON (takes precedence over --schema-file)
    #[arg(
        long = "entity-properties",
        visible_alias = "entityProperties",
        value_name = "JSON"
    )]
    pub entity_properties: Option<String>,

    /// Path to a JSON schema file, or `-` to read standard input
    #[arg(short, long, value_name = "PATH")]
    pub schema_file: Option<PathBuf>,
}

impl EntityArgs {
    /// Validate the name, resolve the schema source and parse it.
    pub fn load(&self) -> crudhook_schema::Result<(EntityName, Schema)> {
        let entity = EntityName::new(self.entity_name.as_str())?;
        let source = SchemaSource::resolve(
            self.entity_properties.clone(),
            self.schema_file.clone(),
        )?;
        tracing::debug!(source = %source.display_name(), "loading schema");
        let schema = source.load()?;
        Ok((entity, schema))
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_camel_case_aliases() {
        let cli = Cli::try_parse_from([
            "crudhook",
            "generate",
            "--entityName",
            "User",
            "--entityProperties",
            "{}",
        ])
        .unwrap();
        let Commands::Generate(cmd) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(cmd.entity.entity_name, "User");
        assert_eq!(cmd.entity.entity_properties.as_deref(), Some("{}"));
    }

    #[test]
    fn test_entity_args_load() {
        let args = EntityArgs {
            entity_name: "User".to_string(),
            entity_properties: Some(r#"{"id":{"name":"id","type":"string"}}"#.to_string()),
            schema_file: None,
        };
        let (entity, schema) = args.load().unwrap();
        assert_eq!(entity.as_str(), "User");
        assert_eq!(schema.len(), 1);
    }

    #[test]
    fn test_entity_args_missing_schema() {
        let args = EntityArgs {
            entity_name: "User".to_string(),
            entity_properties: None,
            schema_file: None,
        };
        let err = args.load().unwrap_err();
        assert!(matches!(*err, crudhook_schema::Error::MissingInput));
    }

    #[test]
    fn test_entity_args_empty_name() {
        let args = EntityArgs {
            entity_name: "  ".to_string(),
            entity_properties: Some("{}".to_string()),
            schema_file: None,
        };
        let err = args.load().unwrap_err();
        assert!(matches!(*err, crudhook_schema::Error::EmptyEntityName));
    }
}
