//! TypeScript entity generator.

use std::path::{Path, PathBuf};

use crudhook_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
use crudhook_core::{File, GeneratedFile, ensure_exported};
use crudhook_schema::{Config, EntityName, HooksLayout, Schema};
use eyre::{Result, WrapErr};

use crate::{
    files::{ClientTs, EntityIndexTs, HooksTs, TypesTs},
    naming::{CrudOp, DerivedNames},
};

/// Output settings for a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub hooks: HooksLayout,
    /// Extension of every generated file, without the dot.
    pub extension: String,
    /// Manifest file stem under the output root.
    pub manifest: String,
    /// Module exporting `BASE_URL` and `httpClient`.
    pub http_module: String,
    /// Module exporting the query hooks.
    pub query_module: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for GeneratorOptions {
    fn from(config: &Config) -> Self {
        Self {
            hooks: config.output.hooks,
            extension: config.output.extension.clone(),
            manifest: config.output.manifest.clone(),
            http_module: config.imports.http.clone(),
            query_module: config.imports.query.clone(),
        }
    }
}

/// Generates the client, types, hooks and barrel of one entity, and keeps
/// the shared manifest exporting it.
pub struct Generator {
    schema: Schema,
    names: DerivedNames,
    options: GeneratorOptions,
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn file_extension(&self) -> &str {
        &self.options.extension
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.artifacts()
            .into_iter()
            .map(|file| PreviewFile {
                path: file.path().display().to_string(),
                content: file.content().to_string(),
            })
            .collect()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        self.generate_files(output_dir)
    }
}

impl Generator {
    /// Names are derived here, once, and shared by every artifact.
    pub fn new(entity: &EntityName, schema: Schema, options: GeneratorOptions) -> Self {
        Self {
            schema,
            names: DerivedNames::derive(entity),
            options,
        }
    }

    pub fn names(&self) -> &DerivedNames {
        &self.names
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Manifest path relative to the output root.
    pub fn manifest_file(&self) -> PathBuf {
        PathBuf::from(format!(
            "{}.{}",
            self.options.manifest, self.options.extension
        ))
    }

    /// Export line the manifest must contain for this entity.
    pub fn manifest_line(&self) -> String {
        self.names.manifest_line()
    }

    /// Render every artifact. Nothing touches the disk.
    pub fn artifacts(&self) -> Vec<File> {
        let names = &self.names;
        let ext = self.options.extension.as_str();

        let client = ClientTs::new(names, &self.options.http_module, ext);
        let types = TypesTs::new(names, &self.schema, ext);
        let hooks: Vec<HooksTs> = match self.options.hooks {
            HooksLayout::Single => vec![HooksTs::single(names, &self.options.query_module, ext)],
            HooksLayout::PerOperation => CrudOp::ALL
                .iter()
                .map(|op| HooksTs::per_operation(names, *op, &self.options.query_module, ext))
                .collect(),
        };
        let index = hooks.iter().fold(
            EntityIndexTs::new(names, ext).module(&client).module(&types),
            |index, h| index.module(h),
        );

        let mut files = vec![client.to_file(), types.to_file()];
        files.extend(hooks.iter().map(|h| h.to_file()));
        files.push(index.to_file());
        files
    }

    fn generate_files(&self, output_dir: &Path) -> Result<GenerateResult> {
        let artifacts = self.artifacts();
        tracing::info!(
            entity = %self.names.entity,
            fields = self.schema.len(),
            artifacts = artifacts.len(),
            root = %output_dir.display(),
            "generating entity"
        );

        let mut written = Vec::with_capacity(artifacts.len());
        for file in artifacts {
            let relative = file.path().to_path_buf();
            let path = file
                .write(output_dir)
                .wrap_err_with(|| format!("failed to write {}", relative.display()))?;
            written.push(path);
        }

        let manifest_path = output_dir.join(self.manifest_file());
        let manifest = ensure_exported(&manifest_path, &self.manifest_line())
            .wrap_err("failed to update export manifest")?;
        tracing::info!(manifest = %manifest_path.display(), outcome = ?manifest, "manifest checked");

        Ok(GenerateResult {
            written,
            manifest_path,
            manifest,
        })
    }
}
