//! Generate operation - entity artifacts and manifest update.

use std::path::Path;

use crudhook_codegen_typescript::{Generator, GeneratorOptions, LanguageCodegen};
use crudhook_schema::{EntityName, Schema};
use eyre::{Context, Result};

use crate::reports::{
    GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult,
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Target root holding entity directories and the manifest.
    pub root: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// The schema is already validated; nothing here can fail before the first write.
pub fn generate(
    entity: &EntityName,
    schema: Schema,
    options: GeneratorOptions,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let field_count = schema.len();
    let generator = Generator::new(entity, schema, options);
    let manifest_line = generator.manifest_line();

    let result = if opts.dry_run {
        let files = generator
            .preview()
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(PreviewResult {
            files,
            manifest_path: opts.root.join(generator.manifest_file()),
        })
    } else {
        let generated = generator
            .generate(opts.root)
            .wrap_err("Failed to generate code")?;

        let files = generated
            .written
            .iter()
            .map(|path| {
                path.strip_prefix(opts.root)
                    .unwrap_or(path)
                    .display()
                    .to_string()
            })
            .collect();

        GenerationResult::Written(WrittenResult {
            root: opts.root.to_path_buf(),
            files,
            manifest_path: generated.manifest_path,
            manifest: generated.manifest,
        })
    };

    Ok(GenerateReport {
        entity: entity.to_string(),
        field_count,
        manifest_line,
        result,
    })
}
