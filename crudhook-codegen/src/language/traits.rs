//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use crudhook_core::ManifestUpdate;
use eyre::Result;

/// Trait for language-specific code generators.
///
/// Implement this trait to add support for generating entity artifacts in a new language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "typescript")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "ts", "tsx")
    fn file_extension(&self) -> &str;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug)]
pub struct GenerateResult {
    /// Files that were written, in emission order
    pub written: Vec<PathBuf>,
    /// Path of the shared export manifest
    pub manifest_path: PathBuf,
    /// What happened to the manifest
    pub manifest: ManifestUpdate,
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
