//! Generate command report data structures.

use std::path::PathBuf;

use crudhook_core::ManifestUpdate;

use super::output::{Output, Report};

/// Report data from entity generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Entity name as given.
    pub entity: String,
    /// Number of schema fields.
    pub field_count: usize,
    /// Line the manifest carries for the entity.
    pub manifest_line: String,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Target root.
    pub root: PathBuf,
    /// Written files, relative to the root, in emission order.
    pub files: Vec<String>,
    /// Manifest that was checked.
    pub manifest_path: PathBuf,
    /// What happened to the manifest.
    pub manifest: ManifestUpdate,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
    /// Manifest that would be checked.
    pub manifest_path: PathBuf,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.preformatted(&format!(
            "{} ({} field{})",
            self.entity,
            self.field_count,
            if self.field_count == 1 { "" } else { "s" }
        ));
        out.newline();

        out.section(&format!("Generated in {}", written.root.display()));
        for file in &written.files {
            out.added_item(file);
        }
        out.newline();

        let status = match written.manifest {
            ManifestUpdate::Appended => "added",
            ManifestUpdate::AlreadyPresent => "already present",
        };
        out.key_value(
            "Manifest",
            &format!("{} ({})", written.manifest_path.display(), status),
        );
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
        out.preformatted(&format!(
            "{} would contain: {}",
            preview.manifest_path.display(),
            self.manifest_line
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render_written() {
        let report = GenerateReport {
            entity: "User".to_string(),
            field_count: 1,
            manifest_line: "export * from './User';".to_string(),
            result: GenerationResult::Written(WrittenResult {
                root: PathBuf::from("src"),
                files: vec!["User/api/userRequest.ts".to_string()],
                manifest_path: PathBuf::from("src/index.ts"),
                manifest: ManifestUpdate::AlreadyPresent,
            }),
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "User (1 field)",
                "",
                "Generated in src:",
                "  + User/api/userRequest.ts",
                "",
                "Manifest: src/index.ts (already present)",
            ]
        );
    }

    #[test]
    fn test_render_preview() {
        let report = GenerateReport {
            entity: "User".to_string(),
            field_count: 0,
            manifest_line: "export * from './User';".to_string(),
            result: GenerationResult::Preview(PreviewResult {
                files: vec![PreviewFile {
                    path: "User/index.ts".to_string(),
                    content: "export {};\n".to_string(),
                }],
                manifest_path: PathBuf::from("index.ts"),
            }),
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(out.lines[0], "── User/index.ts ──");
        assert_eq!(out.lines[3], "1 files would be generated");
        assert_eq!(out.lines[4], "index.ts would contain: export * from './User';");
    }
}
