use std::path::{Path, PathBuf};

use crate::FsError;

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Render into a materializable artifact with a path relative to the target root.
    fn to_file(&self) -> File {
        File::new(self.path(Path::new("")), self.render())
    }
}

/// Write `content` to `path`, creating parent directories and overwriting any existing file.
pub fn write_file(path: &Path, content: &str) -> Result<(), FsError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| FsError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, content).map_err(|source| FsError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// A rendered artifact: a path relative to the target root and its content.
///
/// Artifacts are produced before anything touches the disk and consumed
/// exactly once by [`File::write`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given relative path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the relative file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the file under `base`, always overwriting. Returns the full path written.
    pub fn write(self, base: &Path) -> Result<PathBuf, FsError> {
        let path = base.join(&self.path);
        write_file(&path, &self.content)?;
        tracing::debug!(path = %path.display(), bytes = self.content.len(), "wrote artifact");
        Ok(path)
    }
}
