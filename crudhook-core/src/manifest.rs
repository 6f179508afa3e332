//! Shared export manifest maintenance.
//!
//! The manifest is the top-level index file that re-exports every generated
//! entity. It is only ever appended to, one line per entity, and is read as a
//! set of distinct trimmed lines so that re-running generation never
//! duplicates an entry.

use std::{collections::HashSet, fs::OpenOptions, io::Write, path::Path};

use crate::{FsError, write_file};

/// Outcome of [`ensure_exported`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestUpdate {
    /// The export line was appended.
    Appended,
    /// The export line was already present; the file was left untouched.
    AlreadyPresent,
}

/// Read the manifest at `path` as a set of distinct trimmed, non-empty lines.
///
/// Invalid UTF-8 is decoded lossily; only I/O failures are errors.
pub fn export_lines(path: &Path) -> Result<HashSet<String>, FsError> {
    let bytes = std::fs::read(path).map_err(|source| FsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Ensure `line` appears exactly once in the manifest at `path`.
///
/// A missing manifest is created empty first. Membership is an exact match
/// against the trimmed lines of the file, so `export * from './User';` does not
/// count as present just because `export * from './UserProfile';` is.
///
/// A manifest that exists but cannot be read is treated as not containing the
/// line; the append is still attempted.
///
/// The read-then-append sequence is not atomic across processes.
pub fn ensure_exported(path: &Path, line: &str) -> Result<ManifestUpdate, FsError> {
    let wanted = line.trim();

    if !path.exists() {
        write_file(path, "")?;
    }

    let existing = match export_lines(path) {
        Ok(lines) => lines,
        Err(err) => {
            tracing::warn!(error = %err, "treating unreadable manifest as empty");
            HashSet::new()
        }
    };

    if existing.contains(wanted) {
        tracing::debug!(manifest = %path.display(), line = wanted, "export already present");
        return Ok(ManifestUpdate::AlreadyPresent);
    }

    let needs_separator = std::fs::read(path)
        .map(|bytes| bytes.last().is_some_and(|b| *b != b'\n'))
        .unwrap_or(false);

    let write_err = |source| FsError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(write_err)?;
    let mut entry = String::with_capacity(wanted.len() + 2);
    if needs_separator {
        entry.push('\n');
    }
    entry.push_str(wanted);
    entry.push('\n');
    file.write_all(entry.as_bytes()).map_err(write_err)?;

    tracing::debug!(manifest = %path.display(), line = wanted, "appended export");
    Ok(ManifestUpdate::Appended)
}
