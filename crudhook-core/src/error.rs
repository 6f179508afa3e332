use std::path::PathBuf;

use thiserror::Error;

/// Filesystem failure during materialization, carrying the offending path.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("failed to create directory '{}'", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// The path the failed operation targeted.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::CreateDir { path, .. } | Self::Write { path, .. } | Self::Read { path, .. } => {
                path
            }
        }
    }
}
