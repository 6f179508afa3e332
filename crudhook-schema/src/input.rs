use std::{
    io::Read,
    path::{Path, PathBuf},
};

use crate::{Error, Result, Schema};

/// Where the entity schema comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaSource {
    /// JSON passed directly on the command line.
    Inline(String),
    /// A JSON file on disk.
    File(PathBuf),
    /// JSON piped on standard input (`--schema-file -`).
    Stdin,
}

impl SchemaSource {
    /// Pick a source from the two mutually exclusive inputs.
    ///
    /// Inline JSON wins when both are given. Neither is `Error::MissingInput`.
    pub fn resolve(inline: Option<String>, file: Option<PathBuf>) -> Result<Self> {
        match (inline, file) {
            (Some(json), _) => Ok(Self::Inline(json)),
            (None, Some(path)) if path == Path::new("-") => Ok(Self::Stdin),
            (None, Some(path)) => Ok(Self::File(path)),
            (None, None) => Err(Box::new(Error::MissingInput)),
        }
    }

    /// Label used for diagnostics.
    pub fn display_name(&self) -> String {
        match self {
            Self::Inline(_) => "<entity-properties>".to_string(),
            Self::File(path) => path.display().to_string(),
            Self::Stdin => "<stdin>".to_string(),
        }
    }

    /// Read the raw JSON text.
    pub fn read(&self) -> Result<String> {
        match self {
            Self::Inline(json) => Ok(json.clone()),
            Self::File(path) => std::fs::read_to_string(path).map_err(|source| {
                Box::new(Error::Io {
                    path: path.clone(),
                    source,
                })
            }),
            Self::Stdin => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .map_err(|source| {
                        Box::new(Error::Io {
                            path: PathBuf::from("-"),
                            source,
                        })
                    })?;
                Ok(buf)
            }
        }
    }

    /// Read and parse the schema.
    pub fn load(&self) -> Result<Schema> {
        let content = self.read()?;
        Schema::from_json_str(&content, &self.display_name())
    }
}
