use std::{fmt, str::FromStr};

use crate::{Error, Result};

/// The name of the entity artifacts are generated for.
///
/// The casing is kept exactly as given; it becomes the base of every type and
/// symbol name, so callers pass it the way they want types to read (`User`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityName(String);

impl EntityName {
    /// Create an entity name from trimmed input, rejecting empty or
    /// whitespace-only input.
    pub fn new(name: impl AsRef<str>) -> Result<Self> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(Box::new(Error::EmptyEntityName));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EntityName {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl AsRef<str> for EntityName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
