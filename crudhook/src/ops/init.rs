//! Init operation - default configuration file.

use std::path::Path;

use crudhook_core::write_file;
use crudhook_schema::DEFAULT_CONFIG;
use eyre::{Context, Result};

/// Write the default `crudhook.toml` to `path`, replacing any existing file.
pub fn init(path: &Path) -> Result<()> {
    write_file(path, DEFAULT_CONFIG)
        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote default config");
    Ok(())
}
