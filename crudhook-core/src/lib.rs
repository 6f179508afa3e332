//! Core utilities and types for crudhook.
//!
//! This crate owns everything that touches the filesystem during a
//! generation run: materialized artifacts and the shared export manifest.

mod error;
mod file;
mod manifest;

pub use error::FsError;
// File operations
pub use file::{File, GeneratedFile, write_file};
// Export manifest
pub use manifest::{ManifestUpdate, ensure_exported, export_lines};
