//! Core operations.
//!
//! This module contains the business logic for crudhook commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod init;

pub use check::check;
pub use generate::{GenerateOptions, generate};
pub use init::init;
