//! Shared code generation utilities for crudhook.
//!
//! This crate provides language-agnostic abstractions used by the
//! language-specific generators (e.g., `crudhook-codegen-typescript`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, PreviewFile, etc.)

pub mod builder;
pub mod language;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use language::{GenerateResult, LanguageCodegen, PreviewFile};
