//! TypeScript generator for crudhook.
//!
//! Given an entity name and its schema, this crate emits a REST client, the
//! entity's type declarations, react-query hooks and a barrel, and keeps a
//! shared manifest re-exporting every generated entity.
//!
//! ```no_run
//! use std::path::Path;
//!
//! use crudhook_codegen::LanguageCodegen;
//! use crudhook_codegen_typescript::{Generator, GeneratorOptions};
//! use crudhook_schema::{EntityName, Schema};
//!
//! # fn main() -> eyre::Result<()> {
//! let schema = Schema::from_json_str(
//!     r#"{ "id": { "name": "id", "type": "string" } }"#,
//!     "inline",
//! )?;
//! let entity = EntityName::new("User")?;
//! let generator = Generator::new(&entity, schema, GeneratorOptions::default());
//!
//! // Preview files without writing
//! let files = generator.preview();
//!
//! // Write files and update ./index.ts
//! let result = generator.generate(Path::new("."))?;
//! # Ok(())
//! # }
//! ```
//!
//! # Generated Output
//!
//! - `{Entity}/api/{entity}Request.ts` - REST client
//! - `{Entity}/types/{entity}Types.ts` - entity, request/response and client types
//! - `{Entity}/model/requestHooks.ts` - query and mutation hooks (or one file per hook)
//! - `{Entity}/index.ts` - barrel
//! - `index.ts` - shared manifest, one `export * from './{Entity}';` per entity

mod code_file;
mod generator;

pub mod ast;
pub mod files;
pub mod naming;

pub use code_file::CodeFile;
pub use crudhook_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use generator::{Generator, GeneratorOptions};
pub use naming::{CrudOp, DerivedNames};
