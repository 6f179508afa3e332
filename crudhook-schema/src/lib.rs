// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Entity schema model, schema input resolution and tool configuration.

mod config;
mod entity;
mod error;
mod field;
mod input;
mod schema;

pub use config::{Config, DEFAULT_CONFIG, HooksLayout, ImportsConfig, OutputConfig};
pub use entity::EntityName;
pub use error::{Error, Result, SourceContext};
pub use field::Field;
pub use input::SchemaSource;
pub use schema::Schema;
