//! Per-entity TypeScript artifacts.
//!
//! Each artifact is a module inside the entity directory. The barrel
//! re-exports exactly what [`EntityModule`] reports for each of them, so the
//! emitted declarations and the barrel cannot drift apart.

mod client_ts;
mod entity_index_ts;
mod hooks_ts;
mod types_ts;

use std::path::{Path, PathBuf};

pub use client_ts::ClientTs;
pub use entity_index_ts::EntityIndexTs;
pub use hooks_ts::HooksTs;
pub use types_ts::TypesTs;

use crate::{
    ast::Param,
    naming::{CrudOp, DerivedNames},
};

/// A module the entity barrel re-exports from.
pub trait EntityModule {
    /// Module path relative to the entity directory, without extension.
    fn module_path(&self) -> String;

    /// Runtime values the module exports.
    fn exported_values(&self) -> Vec<String>;

    /// Types the module exports.
    fn exported_types(&self) -> Vec<String> {
        Vec::new()
    }
}

/// `{base}/{entity}/{module_path}.{extension}`
fn artifact_path(base: &Path, names: &DerivedNames, module_path: &str, extension: &str) -> PathBuf {
    base.join(names.entity_dir())
        .join(format!("{}.{}", module_path, extension))
}

/// Parameters of the client function for `op`.
fn operation_params(names: &DerivedNames, op: CrudOp) -> Vec<Param> {
    let id = Param::new("id", "string");
    let request = Param::new("request", names.request_type.clone());
    match op {
        CrudOp::List => vec![],
        CrudOp::GetById | CrudOp::Delete => vec![id],
        CrudOp::Create => vec![request],
        CrudOp::Update => vec![id, request],
    }
}

/// Type the client function for `op` resolves to.
fn operation_response(names: &DerivedNames, op: CrudOp) -> String {
    match op {
        CrudOp::List => format!("{}[]", names.response_type),
        CrudOp::Delete => "void".to_string(),
        CrudOp::GetById | CrudOp::Create | CrudOp::Update => names.response_type.clone(),
    }
}

fn params_list(params: &[Param]) -> String {
    params
        .iter()
        .map(|p| format!("{}: {}", p.name, p.ty))
        .collect::<Vec<_>>()
        .join(", ")
}
