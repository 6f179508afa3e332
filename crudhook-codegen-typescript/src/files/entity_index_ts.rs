//! `{Entity}/index.ts`: the per-entity barrel.

use std::path::{Path, PathBuf};

use crudhook_core::GeneratedFile;

use super::{EntityModule, artifact_path};
use crate::{ast::Export, code_file::CodeFile, naming::DerivedNames};

/// Re-exports every symbol the entity's modules declare.
pub struct EntityIndexTs<'a> {
    names: &'a DerivedNames,
    modules: Vec<&'a dyn EntityModule>,
    extension: &'a str,
}

impl<'a> EntityIndexTs<'a> {
    pub fn new(names: &'a DerivedNames, extension: &'a str) -> Self {
        Self {
            names,
            modules: Vec::new(),
            extension,
        }
    }

    /// Re-export from `module`. Modules are listed in the order added.
    pub fn module(mut self, module: &'a dyn EntityModule) -> Self {
        self.modules.push(module);
        self
    }

    fn exports(&self) -> Vec<Export> {
        let mut exports = Vec::new();
        for module in &self.modules {
            let from = format!("./{}", module.module_path());
            let values = module.exported_values();
            if !values.is_empty() {
                exports.push(Export::new().from(&from).named_all(values));
            }
            let types = module.exported_types();
            if !types.is_empty() {
                exports.push(Export::new().from(&from).named_all(types).type_only());
            }
        }
        exports
    }
}

impl GeneratedFile for EntityIndexTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        artifact_path(base, self.names, "index", self.extension)
    }

    fn render(&self) -> String {
        CodeFile::new().exports(self.exports()).render()
    }
}
