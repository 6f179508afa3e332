//! `types/{entity}Types.ts`: entity, request/response and client shapes.

use std::path::{Path, PathBuf};

use crudhook_core::GeneratedFile;
use crudhook_schema::Schema;

use super::{EntityModule, artifact_path, operation_params, operation_response, params_list};
use crate::{
    ast::{Interface, TypeAlias},
    code_file::CodeFile,
    naming::{CrudOp, DerivedNames},
};

pub struct TypesTs<'a> {
    names: &'a DerivedNames,
    schema: &'a Schema,
    extension: &'a str,
}

impl<'a> TypesTs<'a> {
    pub fn new(names: &'a DerivedNames, schema: &'a Schema, extension: &'a str) -> Self {
        Self {
            names,
            schema,
            extension,
        }
    }

    fn entity_interface(&self) -> Interface {
        self.schema
            .fields()
            .fold(Interface::new(&self.names.entity_type), |i, field| {
                i.field(&field.name, &field.ty)
            })
    }

    /// Request and response bodies are the full entity shape.
    fn aliases(&self) -> [TypeAlias; 2] {
        [
            TypeAlias::new(&self.names.request_type, &self.names.entity_type),
            TypeAlias::new(&self.names.response_type, &self.names.entity_type),
        ]
    }

    fn client_interface(&self) -> Interface {
        CrudOp::ALL
            .iter()
            .fold(Interface::new(&self.names.api_client_type), |i, op| {
                let signature = format!(
                    "({}) => Promise<{}>",
                    params_list(&operation_params(self.names, *op)),
                    operation_response(self.names, *op)
                );
                i.field(self.names.operation(*op), signature)
            })
    }
}

impl EntityModule for TypesTs<'_> {
    fn module_path(&self) -> String {
        format!("types/{}", self.names.types_stem)
    }

    fn exported_values(&self) -> Vec<String> {
        Vec::new()
    }

    fn exported_types(&self) -> Vec<String> {
        let n = self.names;
        vec![
            n.entity_type.clone(),
            n.request_type.clone(),
            n.response_type.clone(),
            n.api_client_type.clone(),
        ]
    }
}

impl GeneratedFile for TypesTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        artifact_path(base, self.names, &self.module_path(), self.extension)
    }

    fn render(&self) -> String {
        CodeFile::new()
            .add(self.entity_interface())
            .add_all(self.aliases())
            .add(self.client_interface())
            .render()
    }
}
