//! `model/*.ts`: query and mutation hooks.
//!
//! Every hook keys its cache entry under the entity collection. Reads use
//! `[queryKey]` or `[queryKey, id]`; mutations use `[queryKey, '<verb>']` and
//! invalidate `[queryKey]` when they succeed, so lists refetch after writes.

use std::path::{Path, PathBuf};

use crudhook_codegen::CodeFragment;
use crudhook_core::GeneratedFile;

use super::{EntityModule, artifact_path};
use crate::{
    ast::{Const, Field, Fn, Import, JsObject, ObjectType, Param, inline_object},
    code_file::CodeFile,
    naming::{CrudOp, DerivedNames, capitalize},
};

/// A hooks module holding one or more hooks.
pub struct HooksTs<'a> {
    names: &'a DerivedNames,
    ops: Vec<CrudOp>,
    stem: String,
    query_module: &'a str,
    extension: &'a str,
}

impl<'a> HooksTs<'a> {
    /// All five hooks in `model/requestHooks`.
    pub fn single(names: &'a DerivedNames, query_module: &'a str, extension: &'a str) -> Self {
        Self {
            names,
            ops: CrudOp::ALL.to_vec(),
            stem: names.hooks_stem.clone(),
            query_module,
            extension,
        }
    }

    /// The hook for `op` alone, in a file named after the hook.
    pub fn per_operation(
        names: &'a DerivedNames,
        op: CrudOp,
        query_module: &'a str,
        extension: &'a str,
    ) -> Self {
        Self {
            names,
            ops: vec![op],
            stem: names.hook(op).to_string(),
            query_module,
            extension,
        }
    }

    fn has_reads(&self) -> bool {
        self.ops.iter().any(|op| !op.is_mutation())
    }

    fn has_mutations(&self) -> bool {
        self.ops.iter().any(|op| op.is_mutation())
    }

    fn needs_request_type(&self) -> bool {
        self.ops
            .iter()
            .any(|op| matches!(op, CrudOp::Create | CrudOp::Update))
    }

    fn imports(&self) -> Vec<Import> {
        let n = self.names;
        let mut query = Vec::new();
        if self.has_mutations() {
            query.push("useMutation");
        }
        if self.has_reads() {
            query.push("useQuery");
        }
        if self.has_mutations() {
            query.push("useQueryClient");
        }

        let mut imports = vec![
            Import::new(self.query_module).named_all(query),
            Import::new(format!("../api/{}", n.client_stem)).named(&n.api_client),
        ];
        if self.needs_request_type() {
            imports.push(
                Import::new(format!("../types/{}", n.types_stem))
                    .named(&n.request_type)
                    .type_only(),
            );
        }
        imports
    }

    /// Argument shape of the update mutation.
    fn update_request_type(&self) -> ObjectType {
        ObjectType::new(&self.names.update_request_type)
            .private()
            .field(Field::new("id", "string"))
            .field(Field::new("request", &self.names.request_type))
    }

    fn hook(&self, op: CrudOp) -> Fn {
        if op.is_mutation() {
            self.mutation_hook(op)
        } else {
            self.query_hook(op)
        }
    }

    fn query_hook(&self, op: CrudOp) -> Fn {
        let n = self.names;
        let (binding, returned, key, fetch) = match op {
            CrudOp::List => (
                &n.list_binding,
                &n.collection,
                "[queryKey]",
                format!("() => {}.{}()", n.api_client, n.operation(op)),
            ),
            _ => (
                &n.item_binding,
                &n.lower,
                "[queryKey, id]",
                format!("() => {}.{}(id)", n.api_client, n.operation(op)),
            ),
        };

        let options = base_options().raw_if(op == CrudOp::GetById, "enabled", "!!id");
        let call = CodeFragment::block(
            format!(
                "const {} = useQuery(",
                inline_object([("data", binding.as_str()), ("isSuccess", "isLoaded")])
            ),
            vec![
                CodeFragment::line(format!("{},", key)),
                CodeFragment::line(format!("{},", fetch)),
                options.as_argument(),
            ],
            Some(");".to_string()),
        );

        let hook = Fn::new(n.hook(op));
        let hook = if op == CrudOp::GetById {
            hook.param(Param::new("id", "string"))
        } else {
            hook
        };

        hook.node(query_key_decl(n))
            .body_blank()
            .statement(call)
            .body_blank()
            .body_line(format!(
                "return {};",
                inline_object([(returned.as_str(), binding.as_str()), ("isLoaded", "isLoaded")])
            ))
    }

    fn mutation_hook(&self, op: CrudOp) -> Fn {
        let n = self.names;
        let verb = op.verb().unwrap_or_default();
        let callback = n.callback(op).unwrap_or_default();
        let status = format!("is{}d", capitalize(verb));

        let mutate = match op {
            CrudOp::Create => format!(
                "(request: {}) => {}.{}(request)",
                n.request_type,
                n.api_client,
                n.operation(op)
            ),
            CrudOp::Update => format!(
                "({{ id, request }}: {}) => {}.{}(id, request)",
                n.update_request_type,
                n.api_client,
                n.operation(op)
            ),
            _ => format!("(id: string) => {}.{}(id)", n.api_client, n.operation(op)),
        };

        let returns_data = op != CrudOp::Delete;
        let mut destructured = Vec::new();
        if returns_data {
            destructured.push(("data", n.item_binding.as_str()));
        }
        destructured.push(("mutate", callback.as_str()));
        destructured.push(("isSuccess", status.as_str()));

        let mut returned = Vec::new();
        if returns_data {
            returned.push((n.lower.as_str(), n.item_binding.as_str()));
            returned.push((status.as_str(), status.as_str()));
            returned.push((callback.as_str(), callback.as_str()));
        } else {
            returned.push((callback.as_str(), callback.as_str()));
            returned.push((status.as_str(), status.as_str()));
        }

        let options =
            base_options().raw("onSuccess", "() => queryClient.invalidateQueries([queryKey])");
        let call = CodeFragment::block(
            format!("const {} = useMutation(", inline_object(destructured)),
            vec![
                CodeFragment::line(format!("[queryKey, '{}'],", verb)),
                CodeFragment::line(format!("{},", mutate)),
                options.as_argument(),
            ],
            Some(");".to_string()),
        );

        Fn::new(n.hook(op))
            .node(query_key_decl(n))
            .body_line("const queryClient = useQueryClient();")
            .body_blank()
            .statement(call)
            .body_blank()
            .body_line(format!("return {};", inline_object(returned)))
    }
}

fn query_key_decl(names: &DerivedNames) -> Const {
    Const::new("queryKey", format!("'{}'", names.query_key())).private()
}

fn base_options() -> JsObject {
    JsObject::new()
        .raw("retry", "false")
        .raw("useErrorBoundary", "false")
}

impl EntityModule for HooksTs<'_> {
    fn module_path(&self) -> String {
        format!("model/{}", self.stem)
    }

    fn exported_values(&self) -> Vec<String> {
        self.ops
            .iter()
            .map(|op| self.names.hook(*op).to_string())
            .collect()
    }
}

impl GeneratedFile for HooksTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        artifact_path(base, self.names, &self.module_path(), self.extension)
    }

    fn render(&self) -> String {
        let mut file = CodeFile::new().imports(self.imports());
        for op in &self.ops {
            if *op == CrudOp::Update {
                file = file.add(self.update_request_type());
            }
            file = file.add(self.hook(*op));
        }
        file.render()
    }
}
