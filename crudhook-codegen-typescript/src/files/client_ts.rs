//! `api/{entity}Request.ts`: the REST client.

use std::path::{Path, PathBuf};

use crudhook_codegen::CodeFragment;
use crudhook_core::GeneratedFile;

use super::{EntityModule, artifact_path, operation_params, operation_response};
use crate::{
    ast::{Const, Fn, Import, JsObject},
    code_file::CodeFile,
    naming::{CrudOp, DerivedNames},
};

/// Data-access client with one request function per CRUD operation,
/// bundled into an exported client object.
pub struct ClientTs<'a> {
    names: &'a DerivedNames,
    http_module: &'a str,
    extension: &'a str,
}

impl<'a> ClientTs<'a> {
    pub fn new(names: &'a DerivedNames, http_module: &'a str, extension: &'a str) -> Self {
        Self {
            names,
            http_module,
            extension,
        }
    }

    fn url(&self, op: CrudOp) -> String {
        let item = if op.targets_item() { "${id}" } else { "" };
        format!("`${{BASE_URL}}/{}/{}`", self.names.collection, item)
    }

    fn request_fn(&self, op: CrudOp) -> Fn {
        let request = JsObject::new()
            .raw("url", self.url(op))
            .raw_if(
                matches!(op, CrudOp::Create | CrudOp::Update),
                "data",
                "request",
            )
            .string("method", op.http_method());

        let call = CodeFragment::block(
            format!(
                "const {{ data }} = await httpClient.request<{}>({{",
                operation_response(self.names, op)
            ),
            request.property_fragments(),
            Some("});".to_string()),
        );

        operation_params(self.names, op)
            .into_iter()
            .fold(
                Fn::new(self.names.operation(op)).private().async_(),
                Fn::param,
            )
            .statement(call)
            .body_blank()
            .body_line("return data;")
    }

    fn client_object(&self) -> Const {
        let object = CrudOp::ALL
            .iter()
            .fold(JsObject::new(), |obj, op| obj.shorthand(self.names.operation(*op)));
        Const::object(&self.names.api_client, object).ty(&self.names.api_client_type)
    }
}

impl EntityModule for ClientTs<'_> {
    fn module_path(&self) -> String {
        format!("api/{}", self.names.client_stem)
    }

    fn exported_values(&self) -> Vec<String> {
        vec![self.names.api_client.clone()]
    }
}

impl GeneratedFile for ClientTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        artifact_path(base, self.names, &self.module_path(), self.extension)
    }

    fn render(&self) -> String {
        let n = self.names;
        CodeFile::new()
            .import(Import::new(self.http_module).named_all(["BASE_URL", "httpClient"]))
            .import(
                Import::new(format!("../types/{}", n.types_stem))
                    .named_all([&n.api_client_type, &n.request_type, &n.response_type])
                    .type_only(),
            )
            .add_all(CrudOp::ALL.iter().map(|op| self.request_fn(*op)))
            .add(self.client_object())
            .render()
    }
}

#[cfg(test)]
mod tests {
    use crudhook_schema::EntityName;

    use super::*;

    fn render(entity: &str) -> String {
        let names = DerivedNames::derive(&EntityName::new(entity).unwrap());
        ClientTs::new(&names, "@shared", "ts").render()
    }

    #[test]
    fn test_list_targets_collection() {
        let code = render("User");
        assert!(code.contains("const getUsers = async () => {"));
        assert!(code.contains("url: `${BASE_URL}/users/`,"));
        assert!(code.contains("request<UserResponseType[]>({"));
    }

    #[test]
    fn test_item_operations_append_id() {
        let code = render("User");
        assert_eq!(code.matches("url: `${BASE_URL}/users/${id}`,").count(), 3);
    }

    #[test]
    fn test_methods() {
        let code = render("User");
        for method in ["'GET'", "'POST'", "'PATCH'", "'DELETE'"] {
            assert!(code.contains(&format!("method: {},", method)), "{method}");
        }
    }

    #[test]
    fn test_writes_send_request_body() {
        let code = render("User");
        assert!(code.contains("const createUser = async (request: UserRequestType) => {"));
        assert!(
            code.contains("const updateUser = async (id: string, request: UserRequestType) => {")
        );
        assert_eq!(code.matches("data: request,").count(), 2);
    }

    #[test]
    fn test_client_object_lists_every_operation() {
        let code = render("User");
        assert!(code.contains(
            "export const userApiClient: UserApiClientType = {\n  getUsers,\n  getUserById,\n  createUser,\n  updateUser,\n  deleteUser,\n};\n"
        ));
    }

    #[test]
    fn test_imports() {
        let code = render("User");
        assert!(code.starts_with(
            "import { BASE_URL, httpClient } from '@shared';\nimport type { UserApiClientType, UserRequestType, UserResponseType } from '../types/userTypes';\n\n"
        ));
    }

    #[test]
    fn test_path() {
        let names = DerivedNames::derive(&EntityName::new("User").unwrap());
        let client = ClientTs::new(&names, "@shared", "ts");
        assert_eq!(
            client.path(Path::new("src")),
            PathBuf::from("src/User/api/userRequest.ts")
        );
    }
}
