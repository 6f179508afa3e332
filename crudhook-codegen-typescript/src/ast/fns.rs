//! TypeScript arrow function builder.

use crudhook_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A parameter in a TypeScript function.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Builder for functions declared as const-bound arrow functions:
///
/// ```text
/// export const name = async (a: A) => {
///   ...
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    exported: bool,
    is_async: bool,
    params: Vec<Param>,
    body: Vec<CodeFragment>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exported: true,
            is_async: false,
            params: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::line(line));
        self
    }

    /// Add a blank line to the function body.
    pub fn body_blank(mut self) -> Self {
        self.body.push(CodeFragment::blank());
        self
    }

    /// Add a structured statement to the function body.
    pub fn statement(mut self, fragment: CodeFragment) -> Self {
        self.body.push(fragment);
        self
    }

    /// Add a rendered node (e.g. a local `Const`) to the function body.
    pub fn node(mut self, node: impl Renderable) -> Self {
        self.body.extend(node.to_fragments());
        self
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        CodeBuilder::typescript().node(self).build()
    }

    fn signature(&self) -> String {
        let export = if self.exported { "export " } else { "" };
        let async_kw = if self.is_async { "async " } else { "" };
        let params = self
            .params
            .iter()
            .map(|p| format!("{}: {}", p.name, p.ty))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "{}const {} = {}({}) => {{",
            export, self.name, async_kw, params
        )
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            self.signature(),
            self.body.clone(),
            Some("};".to_string()),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fn() {
        let f = Fn::new("noop").build();
        assert_eq!(f, "export const noop = () => {\n};\n");
    }

    #[test]
    fn test_async_fn_with_params() {
        let f = Fn::new("updateUser")
            .private()
            .async_()
            .param(Param::new("id", "string"))
            .param(Param::new("body", "UserRequestType"))
            .body_line("return body;")
            .build();
        assert_eq!(
            f,
            "const updateUser = async (id: string, body: UserRequestType) => {\n  return body;\n};\n"
        );
    }

    #[test]
    fn test_body_blank_has_no_indent() {
        let f = Fn::new("run")
            .body_line("const a = 1;")
            .body_blank()
            .body_line("return a;")
            .build();
        assert_eq!(
            f,
            "export const run = () => {\n  const a = 1;\n\n  return a;\n};\n"
        );
    }

    #[test]
    fn test_nested_statement() {
        let f = Fn::new("run")
            .statement(CodeFragment::block(
                "call({",
                vec![CodeFragment::line("x: 1,")],
                Some("});".to_string()),
            ))
            .build();
        assert_eq!(f, "export const run = () => {\n  call({\n    x: 1,\n  });\n};\n");
    }

    #[test]
    fn test_local_node() {
        let f = Fn::new("run")
            .node(crate::ast::Const::new("queryKey", "'users'").private())
            .build();
        assert_eq!(f, "export const run = () => {\n  const queryKey = 'users';\n};\n");
    }
}
