//! TypeScript const declaration builder.

use crudhook_codegen::{CodeBuilder, CodeFragment, Renderable};

use super::JsObject;

#[derive(Debug, Clone)]
enum ConstValue {
    Expr(String),
    Object(JsObject),
}

/// Builder for TypeScript const declarations.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    value: ConstValue,
    ty: Option<String>,
    exported: bool,
}

impl Const {
    /// A const bound to a single-line expression.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_value(name, ConstValue::Expr(value.into()))
    }

    /// A const bound to a multi-line object literal.
    pub fn object(name: impl Into<String>, value: JsObject) -> Self {
        Self::with_value(name, ConstValue::Object(value))
    }

    fn with_value(name: impl Into<String>, value: ConstValue) -> Self {
        Self {
            name: name.into(),
            value,
            ty: None,
            exported: true,
        }
    }

    /// Add a type annotation.
    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    /// Make this const private (not exported).
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Build the const declaration as a string.
    pub fn build(&self) -> String {
        CodeBuilder::typescript().node(self).build()
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        let annotation = self
            .ty
            .as_ref()
            .map(|ty| format!(": {}", ty))
            .unwrap_or_default();
        let head = format!("{}const {}{}", export, self.name, annotation);

        match &self.value {
            ConstValue::Expr(value) => vec![CodeFragment::line(format!("{} = {};", head, value))],
            ConstValue::Object(obj) if obj.is_empty() => {
                vec![CodeFragment::line(format!("{} = {{}};", head))]
            }
            ConstValue::Object(obj) => vec![CodeFragment::block(
                format!("{} = {{", head),
                obj.property_fragments(),
                Some("};".to_string()),
            )],
        }
    }
}
