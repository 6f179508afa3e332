//! TypeScript type alias and object type builders.

use crudhook_codegen::{CodeBuilder, CodeFragment, Renderable};

/// A property in a TypeScript object type.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: String,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Builder for TypeScript object types (`type Foo = { ... }`).
#[derive(Debug, Clone)]
pub struct ObjectType {
    name: String,
    fields: Vec<Field>,
    exported: bool,
}

impl ObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            exported: true,
        }
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Build the object type as a string.
    pub fn build(&self) -> String {
        CodeBuilder::typescript().node(self).build()
    }
}

impl Renderable for ObjectType {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };

        if self.fields.is_empty() {
            return vec![CodeFragment::line(format!(
                "{}type {} = {{}};",
                export, self.name
            ))];
        }

        vec![CodeFragment::block(
            format!("{}type {} = {{", export, self.name),
            self.fields
                .iter()
                .map(|f| CodeFragment::line(format!("{}: {};", f.name, f.ty)))
                .collect(),
            Some("};".to_string()),
        )]
    }
}

/// Builder for exported TypeScript type aliases.
#[derive(Debug, Clone)]
pub struct TypeAlias {
    name: String,
    ty: String,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// Build the type alias as a string.
    pub fn build(&self) -> String {
        CodeBuilder::typescript().node(self).build()
    }
}

impl Renderable for TypeAlias {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!(
            "export type {} = {};",
            self.name, self.ty
        ))]
    }
}
