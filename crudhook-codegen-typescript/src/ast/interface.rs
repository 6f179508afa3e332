//! TypeScript interface builder.

use crudhook_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A property of a TypeScript interface.
#[derive(Debug, Clone)]
pub struct InterfaceField {
    pub name: String,
    pub ty: String,
}

impl InterfaceField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Builder for exported TypeScript interfaces.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    fields: Vec<InterfaceField>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add a property. Properties render in the order they are added.
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push(InterfaceField::new(name, ty));
        self
    }

    /// Build the interface as a string.
    pub fn build(&self) -> String {
        CodeBuilder::typescript().node(self).build()
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.fields.is_empty() {
            return vec![CodeFragment::line(format!("export interface {} {{}}", self.name))];
        }

        vec![CodeFragment::block(
            format!("export interface {} {{", self.name),
            self.fields
                .iter()
                .map(|f| CodeFragment::line(format!("{}: {};", f.name, f.ty)))
                .collect(),
            Some("}".to_string()),
        )]
    }
}
