//! TypeScript import builder.

use crudhook_codegen::{CodeBuilder, CodeFragment, Renderable};

/// Builder for TypeScript import statements.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    named: Vec<String>,
    type_only: bool,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
            type_only: false,
        }
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Import several named exports.
    pub fn named_all(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.named.extend(names.into_iter().map(Into::into));
        self
    }

    /// Make this a type-only import (`import type { ... }`).
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }

    /// Build the import as a string.
    pub fn build(&self) -> String {
        CodeBuilder::typescript().node(self).build()
    }

    fn statement(&self) -> String {
        let type_kw = if self.type_only { "type " } else { "" };
        if self.named.is_empty() {
            format!("import '{}';", self.from)
        } else {
            format!(
                "import {}{{ {} }} from '{}';",
                type_kw,
                self.named.join(", "),
                self.from
            )
        }
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.statement())]
    }
}
