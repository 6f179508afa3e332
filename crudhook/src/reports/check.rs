//! Check command report data structures.

use super::output::{Output, Report};

/// Report data from schema validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Entity name as given.
    pub entity: String,
    /// Field name and type, in schema order.
    pub fields: Vec<(String, String)>,
    /// Derived identifiers, labelled.
    pub derived: Vec<(String, String)>,
    /// Paths generation would write, relative to the target root.
    pub artifacts: Vec<String>,
    /// Line the manifest would carry.
    pub manifest_line: String,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.entity));
        out.newline();

        out.section(&format!("Fields ({})", self.fields.len()));
        for (i, (name, ty)) in self.fields.iter().enumerate() {
            out.numbered_item(i + 1, &format!("{}: {}", name, ty));
        }
        out.newline();

        out.section("Names");
        for (label, value) in &self.derived {
            out.key_value_indented(label, value);
        }
        out.newline();

        out.section("Artifacts");
        for path in &self.artifacts {
            out.added_item(path);
        }
        out.newline();

        out.key_value("Manifest", &self.manifest_line);
    }
}
