//! TypeScript/JavaScript object literal builder.

use crudhook_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A property in a JavaScript object literal.
#[derive(Debug, Clone)]
pub struct Property {
    pub key: String,
    pub value: PropertyValue,
}

/// The value of an object property.
#[derive(Debug, Clone)]
pub enum PropertyValue {
    /// A literal string value (will be single-quoted).
    String(String),
    /// A raw expression (will not be quoted).
    Raw(String),
    /// `key,` where a binding of the same name is in scope.
    Shorthand,
    /// A nested object.
    Object(JsObject),
}

impl Property {
    fn to_fragment(&self) -> CodeFragment {
        match &self.value {
            PropertyValue::String(s) => CodeFragment::line(format!("{}: '{}',", self.key, s)),
            PropertyValue::Raw(s) => CodeFragment::line(format!("{}: {},", self.key, s)),
            PropertyValue::Shorthand => CodeFragment::line(format!("{},", self.key)),
            PropertyValue::Object(obj) => CodeFragment::block(
                format!("{}: {{", self.key),
                obj.property_fragments(),
                Some("},".to_string()),
            ),
        }
    }
}

/// Builder for JavaScript/TypeScript object literals.
///
/// Renders one property per line with trailing commas.
#[derive(Debug, Clone, Default)]
pub struct JsObject {
    properties: Vec<Property>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property with a string value (will be quoted).
    pub fn string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, PropertyValue::String(value.into()));
        self
    }

    /// Add a property with a raw expression value (will not be quoted).
    pub fn raw(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, PropertyValue::Raw(value.into()));
        self
    }

    /// Conditionally add a raw property.
    pub fn raw_if(self, condition: bool, key: impl Into<String>, value: impl Into<String>) -> Self {
        if condition {
            self.raw(key, value)
        } else {
            self
        }
    }

    /// Add a shorthand property where key equals the variable name.
    pub fn shorthand(mut self, name: impl Into<String>) -> Self {
        self.push(name, PropertyValue::Shorthand);
        self
    }

    /// Add a property with a nested object value.
    pub fn object(mut self, key: impl Into<String>, value: JsObject) -> Self {
        self.push(key, PropertyValue::Object(value));
        self
    }

    /// Check if the object is empty.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Property lines without the surrounding braces.
    pub fn property_fragments(&self) -> Vec<CodeFragment> {
        self.properties.iter().map(Property::to_fragment).collect()
    }

    /// Render the object as a trailing call argument (`{ ... },`).
    pub fn as_argument(&self) -> CodeFragment {
        if self.properties.is_empty() {
            return CodeFragment::line("{},");
        }
        CodeFragment::block("{", self.property_fragments(), Some("},".to_string()))
    }

    /// Build the object as a string.
    pub fn build(&self) -> String {
        CodeBuilder::typescript().node(self).build()
    }

    fn push(&mut self, key: impl Into<String>, value: PropertyValue) {
        self.properties.push(Property {
            key: key.into(),
            value,
        });
    }
}

impl Renderable for JsObject {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.properties.is_empty() {
            return vec![CodeFragment::raw("{}")];
        }

        vec![CodeFragment::block(
            "{",
            self.property_fragments(),
            Some("}".to_string()),
        )]
    }
}

/// Render a single-line object literal such as `{ users, isLoaded }`.
///
/// Entries whose key equals their value use the shorthand form.
pub fn inline_object<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let parts: Vec<String> = entries
        .into_iter()
        .map(|(key, value)| {
            if key == value {
                key.to_string()
            } else {
                format!("{}: {}", key, value)
            }
        })
        .collect();
    if parts.is_empty() {
        "{}".to_string()
    } else {
        format!("{{ {} }}", parts.join(", "))
    }
}
