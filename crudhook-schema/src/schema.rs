use indexmap::IndexMap;
use serde_json::Value;

use crate::{Field, Result, SourceContext};

/// An entity schema: field definitions keyed by an arbitrary string.
///
/// Key insertion order is preserved and decides the order properties appear
/// in every generated declaration. The key itself is never rendered; the
/// field's `name` is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    fields: IndexMap<String, Field>,
}

impl Schema {
    /// Parse a schema from JSON text.
    ///
    /// `filename` is only used to label diagnostics.
    pub fn from_json_str(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let value: Value = serde_json::from_str(content).map_err(|e| ctx.json_error(e))?;
        let raw = match value {
            Value::Object(map) => map,
            other => return Err(ctx.not_an_object(kind(&other))),
        };
        let schema = Self::build(raw.into_iter(), &ctx)?;
        tracing::debug!(source = filename, fields = schema.len(), "parsed schema");
        Ok(schema)
    }

    /// Build a schema from raw `key -> value` entries.
    ///
    /// Every value must be an object with a non-empty `name` string and a
    /// non-empty `type` string. The first malformed entry aborts the build.
    pub fn build(
        raw: impl IntoIterator<Item = (String, Value)>,
        ctx: &SourceContext,
    ) -> Result<Self> {
        let mut fields = IndexMap::new();
        for (key, value) in raw {
            let field = parse_field(&key, &value, ctx)?;
            fields.insert(key, field);
        }
        Ok(Self { fields })
    }

    /// Create a schema from already validated fields, keyed by their names.
    pub fn from_fields(fields: impl IntoIterator<Item = Field>) -> Self {
        Self {
            fields: fields
                .into_iter()
                .map(|field| (field.name.clone(), field))
                .collect(),
        }
    }

    /// Fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.values()
    }

    /// Look up a field by its schema key.
    pub fn get(&self, key: &str) -> Option<&Field> {
        self.fields.get(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn parse_field(key: &str, value: &Value, ctx: &SourceContext) -> Result<Field> {
    let Value::Object(entry) = value else {
        return Err(ctx.malformed(key, format!("expected an object, found {}", kind(value))));
    };

    let name = required_str(entry, "name").map_err(|reason| ctx.malformed(key, reason))?;
    let ty = required_str(entry, "type").map_err(|reason| ctx.malformed(key, reason))?;

    Ok(Field::new(name.trim(), ty))
}

fn required_str<'a>(
    entry: &'a serde_json::Map<String, Value>,
    prop: &str,
) -> std::result::Result<&'a str, String> {
    match entry.get(prop) {
        None => Err(format!("missing \"{prop}\"")),
        Some(Value::String(s)) if s.trim().is_empty() => Err(format!("\"{prop}\" is empty")),
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(format!("\"{prop}\" must be a string, found {}", kind(other))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    const USER: &str = r#"{
        "id": { "name": "id", "type": "string" },
        "email": { "name": "email", "type": "string" }
    }"#;

    fn parse(src: &str) -> Result<Schema> {
        Schema::from_json_str(src, "schema.json")
    }

    fn names(schema: &Schema) -> Vec<&str> {
        schema.fields().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_parse_user_schema() {
        let schema = parse(USER).unwrap();
        assert_eq!(schema.len(), 2);
        assert_eq!(schema.get("id"), Some(&Field::new("id", "string")));
        assert_eq!(schema.get("email"), Some(&Field::new("email", "string")));
    }

    #[test]
    fn test_preserves_insertion_order() {
        let schema = parse(
            r#"{
                "c": { "name": "c", "type": "number" },
                "a": { "name": "a", "type": "string" },
                "b": { "name": "b", "type": "boolean" }
            }"#,
        )
        .unwrap();
        assert_eq!(names(&schema), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_field_name_comes_from_entry_not_key() {
        let schema = parse(r#"{ "first": { "name": "firstName", "type": "string" } }"#).unwrap();
        assert_eq!(names(&schema), vec!["firstName"]);
    }

    #[test]
    fn test_type_is_kept_verbatim() {
        let schema =
            parse(r#"{ "tags": { "name": "tags", "type": "Array<{ id: string }>" } }"#).unwrap();
        assert_eq!(schema.get("tags").unwrap().ty, "Array<{ id: string }>");
    }

    #[test]
    fn test_empty_object_is_an_empty_schema() {
        let schema = parse("{}").unwrap();
        assert!(schema.is_empty());
    }

    #[test]
    fn test_rejects_missing_name() {
        let err = parse(r#"{ "id": { "type": "string" } }"#).unwrap_err();
        match *err {
            Error::MalformedSchema { key, reason, span, .. } => {
                assert_eq!(key, "id");
                assert_eq!(reason, "missing \"name\"");
                assert!(span.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_missing_type() {
        let err = parse(r#"{ "id": { "name": "id" } }"#).unwrap_err();
        assert!(err.to_string().contains("missing \"type\""));
    }

    #[test]
    fn test_rejects_empty_name() {
        let err = parse(r#"{ "id": { "name": "  ", "type": "string" } }"#).unwrap_err();
        assert!(err.to_string().contains("\"name\" is empty"));
    }

    #[test]
    fn test_rejects_non_string_type() {
        let err = parse(r#"{ "id": { "name": "id", "type": 3 } }"#).unwrap_err();
        assert!(err.to_string().contains("\"type\" must be a string, found a number"));
    }

    #[test]
    fn test_rejects_non_object_entry() {
        let err = parse(r#"{ "id": "string" }"#).unwrap_err();
        assert!(err.is_malformed_schema());
        assert!(err.to_string().contains("expected an object, found a string"));
    }

    #[test]
    fn test_rejects_top_level_array() {
        let err = parse("[]").unwrap_err();
        assert!(matches!(*err, Error::NotAnObject { found: "an array", .. }));
    }

    #[test]
    fn test_rejects_invalid_json() {
        let err = parse(r#"{ "id": "#).unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
        assert!(err.is_malformed_schema());
    }

    #[test]
    fn test_first_malformed_entry_aborts() {
        let err = parse(
            r#"{
                "id": { "name": "id", "type": "string" },
                "bad": { "name": "bad" },
                "worse": {}
            }"#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::MalformedSchema { ref key, .. } if key == "bad"));
    }

    #[test]
    fn test_type_whitespace_is_not_trimmed() {
        let schema = parse(r#"{ "tags": { "name": " tags ", "type": " Array<{ id: string }> " } }"#).unwrap();
        let field = schema.get("tags").unwrap();
        assert_eq!(field.name, "tags");
        assert_eq!(field.ty, " Array<{ id: string }> ");
    }

    #[test]
    fn test_from_fields() {
        let schema = Schema::from_fields([Field::new("id", "number"), Field::new("name", "string")]);
        assert_eq!(names(&schema), vec!["id", "name"]);
    }
}
