use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for crudhook-schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a serde_json error.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = line_col_offset(&self.src, source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, 0)));
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a config error from a toml error.
    pub fn toml_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Config {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a malformed schema error for the entry stored under `key`.
    ///
    /// The label points at the first occurrence of the quoted key in the source.
    pub fn malformed(&self, key: impl Into<String>, reason: impl Into<String>) -> Box<Error> {
        let key = key.into();
        let span = find_key_span(&self.src, &key);
        Box::new(Error::MalformedSchema {
            src: self.named_source(),
            span,
            key,
            reason: reason.into(),
        })
    }

    /// Create an error for input whose top level is not an object.
    pub fn not_an_object(&self, found: &'static str) -> Box<Error> {
        Box::new(Error::NotAnObject {
            src: self.named_source(),
            found,
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("no entity schema was supplied")]
    #[diagnostic(
        code(crudhook::missing_input),
        help("pass the fields inline with --entity-properties '<json>' or point --schema-file at a JSON file")
    )]
    MissingInput,

    #[error("failed to read '{}'", path.display())]
    #[diagnostic(code(crudhook::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("schema is not valid JSON")]
    #[diagnostic(code(crudhook::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("schema must be a JSON object of fields, found {found}")]
    #[diagnostic(
        code(crudhook::malformed_schema),
        help(r#"use an object such as {{ "id": {{ "name": "id", "type": "string" }} }}"#)
    )]
    NotAnObject {
        #[source_code]
        src: NamedSource<String>,
        found: &'static str,
    },

    #[error("malformed schema entry '{key}': {reason}")]
    #[diagnostic(
        code(crudhook::malformed_schema),
        help(r#"every entry needs a non-empty "name" and a "type" string"#)
    )]
    MalformedSchema {
        #[source_code]
        src: NamedSource<String>,
        #[label("{reason}")]
        span: Option<SourceSpan>,
        key: String,
        reason: String,
    },

    #[error("entity name must not be empty")]
    #[diagnostic(
        code(crudhook::invalid_entity),
        help("pass the entity in the casing used for its types, e.g. --entity-name User")
    )]
    EmptyEntityName,

    #[error("failed to parse configuration")]
    #[diagnostic(code(crudhook::config))]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("{source}")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Whether this error means the schema itself was unusable.
    pub fn is_malformed_schema(&self) -> bool {
        matches!(
            self,
            Self::Parse { .. } | Self::NotAnObject { .. } | Self::MalformedSchema { .. }
        )
    }
}

/// Convert a 1-based line/column pair into a byte offset.
fn line_col_offset(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = line_start + column.saturating_sub(1);
    Some(offset.min(src.len()))
}

/// Find the span of `"key"` in the source, covering the quotes.
fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let quoted = format!("\"{key}\"");
    src.find(&quoted)
        .map(|start| SourceSpan::from((start, quoted.len())))
}
