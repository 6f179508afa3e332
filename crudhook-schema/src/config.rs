//! `crudhook.toml` configuration.

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use crate::{Error, Result, SourceContext};

/// Config file written by `crudhook init`. Parses to [`Config::default`].
pub const DEFAULT_CONFIG: &str = r#"[output]
root = "."
extension = "ts"
manifest = "index"
hooks = "single"

[imports]
http = "@shared"
query = "react-query"
"#;

/// Root of `crudhook.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub output: OutputConfig,
    pub imports: ImportsConfig,
}

/// `[output]`: where and how artifacts are written.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Target root; entity directories and the manifest live here.
    pub root: PathBuf,
    /// Extension of every generated file, without the dot.
    pub extension: String,
    /// Manifest file stem.
    pub manifest: String,
    pub hooks: HooksLayout,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extension: "ts".to_string(),
            manifest: "index".to_string(),
            hooks: HooksLayout::default(),
        }
    }
}

/// `[imports]`: modules the generated code imports from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImportsConfig {
    /// Module exporting `BASE_URL` and `httpClient`.
    pub http: String,
    /// Module exporting `useQuery`, `useMutation` and `useQueryClient`.
    pub query: String,
}

impl Default for ImportsConfig {
    fn default() -> Self {
        Self {
            http: "@shared".to_string(),
            query: "react-query".to_string(),
        }
    }
}

/// How the hooks module is split into files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HooksLayout {
    /// All hooks in `model/requestHooks`.
    #[default]
    Single,
    /// One file per hook, named after the hook.
    PerOperation,
}

impl HooksLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            HooksLayout::Single => "single",
            HooksLayout::PerOperation => "per-operation",
        }
    }
}

impl fmt::Display for HooksLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HooksLayout {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single" => Ok(HooksLayout::Single),
            "per-operation" | "per_operation" | "split" => Ok(HooksLayout::PerOperation),
            _ => Err(format!(
                "unknown hooks layout '{}', expected 'single' or 'per-operation'",
                s
            )),
        }
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "crudhook.toml")
    }
}

impl Config {
    /// Load the config at `path`. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse config text with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        toml::from_str(content).map_err(|e| ctx.toml_error(e))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_default_config_text_matches_defaults() {
        let config: Config = DEFAULT_CONFIG.parse().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: Config = "".parse().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config() {
        let config: Config = r#"
[output]
hooks = "per-operation"
extension = "tsx"
"#
        .parse()
        .unwrap();

        assert_eq!(config.output.hooks, HooksLayout::PerOperation);
        assert_eq!(config.output.extension, "tsx");
        assert_eq!(config.output.manifest, "index");
        assert_eq!(config.imports, ImportsConfig::default());
    }

    #[test]
    fn test_unknown_key_is_reported_with_span() {
        let err = "[output]\nhook = \"single\"\n".parse::<Config>().unwrap_err();
        match *err {
            Error::Config { span, .. } => assert!(span.is_some()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_bad_hooks_value() {
        let err = "[output]\nhooks = \"many\"\n".parse::<Config>().unwrap_err();
        assert!(matches!(*err, Error::Config { .. }));
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let temp = TempDir::new().unwrap();
        let config = Config::load(temp.path().join("crudhook.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("crudhook.toml");
        fs::write(&path, "[imports]\nhttp = \"~/lib/http\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.imports.http, "~/lib/http");
        assert_eq!(config.imports.query, "react-query");
    }

    #[test]
    fn test_hooks_layout_from_str() {
        assert_eq!(HooksLayout::from_str("single").unwrap(), HooksLayout::Single);
        assert_eq!(
            HooksLayout::from_str("Per-Operation").unwrap(),
            HooksLayout::PerOperation
        );
        assert!(HooksLayout::from_str("both").is_err());
    }

    #[test]
    fn test_hooks_layout_display_round_trips() {
        for layout in [HooksLayout::Single, HooksLayout::PerOperation] {
            assert_eq!(layout.to_string().parse::<HooksLayout>().unwrap(), layout);
        }
    }
}
