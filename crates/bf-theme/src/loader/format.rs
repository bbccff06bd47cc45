//! Supported on-disk formats.

use bf_common::ConfigError;
use serde_json::Value;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    Json,
    Yaml,
    Toml,
}

impl SchemaFormat {
    /// Format for a file extension (`json`, `yaml`/`yml`, `toml`), any case.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(SchemaFormat::Json),
            "yaml" | "yml" => Some(SchemaFormat::Yaml),
            "toml" => Some(SchemaFormat::Toml),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| {
                ConfigError::ParseError(format!(
                    "unsupported theme schema format: {}",
                    path.display()
                ))
            })
    }

    pub fn name(self) -> &'static str {
        match self {
            SchemaFormat::Json => "JSON",
            SchemaFormat::Yaml => "YAML",
            SchemaFormat::Toml => "TOML",
        }
    }

    /// Parse document text into a JSON tree.
    pub(crate) fn parse(self, content: &str) -> Result<Value, ConfigError> {
        let parsed: Result<Value, String> = match self {
            SchemaFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            SchemaFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            SchemaFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        };
        parsed.map_err(|e| ConfigError::ParseError(format!("failed to parse {}: {e}", self.name())))
    }
}
