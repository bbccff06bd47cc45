//! Theme schema document loading.
//!
//! Documents are parsed into a JSON tree first and then ingested through
//! [`ThemeSchema::from_value`], so every format gets the same lenient
//! handling of missing or mistyped groups. Only unreadable files and
//! syntactically broken documents are errors.

mod format;


pub use format::SchemaFormat;

use bf_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use crate::schema::ThemeSchema;
use crate::validation;

/// Parse a JSON theme document.
pub fn parse_schema_json(content: &str) -> Result<ThemeSchema, ConfigError> {
    parse_schema(content, SchemaFormat::Json)
}

/// Parse a theme document in the given format.
pub fn parse_schema(content: &str, format: SchemaFormat) -> Result<ThemeSchema, ConfigError> {
    let tree = format.parse(content)?;
    Ok(ThemeSchema::from_value(tree))
}

/// Load a theme document from disk, picking the format by extension.
///
/// Validation findings are logged, never returned: the parsed schema is
/// handed back as-is since resolution tolerates them.
pub fn load_schema_from_path(path: &Path) -> Result<ThemeSchema, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let format = SchemaFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let schema = parse_schema(&content, format)?;

    if let Err(e) = validation::validate_schema(&schema) {
        warn!("theme schema validation warning for {}: {e}", path.display());
    }

    info!("loaded theme schema from {}", path.display());
    Ok(schema)
}
