use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("theme schema file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("theme schema parse error: {0}")]
    ParseError(String),

    #[error("theme schema validation error: {0}")]
    ValidationError(String),
}
