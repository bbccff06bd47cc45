//! Tenant theme resolution for the booking UI.
//!
//! A tenant's theme schema holds literal values and `{path}` references.
//! Resolution turns it into derived colors and a sanitized map of CSS
//! custom properties that is safe to inline into a style block. All
//! schema groups use sensible defaults so partial documents work out of
//! the box, and resolution itself never fails.
//!
//! # Quick Start
//!
//! ```rust
//! use bf_theme::{resolve_theme_json, theme_to_json};
//!
//! let theme = resolve_theme_json(r##"{"editable": {"colors": {"primary": "#7c3aed"}}}"##)
//!     .expect("valid JSON");
//! assert_eq!(theme.css_vars.get("--bf-brand-primary"), Some("#7c3aed"));
//! println!("{}", theme_to_json(&theme));
//! ```

pub mod allowlist;
pub mod colors;
pub mod derived;
pub mod loader;
pub mod refs;
pub mod resolver;
pub mod sanitize;
pub mod schema;
pub mod validation;

// Re-export core types for convenience
pub use allowlist::Allowlist;
pub use derived::{compute_derived, DerivedValues};
pub use loader::{load_schema_from_path, parse_schema_json};
pub use refs::{resolve_refs, ResolutionContext};
pub use resolver::{resolve_theme, ResolvedTheme};
pub use sanitize::{sanitize_css_vars, CssVarMap, SafeCssVars};
pub use schema::{ThemeSchema, Token, THEME_SCHEMA_VERSION};
pub use validation::validate_schema;

use bf_common::ConfigError;

/// Parse a JSON theme document and resolve it.
///
/// Only syntactically invalid JSON is an error; anything that parses
/// resolves, falling back to defaults where the document is incomplete.
pub fn resolve_theme_json(content: &str) -> Result<ResolvedTheme, ConfigError> {
    let schema = parse_schema_json(content)?;
    Ok(resolve_theme(&schema))
}

/// Serialize a resolved theme to a pretty-printed JSON string.
pub fn theme_to_json(theme: &ResolvedTheme) -> String {
    serde_json::to_string_pretty(theme)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize theme: {e}\"}}"))
}
