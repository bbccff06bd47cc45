//! Advisory schema validation.
//!
//! Resolution never fails, so nothing here gates it. This is for the
//! external editor: each concern has its own submodule, and the
//! orchestrator collects every finding into a single `ConfigError`.

mod glow;
mod helpers;
mod palette;
mod references;
mod typography;

#[cfg(test)]
mod tests;

use bf_common::ConfigError;

use crate::derived::compute_derived;
use crate::refs::ResolutionContext;
use crate::schema::{ThemeSchema, THEME_SCHEMA_VERSION};

/// Run all checks on a schema, collecting all findings.
pub fn validate_schema(schema: &ThemeSchema) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if schema.version > THEME_SCHEMA_VERSION {
        errors.push(format!(
            "version = {} is newer than supported version {THEME_SCHEMA_VERSION}",
            schema.version
        ));
    }

    let editable = &schema.editable;
    let derived = compute_derived(editable);
    let ctx = ResolutionContext::new(editable, &derived);

    palette::validate_palette(&mut errors, editable);
    references::validate_references(&mut errors, editable, &ctx);
    glow::validate_glow(&mut errors, &editable.buttons.glow);
    typography::validate_weights(&mut errors, editable);
    typography::validate_scales(&mut errors, editable);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
