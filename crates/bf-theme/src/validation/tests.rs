//! Tests for the full validation pipeline.

use serde_json::json;

use super::*;
use crate::schema::tok;

fn findings(schema: &ThemeSchema) -> String {
    validate_schema(schema).unwrap_err().to_string()
}

#[test]
fn default_schema_validates() {
    assert!(validate_schema(&ThemeSchema::default()).is_ok());
}

#[test]
fn empty_document_validates() {
    assert!(validate_schema(&ThemeSchema::from_value(json!({}))).is_ok());
}

#[test]
fn catches_newer_version() {
    let mut schema = ThemeSchema::default();
    schema.version = THEME_SCHEMA_VERSION + 1;
    assert!(findings(&schema).contains("version"));
}

#[test]
fn older_version_is_fine() {
    let mut schema = ThemeSchema::default();
    schema.version = 0;
    assert!(validate_schema(&schema).is_ok());
}

#[test]
fn catches_invalid_palette_color() {
    let mut schema = ThemeSchema::default();
    schema.editable.colors.primary = tok("not-a-color");
    let err = findings(&schema);
    assert!(err.contains("colors.primary"));
    assert!(err.starts_with("theme schema validation error"));
}

#[test]
fn catches_invalid_component_and_status_colors() {
    let mut schema = ThemeSchema::default();
    schema.editable.pills.selected_bg = tok("#12");
    schema.editable.status.error.text = tok("rgb(300, 0, 0)");
    let err = findings(&schema);
    assert!(err.contains("pills.selectedBg"));
    assert!(err.contains("status.error.text"));
}

#[test]
fn rgba_literals_are_valid_colors() {
    let mut schema = ThemeSchema::default();
    schema.editable.nav.bg = tok("rgba(15, 23, 42, 0.8)");
    assert!(validate_schema(&schema).is_ok());
}

#[test]
fn catches_unresolved_reference() {
    let mut schema = ThemeSchema::default();
    schema.editable.inputs.border = tok("{colors.outline}");
    let err = findings(&schema);
    assert!(err.contains("inputs.border"));
    assert!(err.contains("{colors.outline}"));
}

#[test]
fn reference_to_absent_slot_is_unresolved() {
    let mut schema = ThemeSchema::default();
    schema.editable.colors.accent = None;
    schema.editable.nav.active_text = tok("{colors.accent}");
    assert!(findings(&schema).contains("nav.activeText"));
}

#[test]
fn references_outside_the_context_are_unresolved() {
    let mut schema = ThemeSchema::default();
    schema.editable.radius.button = tok("{radius.card}");
    assert!(findings(&schema).contains("radius.button"));
}

#[test]
fn catches_unknown_glow_names() {
    let mut schema = ThemeSchema::default();
    schema.editable.buttons.glow.intensity = tok("blinding");
    schema.editable.buttons.glow.spread = tok("huge");
    schema.editable.buttons.glow.source = tok("secondary");
    let err = findings(&schema);
    assert!(err.contains("buttons.glow.intensity"));
    assert!(err.contains("buttons.glow.spread"));
    assert!(err.contains("buttons.glow.source"));
}

#[test]
fn glow_names_are_case_insensitive() {
    let mut schema = ThemeSchema::default();
    schema.editable.buttons.glow.intensity = tok("Strong");
    schema.editable.buttons.glow.source = tok("ACCENT");
    assert!(validate_schema(&schema).is_ok());
}

#[test]
fn catches_weights_out_of_range() {
    let mut schema = ThemeSchema::default();
    schema.editable.typography.heading_weight = tok("950");
    schema.editable.booking_ui.label_weight = tok("bold");
    let err = findings(&schema);
    assert!(err.contains("typography.headingWeight = 950"));
    assert!(err.contains("bookingUI.labelWeight"));
}

#[test]
fn catches_scales_out_of_range() {
    let mut schema = ThemeSchema::default();
    schema.editable.typography.scale = tok("1.5");
    schema.editable.booking_ui.date_scale = tok("0.5");
    let err = findings(&schema);
    assert!(err.contains("typography.scale"));
    assert!(err.contains("bookingUI.dateScale"));
}

#[test]
fn collects_all_findings() {
    let mut schema = ThemeSchema::default();
    schema.editable.colors.text = tok("blue");
    schema.editable.typography.scale = tok("3");
    schema.editable.buttons.glow.spread = tok("huge");
    let err = findings(&schema);
    assert_eq!(err.matches("; ").count(), 2);
}
