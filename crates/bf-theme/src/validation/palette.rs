//! Color literal checks for the palette, components and status slots.

use crate::schema::{EditableTokens, STATUS_KINDS};

use super::helpers::validate_color_slot;

pub(crate) fn validate_palette(errors: &mut Vec<String>, editable: &EditableTokens) {
    let colors = &editable.colors;
    let buttons = &editable.buttons;
    let nav = &editable.nav;
    let pills = &editable.pills;
    let inputs = &editable.inputs;

    let slots = [
        ("colors.primary", &colors.primary),
        ("colors.accent", &colors.accent),
        ("colors.background", &colors.background),
        ("colors.surface", &colors.surface),
        ("colors.text", &colors.text),
        ("colors.mutedText", &colors.muted_text),
        ("colors.border", &colors.border),
        ("buttons.primary.bg", &buttons.primary.bg),
        ("buttons.primary.text", &buttons.primary.text),
        ("buttons.primary.border", &buttons.primary.border),
        ("buttons.primary.hoverBg", &buttons.primary.hover_bg),
        ("buttons.active.bg", &buttons.active.bg),
        ("buttons.active.text", &buttons.active.text),
        ("buttons.active.border", &buttons.active.border),
        ("buttons.disabled.bg", &buttons.disabled.bg),
        ("buttons.disabled.text", &buttons.disabled.text),
        ("buttons.focus.ring", &buttons.focus.ring),
        ("nav.bg", &nav.bg),
        ("nav.text", &nav.text),
        ("nav.activeBg", &nav.active_bg),
        ("nav.activeText", &nav.active_text),
        ("pills.bg", &pills.bg),
        ("pills.text", &pills.text),
        ("pills.border", &pills.border),
        ("pills.selectedBg", &pills.selected_bg),
        ("pills.selectedText", &pills.selected_text),
        ("pills.selectedBorder", &pills.selected_border),
        ("inputs.bg", &inputs.bg),
        ("inputs.text", &inputs.text),
        ("inputs.border", &inputs.border),
        ("inputs.focusBorder", &inputs.focus_border),
        ("inputs.placeholder", &inputs.placeholder),
    ];
    for (name, token) in slots {
        validate_color_slot(errors, name, token.as_ref());
    }

    for kind in STATUS_KINDS {
        let tokens = editable.status.get(kind);
        let kind = kind.name();
        validate_color_slot(errors, &format!("status.{kind}.bg"), tokens.bg.as_ref());
        validate_color_slot(errors, &format!("status.{kind}.text"), tokens.text.as_ref());
        validate_color_slot(errors, &format!("status.{kind}.border"), tokens.border.as_ref());
    }
}
