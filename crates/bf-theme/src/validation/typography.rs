//! Font weight and scale ranges.

use crate::schema::EditableTokens;

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_weights(errors: &mut Vec<String>, editable: &EditableTokens) {
    let typography = &editable.typography;
    let booking = &editable.booking_ui;
    let weights = [
        ("typography.bodyWeight", &typography.body_weight),
        ("typography.headingWeight", &typography.heading_weight),
        ("buttons.fontWeight", &editable.buttons.font_weight),
        ("bookingUI.labelWeight", &booking.label_weight),
        ("bookingUI.valueWeight", &booking.value_weight),
    ];
    for (name, token) in weights {
        validate_range(errors, name, token.as_ref(), 100, 900);
    }
}

pub(crate) fn validate_scales(errors: &mut Vec<String>, editable: &EditableTokens) {
    validate_range_f64(
        errors,
        "typography.scale",
        editable.typography.scale.as_ref(),
        0.8,
        1.2,
    );
    validate_range_f64(
        errors,
        "bookingUI.dateScale",
        editable.booking_ui.date_scale.as_ref(),
        0.8,
        1.2,
    );
}
