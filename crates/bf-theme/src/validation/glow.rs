//! Glow option names.

use crate::schema::GlowTokens;

use super::helpers::validate_one_of;

const SOURCES: &[&str] = &["primary", "accent"];
const INTENSITIES: &[&str] = &["soft", "medium", "strong"];
const SPREADS: &[&str] = &["tight", "medium", "wide"];

/// Unknown names resolve to defaults; flag them so the editor can say so.
pub(crate) fn validate_glow(errors: &mut Vec<String>, glow: &GlowTokens) {
    validate_one_of(errors, "buttons.glow.source", glow.source.as_ref(), SOURCES);
    validate_one_of(errors, "buttons.glow.intensity", glow.intensity.as_ref(), INTENSITIES);
    validate_one_of(errors, "buttons.glow.spread", glow.spread.as_ref(), SPREADS);
}
