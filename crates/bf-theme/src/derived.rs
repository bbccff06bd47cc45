//! Derived values: colors and shadows computed from the editable palette.
//!
//! Recomputed on every resolution; nothing here is stored in the schema.

use serde::{Deserialize, Serialize};

use crate::colors::{glow_alpha, glow_shadow, mix, rgba, shade, tint, GlowSource};
use crate::schema::{EditableTokens, StatusKind, Token};

/// Palette used for color math when a slot is absent or not a literal.
pub const DEFAULT_PRIMARY: &str = "#2563eb";
pub const DEFAULT_ACCENT: &str = "#22c55e";
pub const DEFAULT_SURFACE: &str = "#0f172a";
pub const DEFAULT_BORDER: &str = "#1f2937";

const WHITE: &str = "#ffffff";

/// Status base hues. Fixed across tenants so status colors read the same
/// whatever the brand palette.
pub const STATUS_SUCCESS_BASE: &str = "#16a34a";
pub const STATUS_WARNING_BASE: &str = "#d97706";
pub const STATUS_ERROR_BASE: &str = "#dc2626";
pub const STATUS_INFO_BASE: &str = "#0284c7";

const STATUS_SOFT_TINT: f64 = 0.85;
const STATUS_TEXT_SHADE: f64 = 0.35;
const STATUS_BORDER_TINT: f64 = 0.65;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedValues {
    pub primary_tint: String,
    pub primary_shade: String,
    pub accent_soft: String,
    pub surface_raised: String,
    pub border_subtle: String,
    pub glow_color: String,
    pub glow_shadow: String,
    pub status: DerivedStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedStatus {
    pub success: StatusTriple,
    pub warning: StatusTriple,
    pub error: StatusTriple,
    pub info: StatusTriple,
}

impl DerivedStatus {
    pub fn get(&self, kind: StatusKind) -> &StatusTriple {
        match kind {
            StatusKind::Success => &self.success,
            StatusKind::Warning => &self.warning,
            StatusKind::Error => &self.error,
            StatusKind::Info => &self.info,
        }
    }
}

/// Background, foreground and border for one status kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTriple {
    pub soft: String,
    pub text: String,
    pub border: String,
}

impl StatusTriple {
    fn from_base(base: &str) -> Self {
        Self {
            soft: tint(base, STATUS_SOFT_TINT),
            text: shade(base, STATUS_TEXT_SHADE),
            border: tint(base, STATUS_BORDER_TINT),
        }
    }
}

pub fn status_base(kind: StatusKind) -> &'static str {
    match kind {
        StatusKind::Success => STATUS_SUCCESS_BASE,
        StatusKind::Warning => STATUS_WARNING_BASE,
        StatusKind::Error => STATUS_ERROR_BASE,
        StatusKind::Info => STATUS_INFO_BASE,
    }
}

/// Literal text of a palette slot, or `default` when absent or a reference.
fn literal_or<'a>(token: Option<&'a Token>, default: &'a str) -> &'a str {
    token.and_then(Token::as_literal).unwrap_or(default)
}

/// Compute every derived value from the editable tokens.
pub fn compute_derived(editable: &EditableTokens) -> DerivedValues {
    let colors = &editable.colors;
    let primary = literal_or(colors.primary.as_ref(), DEFAULT_PRIMARY);
    let accent = literal_or(colors.accent.as_ref(), DEFAULT_ACCENT);
    let surface = literal_or(colors.surface.as_ref(), DEFAULT_SURFACE);
    let border = literal_or(colors.border.as_ref(), DEFAULT_BORDER);

    let glow = &editable.buttons.glow;
    let glow_source = match GlowSource::from_name(glow.source.as_ref().map(Token::as_str)) {
        GlowSource::Accent => accent,
        GlowSource::Primary => primary,
    };
    let glow_color = rgba(
        glow_source,
        glow_alpha(glow.intensity.as_ref().map(Token::as_str)),
    );
    let glow_shadow = glow_shadow(&glow_color, glow.spread.as_ref().map(Token::as_str));

    DerivedValues {
        primary_tint: tint(primary, 0.35),
        primary_shade: shade(primary, 0.18),
        accent_soft: tint(accent, 0.55),
        surface_raised: mix(surface, WHITE, 0.06),
        border_subtle: mix(border, surface, 0.35),
        glow_color,
        glow_shadow,
        status: DerivedStatus {
            success: StatusTriple::from_base(STATUS_SUCCESS_BASE),
            warning: StatusTriple::from_base(STATUS_WARNING_BASE),
            error: StatusTriple::from_base(STATUS_ERROR_BASE),
            info: StatusTriple::from_base(STATUS_INFO_BASE),
        },
    }
}
