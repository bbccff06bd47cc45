//! Color math and validation.
//!
//! Every function here is total: an undecodable color never fails the
//! caller, it degrades to the first input or a fixed fallback instead.
//! Only 6-digit hex colors take part in arithmetic.

mod parse;


use bf_common::types::{Rgb, BLACK, WHITE};

use parse::{is_rgb_call, HEX_RE};

/// Result of decoding a hex color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded {
    Rgb(Rgb),
    Invalid,
}

impl Decoded {
    pub fn rgb(self) -> Option<Rgb> {
        match self {
            Decoded::Rgb(rgb) => Some(rgb),
            Decoded::Invalid => None,
        }
    }
}

/// Decode `#rrggbb` (the `#` is optional).
pub fn hex_to_rgb(hex: &str) -> Decoded {
    match Rgb::from_hex(hex) {
        Some(rgb) => Decoded::Rgb(rgb),
        None => Decoded::Invalid,
    }
}

/// Encode channels as `#rrggbb`, rounding and clamping each to [0, 255].
pub fn rgb_to_hex(channels: [f64; 3]) -> String {
    let [r, g, b] = channels.map(to_channel);
    Rgb::new(r, g, b).to_hex()
}

fn to_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}

fn clamp_unit(value: f64) -> f64 {
    // NaN and -0.0 both become 0.0
    if value.is_nan() || value <= 0.0 {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// Linear interpolation from `c1` toward `c2`.
///
/// `amount` is clamped to [0, 1]. If either color does not decode, `c1`
/// is returned unchanged.
pub fn mix(c1: &str, c2: &str, amount: f64) -> String {
    let (Decoded::Rgb(from), Decoded::Rgb(to)) = (hex_to_rgb(c1), hex_to_rgb(c2)) else {
        return c1.to_string();
    };
    let t = clamp_unit(amount);
    let a = from.channels();
    let b = to.channels();
    rgb_to_hex([0, 1, 2].map(|i| a[i] + (b[i] - a[i]) * t))
}

/// Mix toward white.
pub fn tint(color: &str, amount: f64) -> String {
    mix(color, &WHITE.to_hex(), amount)
}

/// Mix toward black.
pub fn shade(color: &str, amount: f64) -> String {
    mix(color, &BLACK.to_hex(), amount)
}

/// `rgba(r, g, b, a)` for a hex color; opaque-black channels if it does not decode.
pub fn rgba(hex: &str, alpha: f64) -> String {
    let rgb = hex_to_rgb(hex).rgb().unwrap_or(BLACK);
    format!(
        "rgba({}, {}, {}, {})",
        rgb.r,
        rgb.g,
        rgb.b,
        clamp_unit(alpha)
    )
}

/// Glow strength, from the `buttons.glow.intensity` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlowIntensity {
    Soft,
    #[default]
    Medium,
    Strong,
}

impl GlowIntensity {
    /// Case-insensitive; unknown or missing names mean `Medium`.
    pub fn from_name(name: Option<&str>) -> Self {
        match name.map(|n| n.trim().to_ascii_lowercase()).as_deref() {
            Some("soft") => GlowIntensity::Soft,
            Some("strong") => GlowIntensity::Strong,
            _ => GlowIntensity::Medium,
        }
    }

    pub fn alpha(self) -> f64 {
        match self {
            GlowIntensity::Soft => 0.2,
            GlowIntensity::Medium => 0.3,
            GlowIntensity::Strong => 0.4,
        }
    }
}

/// Glow reach, from the `buttons.glow.spread` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlowSpread {
    Tight,
    #[default]
    Medium,
    Wide,
}

impl GlowSpread {
    /// Case-insensitive; unknown or missing names mean `Medium`.
    pub fn from_name(name: Option<&str>) -> Self {
        match name.map(|n| n.trim().to_ascii_lowercase()).as_deref() {
            Some("tight") => GlowSpread::Tight,
            Some("wide") => GlowSpread::Wide,
            _ => GlowSpread::Medium,
        }
    }
}

/// Which brand color the glow takes its hue from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlowSource {
    #[default]
    Primary,
    Accent,
}

impl GlowSource {
    /// Only `accent` (any case) selects the accent; everything else is primary.
    pub fn from_name(name: Option<&str>) -> Self {
        match name.map(|n| n.trim().to_ascii_lowercase()).as_deref() {
            Some("accent") => GlowSource::Accent,
            _ => GlowSource::Primary,
        }
    }
}

/// Alpha used for the glow color at a given intensity name.
pub fn glow_alpha(intensity: Option<&str>) -> f64 {
    GlowIntensity::from_name(intensity).alpha()
}

/// `box-shadow` value for the glow.
///
/// `tight` is a single ring; `medium` and `wide` add an outer blur layer.
pub fn glow_shadow(color: &str, spread: Option<&str>) -> String {
    match GlowSpread::from_name(spread) {
        GlowSpread::Tight => format!("0 0 0 2px {color}"),
        GlowSpread::Medium => format!("0 0 0 1px {color}, 0 4px 14px {color}"),
        GlowSpread::Wide => format!("0 0 0 1px {color}, 0 8px 28px {color}"),
    }
}

/// Validate that a string is a color a stylesheet value may hold.
pub fn validate_color(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() {
        return false;
    }
    if s.starts_with('#') {
        return HEX_RE.is_match(s);
    }
    if s.starts_with("rgba(") || s.starts_with("rgb(") {
        return is_rgb_call(s);
    }
    false
}
