//! Key-name classification and per-category value checks.
//!
//! Rules are evaluated top to bottom and the first match wins. Order
//! matters: `--bf-card-radius`-style names contain both a length word and
//! (for border radii) a color word, and must land on the length rule.

use regex::Regex;
use std::sync::LazyLock;

use crate::colors::validate_color;

static PX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+(\.\d+)?px$").unwrap());

static DECIMAL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+(\.\d+)?$").unwrap());

static WEIGHT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{3}$").unwrap());

/// Characters that could end the declaration, the rule, or the enclosing
/// `<style>` element, or open a string that swallows what follows.
const OPAQUE_FORBIDDEN: &[char] = &[';', '{', '}', '<', '>', '"', '\'', '\\'];

const FONT_WEIGHT_KEYS: &[&str] = &[
    "--bf-font-weight",
    "--bf-heading-weight",
    "--bf-btn-weight",
    "--bf-label-weight",
    "--bf-value-weight",
];

const SCALE_MIN: f64 = 0.8;
const SCALE_MAX: f64 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarCategory {
    FontFamily,
    FontWeight,
    Flag,
    PixelLength,
    Color,
    Scale,
    Filter,
    Shadow,
    Glass,
}

impl VarCategory {
    pub fn name(self) -> &'static str {
        match self {
            VarCategory::FontFamily => "font-family",
            VarCategory::FontWeight => "font-weight",
            VarCategory::Flag => "flag",
            VarCategory::PixelLength => "pixel-length",
            VarCategory::Color => "color",
            VarCategory::Scale => "scale",
            VarCategory::Filter => "filter",
            VarCategory::Shadow => "shadow",
            VarCategory::Glass => "glass",
        }
    }

    /// Length cap for free-form categories.
    fn max_len(self) -> Option<usize> {
        match self {
            VarCategory::FontFamily | VarCategory::Filter => Some(80),
            VarCategory::Shadow | VarCategory::Glass => Some(200),
            _ => None,
        }
    }

    /// Check an already-trimmed value against this category.
    pub fn accepts(self, value: &str) -> bool {
        match self {
            VarCategory::PixelLength => PX_RE.is_match(value),
            VarCategory::Color => validate_color(value),
            VarCategory::Scale => DECIMAL_RE.is_match(value)
                && value
                    .parse::<f64>()
                    .is_ok_and(|v| (SCALE_MIN..=SCALE_MAX).contains(&v)),
            VarCategory::FontWeight => {
                WEIGHT_RE.is_match(value)
                    && value
                        .parse::<u32>()
                        .is_ok_and(|w| (100..=900).contains(&w))
            }
            VarCategory::Flag => value == "0" || value == "1",
            VarCategory::FontFamily
            | VarCategory::Filter
            | VarCategory::Shadow
            | VarCategory::Glass => {
                let cap = self.max_len().unwrap_or(0);
                value.chars().count() <= cap && is_inert_text(value)
            }
        }
    }
}

/// Free-form text that cannot break out of a declaration value.
fn is_inert_text(value: &str) -> bool {
    !value.contains(OPAQUE_FORBIDDEN)
        && !value.contains("/*")
        && !value.contains("*/")
        && !value.chars().any(char::is_control)
}

pub struct CategoryRule {
    pub matches: fn(&str) -> bool,
    pub category: VarCategory,
}

/// Ordered classification table. First match wins.
pub static CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        matches: is_font_family_key,
        category: VarCategory::FontFamily,
    },
    CategoryRule {
        matches: is_font_weight_key,
        category: VarCategory::FontWeight,
    },
    CategoryRule {
        matches: is_flag_key,
        category: VarCategory::Flag,
    },
    CategoryRule {
        matches: is_length_key,
        category: VarCategory::PixelLength,
    },
    CategoryRule {
        matches: is_color_key,
        category: VarCategory::Color,
    },
    CategoryRule {
        matches: is_scale_key,
        category: VarCategory::Scale,
    },
    CategoryRule {
        matches: is_filter_key,
        category: VarCategory::Filter,
    },
    CategoryRule {
        matches: is_shadow_key,
        category: VarCategory::Shadow,
    },
    CategoryRule {
        matches: is_glass_key,
        category: VarCategory::Glass,
    },
];

/// Category of a variable name, or `None` if no rule matches.
pub fn classify(key: &str) -> Option<VarCategory> {
    CATEGORY_RULES
        .iter()
        .find(|rule| (rule.matches)(key))
        .map(|rule| rule.category)
}

fn is_font_family_key(key: &str) -> bool {
    key == "--bf-font-family"
}

fn is_font_weight_key(key: &str) -> bool {
    FONT_WEIGHT_KEYS.contains(&key)
}

fn is_flag_key(key: &str) -> bool {
    key == "--bf-glow-enabled"
}

fn is_length_key(key: &str) -> bool {
    ["radius", "pad", "gap", "height", "blur"]
        .iter()
        .any(|word| key.contains(word))
        || key.split('-').any(|seg| seg == "mt" || seg == "mb")
        || ["-fs", "-px", "-py", "-pr"]
            .iter()
            .any(|suffix| key.ends_with(suffix))
}

fn is_color_key(key: &str) -> bool {
    ["bg", "border", "brand", "text"]
        .iter()
        .any(|word| key.contains(word))
        || key.ends_with("-color")
}

fn is_scale_key(key: &str) -> bool {
    key.ends_with("-scale")
}

fn is_filter_key(key: &str) -> bool {
    key.ends_with("-filter")
}

fn is_shadow_key(key: &str) -> bool {
    key.ends_with("-shadow")
}

fn is_glass_key(key: &str) -> bool {
    key.ends_with("-glass")
}
