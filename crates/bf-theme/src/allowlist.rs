//! The fixed sets of CSS variable names the sanitizer may emit.
//!
//! Built once on first use and read-only afterwards. The sanitizer takes
//! them as arguments rather than reading them implicitly.

use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Brand identity: primary, on-primary, page and card backgrounds.
pub const BRAND_OVERRIDE_KEYS: &[&str] = &[
    "--bf-brand-primary",
    "--bf-brand-on-primary",
    "--bf-page-bg",
    "--bf-card-bg",
];

/// Structural and component tokens.
pub const THEME_TOKEN_KEYS: &[&str] = &[
    // palette
    "--bf-brand-accent",
    "--bf-brand-primary-tint",
    "--bf-brand-primary-shade",
    "--bf-brand-accent-soft",
    "--bf-text",
    "--bf-text-muted",
    "--bf-border",
    "--bf-border-subtle",
    "--bf-surface-raised-bg",
    // buttons
    "--bf-btn-bg",
    "--bf-btn-text",
    "--bf-btn-border",
    "--bf-btn-hover-bg",
    "--bf-btn-active-bg",
    "--bf-btn-active-text",
    "--bf-btn-active-border",
    "--bf-btn-disabled-bg",
    "--bf-btn-disabled-text",
    "--bf-btn-radius",
    "--bf-btn-px",
    "--bf-btn-py",
    "--bf-btn-weight",
    "--bf-btn-glow-shadow",
    "--bf-focus-ring-color",
    "--bf-glow-color",
    "--bf-glow-enabled",
    // nav
    "--bf-nav-bg",
    "--bf-nav-text",
    "--bf-nav-active-bg",
    "--bf-nav-active-text",
    "--bf-nav-height",
    "--bf-nav-blur",
    "--bf-nav-filter",
    // pills
    "--bf-pill-bg",
    "--bf-pill-text",
    "--bf-pill-border",
    "--bf-pill-selected-bg",
    "--bf-pill-selected-text",
    "--bf-pill-selected-border",
    "--bf-pill-selected-shadow",
    "--bf-pill-radius",
    "--bf-pill-px",
    "--bf-pill-gap",
    // inputs
    "--bf-input-bg",
    "--bf-input-text",
    "--bf-input-border",
    "--bf-input-focus-border",
    "--bf-input-placeholder-text",
    "--bf-input-radius",
    "--bf-input-height",
    "--bf-input-px",
    "--bf-input-pr",
    // status
    "--bf-status-success-bg",
    "--bf-status-success-text",
    "--bf-status-success-border",
    "--bf-status-warning-bg",
    "--bf-status-warning-text",
    "--bf-status-warning-border",
    "--bf-status-error-bg",
    "--bf-status-error-text",
    "--bf-status-error-border",
    "--bf-status-info-bg",
    "--bf-status-info-text",
    "--bf-status-info-border",
    // card and layout
    "--bf-card-radius",
    "--bf-card-pad",
    "--bf-card-shadow",
    "--bf-card-glass",
    "--bf-section-gap",
    "--bf-summary-mt",
    "--bf-summary-mb",
    // typography
    "--bf-font-family",
    "--bf-font-weight",
    "--bf-heading-weight",
    "--bf-label-weight",
    "--bf-value-weight",
    "--bf-base-fs",
    "--bf-heading-fs",
    "--bf-type-scale",
    "--bf-date-scale",
];

/// An immutable set of permitted variable names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allowlist {
    name: &'static str,
    keys: BTreeSet<&'static str>,
}

impl Allowlist {
    pub fn new(name: &'static str, keys: &[&'static str]) -> Self {
        Self {
            name,
            keys: keys.iter().copied().collect(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.keys.iter().copied()
    }
}

static THEME_TOKENS: LazyLock<Allowlist> =
    LazyLock::new(|| Allowlist::new("theme-tokens", THEME_TOKEN_KEYS));

static BRAND_OVERRIDES: LazyLock<Allowlist> =
    LazyLock::new(|| Allowlist::new("brand-overrides", BRAND_OVERRIDE_KEYS));

pub fn theme_tokens() -> &'static Allowlist {
    &THEME_TOKENS
}

pub fn brand_overrides() -> &'static Allowlist {
    &BRAND_OVERRIDES
}

/// Both allowlists, for sanitizing full resolver output.
pub fn all() -> [&'static Allowlist; 2] {
    [theme_tokens(), brand_overrides()]
}
