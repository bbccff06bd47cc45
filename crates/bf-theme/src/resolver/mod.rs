//! Theme resolution: schema in, derived values and safe CSS variables out.
//!
//! Pure and deterministic. The candidate map is always passed through the
//! sanitizer before it leaves this module via [`resolve_theme`].


use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::allowlist;
use crate::derived::{
    compute_derived, DerivedValues, DEFAULT_ACCENT, DEFAULT_BORDER, DEFAULT_PRIMARY,
    DEFAULT_SURFACE,
};
use crate::refs::ResolutionContext;
use crate::sanitize::{sanitize_css_vars, CssVarMap, SafeCssVars};
use crate::schema::{ThemeSchema, Token, STATUS_KINDS};

/// A bare number that should be read as px.
static BARE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d+)?$").unwrap());

const FALLBACK_ON_PRIMARY: &str = "#ffffff";
const FALLBACK_PAGE_BG: &str = "#020617";
const FALLBACK_TEXT: &str = "#e5e7eb";
const FALLBACK_MUTED_TEXT: &str = "#94a3b8";
const FALLBACK_DISABLED_BG: &str = "#9ca3af";

/// Output of a resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTheme {
    pub derived: DerivedValues,
    pub css_vars: SafeCssVars,
}

/// Resolve a schema into derived values and sanitized CSS variables.
pub fn resolve_theme(schema: &ThemeSchema) -> ResolvedTheme {
    let (derived, candidates) = resolve_candidates(schema);
    let css_vars = sanitize_css_vars(&candidates, &allowlist::all());
    tracing::debug!(
        candidates = candidates.len(),
        emitted = css_vars.len(),
        "resolved theme"
    );
    ResolvedTheme { derived, css_vars }
}

/// Resolve a schema without sanitizing. For diagnostics only; the map may
/// hold unsafe values.
pub fn resolve_candidates(schema: &ThemeSchema) -> (DerivedValues, CssVarMap) {
    let editable = &schema.editable;
    let derived = compute_derived(editable);
    let ctx = ResolutionContext::new(editable, &derived);
    let mut out = Candidates {
        ctx: &ctx,
        vars: CssVarMap::new(),
    };

    // Brand palette
    let colors = &editable.colors;
    let primary = out.value("--bf-brand-primary", colors.primary.as_ref(), DEFAULT_PRIMARY);
    out.value("--bf-brand-accent", colors.accent.as_ref(), DEFAULT_ACCENT);
    out.value("--bf-page-bg", colors.background.as_ref(), FALLBACK_PAGE_BG);
    out.value("--bf-card-bg", colors.surface.as_ref(), DEFAULT_SURFACE);
    out.value("--bf-text", colors.text.as_ref(), FALLBACK_TEXT);
    let muted = out.value("--bf-text-muted", colors.muted_text.as_ref(), FALLBACK_MUTED_TEXT);
    out.value("--bf-border", colors.border.as_ref(), DEFAULT_BORDER);
    out.set("--bf-border-subtle", &derived.border_subtle);
    out.set("--bf-surface-raised-bg", &derived.surface_raised);
    out.set("--bf-brand-primary-tint", &derived.primary_tint);
    out.set("--bf-brand-primary-shade", &derived.primary_shade);
    out.set("--bf-brand-accent-soft", &derived.accent_soft);

    // Buttons
    let buttons = &editable.buttons;
    out.value("--bf-brand-on-primary", buttons.primary.text.as_ref(), FALLBACK_ON_PRIMARY);
    out.value("--bf-btn-bg", buttons.primary.bg.as_ref(), &primary);
    out.value("--bf-btn-text", buttons.primary.text.as_ref(), FALLBACK_ON_PRIMARY);
    out.value("--bf-btn-border", buttons.primary.border.as_ref(), &primary);
    out.value("--bf-btn-hover-bg", buttons.primary.hover_bg.as_ref(), &derived.primary_shade);
    out.value("--bf-btn-active-bg", buttons.active.bg.as_ref(), &derived.primary_shade);
    out.value("--bf-btn-active-text", buttons.active.text.as_ref(), FALLBACK_ON_PRIMARY);
    out.value("--bf-btn-active-border", buttons.active.border.as_ref(), &derived.primary_shade);
    out.value("--bf-btn-disabled-bg", buttons.disabled.bg.as_ref(), FALLBACK_DISABLED_BG);
    out.value("--bf-btn-disabled-text", buttons.disabled.text.as_ref(), &muted);
    out.value("--bf-focus-ring-color", buttons.focus.ring.as_ref(), &derived.primary_tint);
    out.length("--bf-btn-px", buttons.padding_x.as_ref(), "18");
    out.length("--bf-btn-py", buttons.padding_y.as_ref(), "10");
    out.value("--bf-btn-weight", buttons.font_weight.as_ref(), "600");

    // Glow
    let glow_enabled = out.ctx_truthy(buttons.glow.enabled.as_ref(), true);
    out.set("--bf-glow-enabled", if glow_enabled { "1" } else { "0" });
    out.set("--bf-glow-color", &derived.glow_color);
    out.set(
        "--bf-btn-glow-shadow",
        if glow_enabled {
            derived.glow_shadow.as_str()
        } else {
            "none"
        },
    );

    // Nav
    let nav = &editable.nav;
    out.value("--bf-nav-bg", nav.bg.as_ref(), DEFAULT_SURFACE);
    out.value("--bf-nav-text", nav.text.as_ref(), FALLBACK_TEXT);
    out.value("--bf-nav-active-bg", nav.active_bg.as_ref(), &derived.surface_raised);
    out.value("--bf-nav-active-text", nav.active_text.as_ref(), &primary);
    out.length("--bf-nav-height", nav.height.as_ref(), "56");
    out.length("--bf-nav-blur", nav.blur.as_ref(), "12");
    out.value("--bf-nav-filter", nav.filter.as_ref(), "none");

    // Pills
    let pills = &editable.pills;
    out.value("--bf-pill-bg", pills.bg.as_ref(), &derived.surface_raised);
    out.value("--bf-pill-text", pills.text.as_ref(), FALLBACK_TEXT);
    out.value("--bf-pill-border", pills.border.as_ref(), &derived.border_subtle);
    out.value("--bf-pill-selected-bg", pills.selected_bg.as_ref(), &primary);
    out.value("--bf-pill-selected-text", pills.selected_text.as_ref(), FALLBACK_ON_PRIMARY);
    out.value("--bf-pill-selected-border", pills.selected_border.as_ref(), &derived.primary_tint);
    out.value("--bf-pill-selected-shadow", pills.selected_shadow.as_ref(), &derived.glow_shadow);
    out.length("--bf-pill-px", pills.padding_x.as_ref(), "14");
    out.length("--bf-pill-gap", pills.gap.as_ref(), "8");

    // Inputs
    let inputs = &editable.inputs;
    out.value("--bf-input-bg", inputs.bg.as_ref(), &derived.surface_raised);
    out.value("--bf-input-text", inputs.text.as_ref(), FALLBACK_TEXT);
    out.value("--bf-input-border", inputs.border.as_ref(), DEFAULT_BORDER);
    out.value("--bf-input-focus-border", inputs.focus_border.as_ref(), &primary);
    out.value("--bf-input-placeholder-text", inputs.placeholder.as_ref(), &muted);
    out.length("--bf-input-height", inputs.height.as_ref(), "44");
    out.length("--bf-input-px", inputs.padding_x.as_ref(), "12");
    out.length("--bf-input-pr", inputs.padding_right.as_ref(), "36");

    // Status
    for kind in STATUS_KINDS {
        let tokens = editable.status.get(kind);
        let fixed = derived.status.get(kind);
        let name = kind.name();
        out.value(&format!("--bf-status-{name}-bg"), tokens.bg.as_ref(), &fixed.soft);
        out.value(&format!("--bf-status-{name}-text"), tokens.text.as_ref(), &fixed.text);
        out.value(&format!("--bf-status-{name}-border"), tokens.border.as_ref(), &fixed.border);
    }

    // Radius and elevation
    let radius = &editable.radius;
    out.length("--bf-card-radius", radius.card.as_ref(), "16");
    out.length("--bf-btn-radius", radius.button.as_ref(), "10");
    out.length("--bf-input-radius", radius.input.as_ref(), "10");
    out.length("--bf-pill-radius", radius.pill.as_ref(), "999");
    out.value("--bf-card-shadow", editable.shadow.card.as_ref(), "none");

    // Typography
    let typography = &editable.typography;
    out.value("--bf-font-family", typography.font_family.as_ref(), "system-ui, sans-serif");
    out.value("--bf-font-weight", typography.body_weight.as_ref(), "400");
    out.value("--bf-heading-weight", typography.heading_weight.as_ref(), "600");
    out.length("--bf-base-fs", typography.base_size.as_ref(), "15");
    out.length("--bf-heading-fs", typography.heading_size.as_ref(), "20");
    out.value("--bf-type-scale", typography.scale.as_ref(), "1");

    // Booking card layout
    let booking = &editable.booking_ui;
    out.length("--bf-card-pad", booking.card_padding.as_ref(), "24");
    out.length("--bf-section-gap", booking.section_gap.as_ref(), "16");
    out.length("--bf-summary-mt", booking.summary_margin_top.as_ref(), "16");
    out.length("--bf-summary-mb", booking.summary_margin_bottom.as_ref(), "8");
    out.value("--bf-label-weight", booking.label_weight.as_ref(), "500");
    out.value("--bf-value-weight", booking.value_weight.as_ref(), "600");
    out.value("--bf-date-scale", booking.date_scale.as_ref(), "1");
    if out.ctx_truthy(booking.glass.as_ref(), false) {
        let surface = out.pick(booking.glass_surface.as_ref(), "");
        if !surface.trim().is_empty() {
            out.set("--bf-card-glass", &surface);
        }
    }

    (derived, out.vars)
}

/// Accumulates candidate entries while resolving against one context.
struct Candidates<'a> {
    ctx: &'a ResolutionContext,
    vars: CssVarMap,
}

impl Candidates<'_> {
    /// Resolved token text, or `fallback` when absent or a reference misses.
    fn pick(&self, token: Option<&Token>, fallback: &str) -> String {
        token
            .and_then(|t| self.ctx.try_resolve(t))
            .unwrap_or_else(|| fallback.to_string())
    }

    fn set(&mut self, name: &str, value: &str) {
        self.vars.insert(name.to_string(), value.to_string());
    }

    fn value(&mut self, name: &str, token: Option<&Token>, fallback: &str) -> String {
        let value = self.pick(token, fallback);
        self.set(name, &value);
        value
    }

    /// Like [`Self::value`], but bare numbers gain a `px` unit.
    fn length(&mut self, name: &str, token: Option<&Token>, fallback: &str) {
        let value = self.pick(token, fallback);
        let trimmed = value.trim();
        if BARE_NUMBER_RE.is_match(trimmed) {
            self.set(name, &format!("{trimmed}px"));
        } else {
            self.set(name, &value);
        }
    }

    /// `true`/`1` (any case) after resolution; `default` when absent.
    fn ctx_truthy(&self, token: Option<&Token>, default: bool) -> bool {
        match token.and_then(|t| self.ctx.try_resolve(t)) {
            Some(value) => is_truthy(&value),
            None => default,
        }
    }
}

fn is_truthy(value: &str) -> bool {
    let value = value.trim();
    value == "1" || value.eq_ignore_ascii_case("true")
}
