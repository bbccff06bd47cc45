//! Tests for allowlist filtering, key classification and value checks.

use super::*;
use crate::allowlist::{self, brand_overrides, theme_tokens};

fn candidates(pairs: &[(&str, &str)]) -> CssVarMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn valid_length_passes_unchanged() {
    let input = candidates(&[("--bf-card-radius", "12px")]);
    let out = sanitize_css_vars(&input, &[theme_tokens()]);
    assert_eq!(out.into_inner(), input);
}

#[test]
fn injection_in_length_drops_key() {
    let input = candidates(&[("--bf-card-radius", "12px; background:url(x)")]);
    let out = sanitize_css_vars(&input, &[theme_tokens()]);
    assert!(out.is_empty());
}

#[test]
fn unknown_key_is_always_dropped() {
    let input = candidates(&[
        ("--bf-evil", "12px"),
        ("color", "#fff"),
        ("--bf-card-radius-extra", "12px"),
    ]);
    let out = sanitize_css_vars(&input, &allowlist::all());
    assert!(out.is_empty());
}

#[test]
fn brand_key_needs_brand_allowlist() {
    let input = candidates(&[("--bf-brand-primary", "#2563eb")]);
    assert!(sanitize_css_vars(&input, &[theme_tokens()]).is_empty());
    assert_eq!(
        sanitize_css_vars(&input, &[brand_overrides()]).get("--bf-brand-primary"),
        Some("#2563eb")
    );
}

#[test]
fn no_allowlists_means_nothing_passes() {
    let input = candidates(&[("--bf-card-radius", "12px")]);
    assert!(sanitize_css_vars(&input, &[]).is_empty());
}

#[test]
fn values_are_trimmed() {
    let input = candidates(&[("--bf-card-radius", "  12px \n"), ("--bf-text", " #fff ")]);
    let out = sanitize_css_vars(&input, &[theme_tokens()]);
    assert_eq!(out.get("--bf-card-radius"), Some("12px"));
    assert_eq!(out.get("--bf-text"), Some("#fff"));
}

#[test]
fn pixel_length_rule() {
    let cat = VarCategory::PixelLength;
    assert!(cat.accepts("0px"));
    assert!(cat.accepts("12.5px"));
    assert!(!cat.accepts("12"));
    assert!(!cat.accepts("12em"));
    assert!(!cat.accepts("-4px"));
    assert!(!cat.accepts("12.px"));
    assert!(!cat.accepts("calc(1px + 2px)"));
}

#[test]
fn color_rule() {
    let cat = VarCategory::Color;
    assert!(cat.accepts("#abc"));
    assert!(cat.accepts("#2563eb"));
    assert!(cat.accepts("rgba(34, 197, 94, 0.4)"));
    assert!(!cat.accepts("red"));
    assert!(!cat.accepts("#2563eb;"));
    assert!(!cat.accepts("{colors.primary}"));
    assert!(!cat.accepts("url(javascript:alert(1))"));
}

#[test]
fn scale_rule_bounds() {
    let cat = VarCategory::Scale;
    assert!(cat.accepts("0.8"));
    assert!(cat.accepts("1"));
    assert!(cat.accepts("1.2"));
    assert!(!cat.accepts("0.79"));
    assert!(!cat.accepts("1.21"));
    assert!(!cat.accepts("1e0"));
    assert!(!cat.accepts("-1"));
    assert!(!cat.accepts(""));
}

#[test]
fn opaque_rules_cap_length_and_forbid_block_syntax() {
    assert!(VarCategory::Shadow.accepts("0 4px 14px rgba(0, 0, 0, 0.3)"));
    assert!(!VarCategory::Shadow.accepts("none; color: red"));
    assert!(!VarCategory::Shadow.accepts("} body { display:none"));
    assert!(VarCategory::Shadow.accepts(&"a".repeat(200)));
    assert!(!VarCategory::Shadow.accepts(&"a".repeat(201)));
    assert!(VarCategory::Filter.accepts(&"a".repeat(80)));
    assert!(!VarCategory::Filter.accepts(&"a".repeat(81)));
    assert!(VarCategory::Glass.accepts(&"a".repeat(200)));
    assert!(!VarCategory::FontFamily.accepts(&"a".repeat(81)));
    assert!(VarCategory::FontFamily.accepts("Inter, system-ui, sans-serif"));
}

#[test]
fn opaque_rules_reject_markup_comments_and_quotes() {
    let opaque = [
        VarCategory::FontFamily,
        VarCategory::Filter,
        VarCategory::Shadow,
        VarCategory::Glass,
    ];
    let breakouts = [
        "0 0 red</style><script>alert(1)</script>",
        "a > b",
        "Inter /*",
        "Inter */",
        "\"unterminated",
        "'unterminated",
        "\"Inter\", sans-serif",
        "blur(2px)\\",
        "blur(2px)\nx",
        "blur(2px)\u{0}",
    ];
    for category in opaque {
        for value in breakouts {
            assert!(!category.accepts(value), "{} accepted {value:?}", category.name());
        }
    }
}

#[test]
fn font_weight_rule() {
    let cat = VarCategory::FontWeight;
    assert!(cat.accepts("100"));
    assert!(cat.accepts("650"));
    assert!(cat.accepts("900"));
    assert!(!cat.accepts("99"));
    assert!(!cat.accepts("901"));
    assert!(!cat.accepts("bold"));
    assert!(!cat.accepts("600.5"));
    assert!(!cat.accepts("+400"));
    assert!(!cat.accepts("0400"));
    assert!(!cat.accepts("+0400"));
}

#[test]
fn flag_rule() {
    assert!(VarCategory::Flag.accepts("0"));
    assert!(VarCategory::Flag.accepts("1"));
    assert!(!VarCategory::Flag.accepts("true"));
    assert!(!VarCategory::Flag.accepts("01"));
}

#[test]
fn border_radius_classifies_as_length_not_color() {
    assert_eq!(classify("--bf-border-radius"), Some(VarCategory::PixelLength));
    assert_eq!(classify("--bf-input-border-radius"), Some(VarCategory::PixelLength));
    assert_eq!(classify("--bf-input-border"), Some(VarCategory::Color));
}

#[test]
fn overlapping_names_follow_rule_order() {
    // named keys beat substring rules
    assert_eq!(classify("--bf-font-weight"), Some(VarCategory::FontWeight));
    assert_eq!(classify("--bf-font-family"), Some(VarCategory::FontFamily));
    assert_eq!(classify("--bf-glow-enabled"), Some(VarCategory::Flag));
    // length suffix beats the color word
    assert_eq!(classify("--bf-text-fs"), Some(VarCategory::PixelLength));
    assert_eq!(classify("--bf-bg-blur"), Some(VarCategory::PixelLength));
    // color word beats the shadow suffix
    assert_eq!(classify("--bf-text-shadow"), Some(VarCategory::Color));
    assert_eq!(classify("--bf-card-shadow"), Some(VarCategory::Shadow));
}

#[test]
fn margin_segments_match_whole_segments_only() {
    assert_eq!(classify("--bf-summary-mt"), Some(VarCategory::PixelLength));
    assert_eq!(classify("--bf-summary-mb"), Some(VarCategory::PixelLength));
    assert_eq!(classify("--bf-mtx"), None);
}

#[test]
fn unclassified_allowlisted_key_is_dropped() {
    let custom = Allowlist::new("custom", &["--bf-mystery"]);
    let input = candidates(&[("--bf-mystery", "anything")]);
    assert_eq!(classify("--bf-mystery"), None);
    assert!(sanitize_css_vars(&input, &[&custom]).is_empty());
}

#[test]
fn every_allowlisted_key_has_a_category() {
    for list in allowlist::all() {
        for key in list.iter() {
            assert!(classify(key).is_some(), "{key} has no category");
        }
    }
}

#[test]
fn mixed_batch_keeps_only_valid_entries() {
    let input = candidates(&[
        ("--bf-card-radius", "16px"),
        ("--bf-card-bg", "#0f172a"),
        ("--bf-text", "expression(alert(1))"),
        ("--bf-type-scale", "3"),
        ("--bf-card-shadow", "0 1px 2px rgba(0, 0, 0, 0.2)"),
        ("--bf-glow-enabled", "1"),
        ("--bf-label-weight", "1000"),
    ]);
    let out = sanitize_css_vars(&input, &allowlist::all());
    let keys: Vec<&str> = out.keys().collect();
    assert_eq!(
        keys,
        [
            "--bf-card-bg",
            "--bf-card-radius",
            "--bf-card-shadow",
            "--bf-glow-enabled",
        ]
    );
}

#[test]
fn output_never_contains_block_syntax() {
    let nasty = ["}", "{", ";", "a;b", "x{y}", "#fff;", "12px}"];
    let mut input = CssVarMap::new();
    for list in allowlist::all() {
        for (i, key) in list.iter().enumerate() {
            input.insert(key.to_string(), nasty[i % nasty.len()].to_string());
        }
    }
    let out = sanitize_css_vars(&input, &allowlist::all());
    assert!(out.is_empty());
}

#[test]
fn markup_in_shadow_never_reaches_declarations() {
    let input = candidates(&[
        ("--bf-card-shadow", "0 0 red</style><script>alert(1)</script>"),
        ("--bf-font-family", "Inter /*"),
        ("--bf-nav-filter", "\"unterminated"),
        ("--bf-card-radius", "12px"),
    ]);
    let out = sanitize_css_vars(&input, &[theme_tokens()]);
    assert_eq!(out.to_declarations(), "--bf-card-radius: 12px;");
}

#[test]
fn declarations_are_in_key_order() {
    let input = candidates(&[("--bf-text", "#fff"), ("--bf-card-radius", "12px")]);
    let out = sanitize_css_vars(&input, &[theme_tokens()]);
    assert_eq!(
        out.to_declarations(),
        "--bf-card-radius: 12px;\n--bf-text: #fff;"
    );
}
