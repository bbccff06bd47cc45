//! Property-based invariant tests for color math, sanitization and
//! resolution.
//!
//! 1. Hex decode/encode round-trips up to case
//! 2. Mixing hits its endpoints, moves monotonically toward its target and
//!    stays a valid color
//! 3. Sanitized output is a subset of the allowlists with block-free values
//! 4. Resolution never panics and only emits values that pass their category

use bf_theme::allowlist;
use bf_theme::colors::{hex_to_rgb, mix, rgb_to_hex, rgba, shade, tint, validate_color};
use bf_theme::sanitize::classify;
use bf_theme::{resolve_theme, sanitize_css_vars, CssVarMap, ThemeSchema};
use proptest::prelude::*;
use serde_json::json;

// ── Strategies ──────────────────────────────────────────────────────────

fn hex_strategy() -> impl Strategy<Value = String> {
    "#[0-9a-fA-F]{6}"
}

fn allowlisted_key_strategy() -> impl Strategy<Value = String> {
    let keys: Vec<String> = allowlist::all()
        .iter()
        .flat_map(|list| list.iter())
        .map(str::to_string)
        .collect();
    prop::sample::select(keys)
}

fn key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => allowlisted_key_strategy(),
        1 => "--bf-[a-z-]{1,20}",
        1 => ".{0,20}",
    ]
}

fn value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        hex_strategy(),
        "[0-9]{1,4}(\\.[0-9]{1,2})?px",
        "[0-9]{1,4}(\\.[0-9]{1,2})?",
        ".{0,60}",
        "[;{}<>*/\"'a-z0-9 ]{0,30}",
    ]
}

// ── Color math ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn hex_round_trips_lowercased(hex in hex_strategy()) {
        let rgb = hex_to_rgb(&hex).rgb().expect("valid hex decodes");
        let channels = rgb.channels();
        prop_assert_eq!(rgb_to_hex(channels), hex.to_ascii_lowercase());
    }

    #[test]
    fn mix_hits_endpoints(a in hex_strategy(), b in hex_strategy()) {
        prop_assert_eq!(mix(&a, &b, 0.0), a.to_ascii_lowercase());
        prop_assert_eq!(mix(&a, &b, 1.0), b.to_ascii_lowercase());
    }

    #[test]
    fn mix_output_is_a_color(a in hex_strategy(), b in hex_strategy(), t in -1.0f64..2.0) {
        prop_assert!(validate_color(&mix(&a, &b, t)));
        prop_assert!(validate_color(&tint(&a, t)));
        prop_assert!(validate_color(&shade(&a, t)));
    }

    #[test]
    fn tint_and_shade_move_monotonically(hex in hex_strategy(), t in 0.0f64..1.0) {
        let base = hex_to_rgb(&hex).rgb().expect("valid hex decodes");
        let lighter = hex_to_rgb(&tint(&hex, t)).rgb().expect("tint decodes");
        let darker = hex_to_rgb(&shade(&hex, t)).rgb().expect("shade decodes");
        prop_assert!(lighter.r >= base.r && lighter.g >= base.g && lighter.b >= base.b);
        prop_assert!(darker.r <= base.r && darker.g <= base.g && darker.b <= base.b);
    }

    #[test]
    fn mix_moves_monotonically_toward_target(
        a in hex_strategy(),
        b in hex_strategy(),
        t1 in 0.0f64..=1.0,
        t2 in 0.0f64..=1.0,
    ) {
        let (t1, t2) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
        let near = hex_to_rgb(&mix(&a, &b, t1)).rgb().expect("mix decodes");
        let far = hex_to_rgb(&mix(&a, &b, t2)).rgb().expect("mix decodes");
        let target = hex_to_rgb(&b).rgb().expect("valid hex decodes");
        for ((n, f), t) in [(near.r, far.r), (near.g, far.g), (near.b, far.b)]
            .into_iter()
            .zip([target.r, target.g, target.b])
        {
            let (lo, hi) = (n.min(t), n.max(t));
            prop_assert!(lo <= f && f <= hi, "{} not between {} and {}", f, n, t);
        }
    }

    #[test]
    fn rgba_is_always_a_color(input in ".{0,12}", alpha in -5.0f64..5.0) {
        prop_assert!(validate_color(&rgba(&input, alpha)));
    }

    #[test]
    fn mix_never_panics_on_garbage(a in ".{0,12}", b in ".{0,12}", t in any::<f64>()) {
        let _ = mix(&a, &b, t);
    }
}

// ── Sanitizer ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn sanitized_output_is_safe(
        entries in prop::collection::btree_map(key_strategy(), value_strategy(), 0..40)
    ) {
        let candidates: CssVarMap = entries;
        let lists = allowlist::all();
        let safe = sanitize_css_vars(&candidates, &lists);

        prop_assert!(safe.len() <= candidates.len());
        for (key, value) in safe.iter() {
            prop_assert!(lists.iter().any(|list| list.contains(key)));
            let has_block_syntax = value.contains([';', '{', '}']);
            prop_assert!(!has_block_syntax, "{} = {:?}", key, value);
            let has_markup = value.contains(['<', '>']) || value.contains("/*");
            prop_assert!(!has_markup, "{} = {:?}", key, value);
            prop_assert_eq!(value, value.trim());
            let category = classify(key).expect("emitted keys are classified");
            prop_assert!(category.accepts(value));
        }
    }

    #[test]
    fn sanitizing_twice_changes_nothing(
        entries in prop::collection::btree_map(allowlisted_key_strategy(), value_strategy(), 0..40)
    ) {
        let lists = allowlist::all();
        let once = sanitize_css_vars(&entries, &lists);
        let twice = sanitize_css_vars(&once.clone().into_inner(), &lists);
        prop_assert_eq!(once, twice);
    }
}

// ── Resolution ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn resolution_emits_only_valid_values(
        primary in value_strategy(),
        surface in value_strategy(),
        radius in value_strategy(),
        intensity in prop_oneof![Just("soft"), Just("medium"), Just("strong"), Just("???")],
    ) {
        let schema = ThemeSchema::from_value(json!({
            "editable": {
                "colors": { "primary": primary, "surface": surface },
                "radius": { "card": radius },
                "buttons": { "glow": { "intensity": intensity } }
            }
        }));
        let theme = resolve_theme(&schema);
        for (key, value) in theme.css_vars.iter() {
            let category = classify(key).expect("emitted keys are classified");
            prop_assert!(category.accepts(value), "{} = {:?}", key, value);
        }
        prop_assert_eq!(resolve_theme(&schema), theme);
    }
}
