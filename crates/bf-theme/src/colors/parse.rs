//! CSS color syntax checks.
//!
//! Only the forms a stylesheet value may safely take are accepted:
//! `#rgb`, `#rrggbb`, `rgb(r, g, b)` and `rgba(r, g, b, a)`.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for hex color: #RGB or #RRGGBB.
pub(crate) static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

/// Regex for rgb()/rgba() with an optional alpha component.
pub(crate) static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*(\d*\.?\d+)\s*)?\)$",
    )
    .unwrap()
});

/// Check an `rgb()`/`rgba()` call: channels 0-255, alpha 0-1.
pub(super) fn is_rgb_call(s: &str) -> bool {
    let Some(caps) = RGB_RE.captures(s) else {
        return false;
    };
    let channels_ok = (1..=3).all(|i| caps[i].parse::<u16>().is_ok_and(|c| c <= 255));
    let alpha_ok = caps
        .get(4)
        .map_or(true, |a| a.as_str().parse::<f64>().is_ok_and(|a| (0.0..=1.0).contains(&a)));
    channels_ok && alpha_ok
}
