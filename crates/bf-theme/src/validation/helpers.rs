//! Shared token checks used by the domain validators.

use crate::colors::validate_color;
use crate::schema::Token;

/// Literal text of a present token. References and absent slots yield `None`.
fn literal(token: Option<&Token>) -> Option<&str> {
    token.and_then(Token::as_literal)
}

/// Push an error if a literal color slot is not a safe CSS color.
pub(crate) fn validate_color_slot(errors: &mut Vec<String>, name: &str, token: Option<&Token>) {
    if let Some(value) = literal(token) {
        if !validate_color(value) {
            errors.push(format!("{name} = {value:?} is not a valid color"));
        }
    }
}

/// Push an error if a literal slot is not an integer in `[min, max]`.
pub(crate) fn validate_range(
    errors: &mut Vec<String>,
    name: &str,
    token: Option<&Token>,
    min: u32,
    max: u32,
) {
    let Some(value) = literal(token) else {
        return;
    };
    match value.trim().parse::<u32>() {
        Ok(v) if (min..=max).contains(&v) => {}
        Ok(v) => errors.push(format!("{name} = {v} is out of range [{min}, {max}]")),
        Err(_) => errors.push(format!("{name} = {value:?} is not an integer")),
    }
}

/// Push an error if a literal slot is not a number in `[min, max]`.
pub(crate) fn validate_range_f64(
    errors: &mut Vec<String>,
    name: &str,
    token: Option<&Token>,
    min: f64,
    max: f64,
) {
    let Some(value) = literal(token) else {
        return;
    };
    match value.trim().parse::<f64>() {
        Ok(v) if (min..=max).contains(&v) => {}
        Ok(v) => errors.push(format!("{name} = {v} is out of range [{min}, {max}]")),
        Err(_) => errors.push(format!("{name} = {value:?} is not a number")),
    }
}

/// Push an error if a literal slot is not one of `allowed` (case-insensitive).
pub(crate) fn validate_one_of(
    errors: &mut Vec<String>,
    name: &str,
    token: Option<&Token>,
    allowed: &[&str],
) {
    if let Some(value) = literal(token) {
        let normalized = value.trim().to_ascii_lowercase();
        if !allowed.contains(&normalized.as_str()) {
            errors.push(format!(
                "{name} = {value:?} must be one of: {}",
                allowed.join(", ")
            ));
        }
    }
}
