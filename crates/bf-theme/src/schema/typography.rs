//! Typography, corner radius and elevation tokens.

use serde::{Deserialize, Serialize};

use super::{tok, Token};

/// Typography configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypographyTokens {
    pub font_family: Option<Token>,
    /// Body font size in px.
    pub base_size: Option<Token>,
    /// Heading font size in px.
    pub heading_size: Option<Token>,
    /// Valid range: 100-900.
    pub body_weight: Option<Token>,
    /// Valid range: 100-900.
    pub heading_weight: Option<Token>,
    /// Global type multiplier (valid range: 0.8-1.2).
    pub scale: Option<Token>,
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self {
            font_family: tok("Inter, system-ui, sans-serif"),
            base_size: tok("15"),
            heading_size: tok("20"),
            body_weight: tok("400"),
            heading_weight: tok("600"),
            scale: tok("1"),
        }
    }
}

/// Corner radii in px.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RadiusTokens {
    pub card: Option<Token>,
    pub button: Option<Token>,
    pub input: Option<Token>,
    pub pill: Option<Token>,
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self {
            card: tok("16"),
            button: tok("10"),
            input: tok("10"),
            pill: tok("999"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShadowTokens {
    /// Full `box-shadow` value for cards.
    pub card: Option<Token>,
}

impl Default for ShadowTokens {
    fn default() -> Self {
        Self {
            card: tok("0 10px 30px rgba(2, 6, 23, 0.45)"),
        }
    }
}
