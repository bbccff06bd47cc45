//! Navigation bar, date/slot pills and form input tokens.

use serde::{Deserialize, Serialize};

use super::{tok, Token};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavTokens {
    pub bg: Option<Token>,
    pub text: Option<Token>,
    pub active_bg: Option<Token>,
    pub active_text: Option<Token>,
    pub height: Option<Token>,
    pub blur: Option<Token>,
    /// Full `backdrop-filter` value.
    pub filter: Option<Token>,
}

impl Default for NavTokens {
    fn default() -> Self {
        Self {
            bg: tok("{colors.surface}"),
            text: tok("{colors.text}"),
            active_bg: tok("{derived.surfaceRaised}"),
            active_text: tok("{colors.primary}"),
            height: tok("56"),
            blur: tok("12"),
            filter: tok("blur(12px) saturate(1.4)"),
        }
    }
}

/// Date and time-slot pills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PillTokens {
    pub bg: Option<Token>,
    pub text: Option<Token>,
    pub border: Option<Token>,
    pub selected_bg: Option<Token>,
    pub selected_text: Option<Token>,
    pub selected_border: Option<Token>,
    pub selected_shadow: Option<Token>,
    pub padding_x: Option<Token>,
    pub gap: Option<Token>,
}

impl Default for PillTokens {
    fn default() -> Self {
        Self {
            bg: tok("{derived.surfaceRaised}"),
            text: tok("{colors.text}"),
            border: tok("{derived.borderSubtle}"),
            selected_bg: tok("{colors.primary}"),
            selected_text: tok("#ffffff"),
            selected_border: tok("{derived.primaryTint}"),
            selected_shadow: tok("{derived.glowShadow}"),
            padding_x: tok("14"),
            gap: tok("8"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InputTokens {
    pub bg: Option<Token>,
    pub text: Option<Token>,
    pub border: Option<Token>,
    pub focus_border: Option<Token>,
    pub placeholder: Option<Token>,
    pub height: Option<Token>,
    pub padding_x: Option<Token>,
    /// Right padding, leaves room for trailing icons.
    pub padding_right: Option<Token>,
}

impl Default for InputTokens {
    fn default() -> Self {
        Self {
            bg: tok("{derived.surfaceRaised}"),
            text: tok("{colors.text}"),
            border: tok("{colors.border}"),
            focus_border: tok("{colors.primary}"),
            placeholder: tok("{colors.mutedText}"),
            height: tok("44"),
            padding_x: tok("12"),
            padding_right: tok("36"),
        }
    }
}
