//! Button chrome, interaction states and glow.

use serde::{Deserialize, Serialize};

use super::lenient::lenient_group;
use super::{tok, Token};

/// Button configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonTokens {
    pub padding_x: Option<Token>,
    pub padding_y: Option<Token>,
    pub font_weight: Option<Token>,
    #[serde(deserialize_with = "lenient_group")]
    pub primary: ButtonPrimaryTokens,
    #[serde(deserialize_with = "lenient_group")]
    pub active: ButtonActiveTokens,
    #[serde(deserialize_with = "lenient_group")]
    pub disabled: ButtonDisabledTokens,
    #[serde(deserialize_with = "lenient_group")]
    pub focus: ButtonFocusTokens,
    #[serde(deserialize_with = "lenient_group")]
    pub glow: GlowTokens,
}

impl Default for ButtonTokens {
    fn default() -> Self {
        Self {
            padding_x: tok("18"),
            padding_y: tok("10"),
            font_weight: tok("600"),
            primary: ButtonPrimaryTokens::default(),
            active: ButtonActiveTokens::default(),
            disabled: ButtonDisabledTokens::default(),
            focus: ButtonFocusTokens::default(),
            glow: GlowTokens::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonPrimaryTokens {
    pub bg: Option<Token>,
    pub text: Option<Token>,
    pub border: Option<Token>,
    pub hover_bg: Option<Token>,
}

impl Default for ButtonPrimaryTokens {
    fn default() -> Self {
        Self {
            bg: tok("{colors.primary}"),
            text: tok("#ffffff"),
            border: tok("{colors.primary}"),
            hover_bg: tok("{derived.primaryShade}"),
        }
    }
}

/// Pressed / selected button state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonActiveTokens {
    pub bg: Option<Token>,
    pub text: Option<Token>,
    pub border: Option<Token>,
}

impl Default for ButtonActiveTokens {
    fn default() -> Self {
        Self {
            bg: tok("{derived.primaryShade}"),
            text: tok("#ffffff"),
            border: tok("{derived.primaryShade}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonDisabledTokens {
    pub bg: Option<Token>,
    pub text: Option<Token>,
}

impl Default for ButtonDisabledTokens {
    fn default() -> Self {
        Self {
            bg: tok("#9ca3af"),
            text: tok("{colors.mutedText}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonFocusTokens {
    /// Focus ring color.
    pub ring: Option<Token>,
}

impl Default for ButtonFocusTokens {
    fn default() -> Self {
        Self {
            ring: tok("{derived.primaryTint}"),
        }
    }
}

/// Glow around primary buttons and selected pills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GlowTokens {
    pub enabled: Option<Token>,
    /// `primary` or `accent`.
    pub source: Option<Token>,
    /// `soft`, `medium` or `strong`.
    pub intensity: Option<Token>,
    /// `tight`, `medium` or `wide`.
    pub spread: Option<Token>,
}

impl Default for GlowTokens {
    fn default() -> Self {
        Self {
            enabled: tok("true"),
            source: tok("primary"),
            intensity: tok("medium"),
            spread: tok("medium"),
        }
    }
}
