//! Brand color tokens.

use serde::{Deserialize, Serialize};

use super::{tok, Token};

/// Brand palette. Each slot is a hex color or a reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorTokens {
    pub primary: Option<Token>,
    pub accent: Option<Token>,
    pub background: Option<Token>,
    pub surface: Option<Token>,
    pub text: Option<Token>,
    pub muted_text: Option<Token>,
    pub border: Option<Token>,
}

impl Default for ColorTokens {
    fn default() -> Self {
        Self {
            primary: tok("#2563eb"),
            accent: tok("#22c55e"),
            background: tok("#020617"),
            surface: tok("#0f172a"),
            text: tok("#e5e7eb"),
            muted_text: tok("#94a3b8"),
            border: tok("#1f2937"),
        }
    }
}
