//! Booking card layout tokens.

use serde::{Deserialize, Serialize};

use super::{tok, Token};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BookingUiTokens {
    pub card_padding: Option<Token>,
    pub section_gap: Option<Token>,
    pub summary_margin_top: Option<Token>,
    pub summary_margin_bottom: Option<Token>,
    pub label_weight: Option<Token>,
    pub value_weight: Option<Token>,
    /// Date picker size multiplier (valid range: 0.8-1.2).
    pub date_scale: Option<Token>,
    /// Frosted card surface on/off.
    pub glass: Option<Token>,
    /// `background` value used when `glass` is on.
    pub glass_surface: Option<Token>,
}

impl Default for BookingUiTokens {
    fn default() -> Self {
        Self {
            card_padding: tok("24"),
            section_gap: tok("16"),
            summary_margin_top: tok("16"),
            summary_margin_bottom: tok("8"),
            label_weight: tok("500"),
            value_weight: tok("600"),
            date_scale: tok("1"),
            glass: tok("false"),
            glass_surface: tok(
                "linear-gradient(135deg, rgba(255, 255, 255, 0.08), rgba(255, 255, 255, 0.02))",
            ),
        }
    }
}
