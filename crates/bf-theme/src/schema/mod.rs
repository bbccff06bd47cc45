//! Theme schema types.
//!
//! All groups use `serde(default)` so partial tenant documents work, and
//! every group field tolerates a wrong JSON type by falling back to its
//! defaults. Leaves are [`Token`]s: a literal or a `{path}` reference.

mod booking_ui;
mod buttons;
mod colors;
mod components;
mod lenient;
mod status;
mod token;
mod typography;

pub use booking_ui::*;
pub use buttons::*;
pub use colors::*;
pub use components::*;
pub use status::*;
pub use token::{RefPath, Token};
pub use typography::*;
pub(crate) use token::tok;

use lenient::{from_value_or_default, lenient_group};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Current theme schema version.
pub const THEME_SCHEMA_VERSION: u32 = 1;

/// Root tenant theme document.
///
/// Owned by the tenant and replaced wholesale by the external editor.
/// Resolution only ever reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSchema {
    #[serde(deserialize_with = "lenient_version")]
    pub version: u32,
    #[serde(deserialize_with = "lenient_group")]
    pub editable: EditableTokens,
    #[serde(deserialize_with = "lenient_group")]
    pub locked: LockedTokens,
}

impl Default for ThemeSchema {
    fn default() -> Self {
        Self {
            version: THEME_SCHEMA_VERSION,
            editable: EditableTokens::default(),
            locked: LockedTokens::default(),
        }
    }
}

impl ThemeSchema {
    /// Build a schema from an arbitrary JSON document. Never fails.
    ///
    /// `null` and non-object documents yield the default schema.
    pub fn from_value(value: Value) -> Self {
        if !value.is_object() && !value.is_null() {
            tracing::warn!("theme schema document is not an object, using defaults");
            return Self::default();
        }
        from_value_or_default(value)
    }
}

/// Tenant-editable token groups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditableTokens {
    #[serde(deserialize_with = "lenient_group")]
    pub colors: ColorTokens,
    #[serde(deserialize_with = "lenient_group")]
    pub typography: TypographyTokens,
    #[serde(deserialize_with = "lenient_group")]
    pub radius: RadiusTokens,
    #[serde(deserialize_with = "lenient_group")]
    pub shadow: ShadowTokens,
    #[serde(deserialize_with = "lenient_group")]
    pub buttons: ButtonTokens,
    #[serde(deserialize_with = "lenient_group")]
    pub nav: NavTokens,
    #[serde(deserialize_with = "lenient_group")]
    pub pills: PillTokens,
    #[serde(deserialize_with = "lenient_group")]
    pub inputs: InputTokens,
    #[serde(deserialize_with = "lenient_group")]
    pub status: StatusTokens,
    #[serde(rename = "bookingUI", deserialize_with = "lenient_group")]
    pub booking_ui: BookingUiTokens,
}

/// Settings the tenant cannot change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LockedTokens {
    #[serde(deserialize_with = "lenient_group")]
    pub safety: SafetyTokens,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SafetyTokens {
    /// Advisory only; contrast is never enforced.
    #[serde(rename = "minContrastAA", deserialize_with = "lenient_flag")]
    pub min_contrast_aa: bool,
}

impl Default for SafetyTokens {
    fn default() -> Self {
        Self {
            min_contrast_aa: true,
        }
    }
}

fn lenient_version<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_u64()
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(THEME_SCHEMA_VERSION))
}

fn lenient_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_bool()
        .unwrap_or_else(|| SafetyTokens::default().min_contrast_aa))
}

// =============================================================================
// Tests
// =============================================================================
