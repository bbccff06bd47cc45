//! Status message colors (success, warning, error, info).

use serde::{Deserialize, Serialize};

use super::lenient::lenient_group;
use super::{tok, Token};

/// The four status kinds, in output order.
pub const STATUS_KINDS: [StatusKind; 4] = [
    StatusKind::Success,
    StatusKind::Warning,
    StatusKind::Error,
    StatusKind::Info,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    Success,
    Warning,
    Error,
    Info,
}

impl StatusKind {
    pub fn name(self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Warning => "warning",
            StatusKind::Error => "error",
            StatusKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusTokens {
    #[serde(deserialize_with = "lenient_group")]
    pub success: StatusColorTokens,
    #[serde(deserialize_with = "lenient_group")]
    pub warning: StatusColorTokens,
    #[serde(deserialize_with = "lenient_group")]
    pub error: StatusColorTokens,
    #[serde(deserialize_with = "lenient_group")]
    pub info: StatusColorTokens,
}

impl StatusTokens {
    pub fn get(&self, kind: StatusKind) -> &StatusColorTokens {
        match kind {
            StatusKind::Success => &self.success,
            StatusKind::Warning => &self.warning,
            StatusKind::Error => &self.error,
            StatusKind::Info => &self.info,
        }
    }
}

impl Default for StatusTokens {
    fn default() -> Self {
        Self {
            success: StatusColorTokens::derived_for(StatusKind::Success),
            warning: StatusColorTokens::derived_for(StatusKind::Warning),
            error: StatusColorTokens::derived_for(StatusKind::Error),
            info: StatusColorTokens::derived_for(StatusKind::Info),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusColorTokens {
    pub bg: Option<Token>,
    pub text: Option<Token>,
    pub border: Option<Token>,
}

impl StatusColorTokens {
    /// Tokens pointing at the fixed-hue derived triple for `kind`.
    fn derived_for(kind: StatusKind) -> Self {
        let name = kind.name();
        Self {
            bg: tok(&format!("{{derived.status.{name}.soft}}")),
            text: tok(&format!("{{derived.status.{name}.text}}")),
            border: tok(&format!("{{derived.status.{name}.border}}")),
        }
    }
}
