//! Room domain types.

use serde::{Deserialize, Serialize};

/// Audience category of a community room.
///
/// Wire and storage format: lowercase string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomKind {
    Daily,
    Teens,
    Mothers,
}

impl RoomKind {
    /// Parse from the stored string. Returns `None` for unknown values.
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "daily" => Some(Self::Daily),
            "teens" => Some(Self::Teens),
            "mothers" => Some(Self::Mothers),
            _ => None,
        }
    }

    /// The stored string form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Teens => "teens",
            Self::Mothers => "mothers",
        }
    }
}
