//! Mood domain types.

use serde::{Deserialize, Serialize};

/// A user-reported mood.
///
/// Wire and storage format: lowercase string (`"happy"`, `"sad"`, ...).
/// Content items are tagged with the moods they suit (see
/// [`crate::content::ContentCategory`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    Stressed,
    Relaxed,
    Neutral,
}

impl Mood {
    pub const ALL: [Mood; 6] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Angry,
        Mood::Stressed,
        Mood::Relaxed,
        Mood::Neutral,
    ];

    /// Parse from the stored string. Returns `None` for unknown values.
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "happy" => Some(Self::Happy),
            "sad" => Some(Self::Sad),
            "angry" => Some(Self::Angry),
            "stressed" => Some(Self::Stressed),
            "relaxed" => Some(Self::Relaxed),
            "neutral" => Some(Self::Neutral),
            _ => None,
        }
    }

    /// The stored string form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Angry => "angry",
            Self::Stressed => "stressed",
            Self::Relaxed => "relaxed",
            Self::Neutral => "neutral",
        }
    }
}
