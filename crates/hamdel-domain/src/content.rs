//! Relaxation content domain types.

use serde::{Deserialize, Serialize};

/// Category of a relaxation content item.
///
/// `Chatbot` is plain data here; the conversational surface behind it lives
/// outside this workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentCategory {
    Meditation,
    Music,
    Story,
    Chatbot,
}

impl ContentCategory {
    /// Parse from the stored string. Returns `None` for unknown values.
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "meditation" => Some(Self::Meditation),
            "music" => Some(Self::Music),
            "story" => Some(Self::Story),
            "chatbot" => Some(Self::Chatbot),
            _ => None,
        }
    }

    /// The stored string form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Meditation => "meditation",
            Self::Music => "music",
            Self::Story => "story",
            Self::Chatbot => "chatbot",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_known_categories() {
        assert_eq!(
            ContentCategory::from_str_opt("meditation"),
            Some(ContentCategory::Meditation)
        );
        assert_eq!(
            ContentCategory::from_str_opt("chatbot"),
            Some(ContentCategory::Chatbot)
        );
    }

    #[test]
    fn should_reject_unknown_category() {
        assert_eq!(ContentCategory::from_str_opt("podcast"), None);
        assert_eq!(ContentCategory::from_str_opt("Music"), None);
    }

    #[test]
    fn should_serialize_category_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&ContentCategory::Story).unwrap(),
            "\"story\""
        );
        let parsed: ContentCategory = serde_json::from_str("\"music\"").unwrap();
        assert_eq!(parsed, ContentCategory::Music);
    }
}
