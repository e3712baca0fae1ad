use chrono::{DateTime, Utc};
use uuid::Uuid;

use hamdel_domain::content::ContentCategory;
use hamdel_domain::mood::Mood;
use hamdel_domain::room::RoomKind;

/// Room and challenge titles share one length cap.
pub const TITLE_MAX_CHARS: usize = 100;
/// Message body length cap, counted in characters after trimming.
pub const MESSAGE_MAX_CHARS: usize = 1000;
pub const MAX_MEMBERS_MIN: i32 = 1;
pub const MAX_MEMBERS_MAX: i32 = 1000;
pub const DEFAULT_MAX_MEMBERS: i32 = 100;
pub const DEFAULT_LANGUAGE: &str = "fa";

/// Caller identity resolved by the bearer gate. Mirrors the auth service's
/// user record at request time.
#[derive(Debug, Clone)]
pub struct GateUser {
    pub id: Uuid,
    pub username: String,
    pub phone: String,
    pub is_banned: bool,
    pub is_admin: bool,
}

/// Discussion room.
#[derive(Debug, Clone)]
pub struct Room {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub kind: RoomKind,
    pub language: String,
    pub max_members: i32,
    pub creator_id: Uuid,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Time-boxed challenge posted in a room.
#[derive(Debug, Clone)]
pub struct Challenge {
    pub id: Uuid,
    pub room_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub media_url: Option<String>,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Challenge {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// Chat message with its likers.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: Uuid,
    pub challenge_id: Option<Uuid>,
    pub user_id: Uuid,
    pub content: String,
    pub is_reply: bool,
    pub parent_id: Option<Uuid>,
    pub is_rebuke: bool,
    pub is_back: bool,
    pub is_edited: bool,
    pub is_reported: bool,
    pub is_deleted: bool,
    pub likes: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// One user's answer to a challenge.
#[derive(Debug, Clone)]
pub struct ChallengeResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub challenge_id: Uuid,
    pub answered_at: DateTime<Utc>,
}

/// A mood the user reported.
#[derive(Debug, Clone)]
pub struct UserMood {
    pub id: Uuid,
    pub user_id: Uuid,
    pub mood: Mood,
    pub created_at: DateTime<Utc>,
}

/// Relaxation content item with its mood tags.
#[derive(Debug, Clone)]
pub struct Content {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category: ContentCategory,
    pub mood_tags: Vec<Mood>,
    pub media_url: Option<String>,
    pub is_popular: bool,
    pub created_at: DateTime<Utc>,
}

/// Normalize a room language code: trimmed, lowercased, "fa" when absent
/// or blank.
pub fn normalize_language(raw: Option<&str>) -> String {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(lang) => lang.to_lowercase(),
        None => DEFAULT_LANGUAGE.to_owned(),
    }
}
