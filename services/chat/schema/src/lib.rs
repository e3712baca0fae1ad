//! sea-orm entities for the chat service's Postgres schema.
//!
//! User ids in these tables refer to accounts owned by the auth service;
//! they are plain UUID columns, never foreign keys.

pub mod challenge_responses;
pub mod challenges;
pub mod content_mood_tags;
pub mod contents;
pub mod message_likes;
pub mod messages;
pub mod rooms;
pub mod user_moods;
