#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};
use uuid::Uuid;

use hamdel_domain::mood::Mood;
use hamdel_domain::pagination::PageRequest;

use crate::domain::types::{
    Challenge, ChallengeResponse, Content, GateUser, Message, Room, UserMood,
};
use crate::error::ChatServiceError;

/// Repository for discussion rooms.
pub trait RoomRepository: Send + Sync {
    /// Active rooms only, newest first.
    async fn list_active(&self, page: PageRequest) -> Result<Vec<Room>, ChatServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Room>, ChatServiceError>;
    async fn create(&self, room: &Room) -> Result<(), ChatServiceError>;
    /// Hard delete; challenges and their messages/responses cascade.
    /// Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, ChatServiceError>;
}

/// Repository for challenges. List results carry the owning room so
/// callers can embed a room summary without a second lookup.
pub trait ChallengeRepository: Send + Sync {
    async fn list(
        &self,
        room_id: Option<Uuid>,
        page: PageRequest,
    ) -> Result<Vec<(Challenge, Room)>, ChatServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Challenge>, ChatServiceError>;
    async fn create(&self, challenge: &Challenge) -> Result<(), ChatServiceError>;
    /// Remove challenges past their expiry. Returns the number removed.
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, ChatServiceError>;
}

/// Repository for messages and their likes.
pub trait MessageRepository: Send + Sync {
    async fn list(
        &self,
        challenge_id: Option<Uuid>,
        page: PageRequest,
    ) -> Result<Vec<Message>, ChatServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Message>, ChatServiceError>;
    async fn create(&self, message: &Message) -> Result<(), ChatServiceError>;
    /// Record a like. A repeat like by the same user is a no-op.
    async fn add_like(&self, message_id: Uuid, user_id: Uuid) -> Result<(), ChatServiceError>;
    /// Remove the user's like if present.
    async fn remove_like(&self, message_id: Uuid, user_id: Uuid) -> Result<(), ChatServiceError>;
    /// Flag the message as reported. Returns `true` if a row was updated.
    async fn mark_reported(&self, id: Uuid) -> Result<bool, ChatServiceError>;
}

/// Repository for challenge answers.
pub trait ChallengeResponseRepository: Send + Sync {
    /// Insert an answer. Returns `false` when the user already answered
    /// this challenge.
    async fn create(&self, response: &ChallengeResponse) -> Result<bool, ChatServiceError>;
}

/// Repository for reported moods.
pub trait UserMoodRepository: Send + Sync {
    async fn create(&self, mood: &UserMood) -> Result<(), ChatServiceError>;
    /// The user's mood history, newest first.
    async fn list_for_user(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<UserMood>, ChatServiceError>;
    async fn latest_for_user(&self, user_id: Uuid) -> Result<Option<UserMood>, ChatServiceError>;
}

/// Repository for relaxation contents.
pub trait ContentRepository: Send + Sync {
    async fn create(&self, content: &Content) -> Result<(), ChatServiceError>;
    /// Contents tagged with the mood, in random order.
    async fn list_by_mood_random(
        &self,
        mood: Mood,
        limit: u64,
    ) -> Result<Vec<Content>, ChatServiceError>;
    /// Popular contents, newest first.
    async fn list_popular(&self, limit: u64) -> Result<Vec<Content>, ChatServiceError>;
}

/// Port for resolving token subjects through the auth service.
pub trait UserPort: Send + Sync {
    async fn find_by_phone(&self, phone: &str) -> Result<Option<GateUser>, ChatServiceError>;
}
