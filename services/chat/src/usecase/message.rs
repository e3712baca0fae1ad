//! Message posting, listing, likes, and reporting.

use chrono::Utc;
use uuid::Uuid;

use hamdel_domain::pagination::PageRequest;

use crate::domain::repository::{ChallengeRepository, MessageRepository};
use crate::domain::types::{MESSAGE_MAX_CHARS, Message};
use crate::error::ChatServiceError;

// ── ListMessages ─────────────────────────────────────────────────────────────

pub struct ListMessagesUseCase<M: MessageRepository> {
    pub repo: M,
}

impl<M: MessageRepository> ListMessagesUseCase<M> {
    /// Newest first, optionally narrowed to one challenge. Likes come
    /// loaded on every message.
    pub async fn execute(
        &self,
        challenge_id: Option<Uuid>,
        page: PageRequest,
    ) -> Result<Vec<Message>, ChatServiceError> {
        self.repo.list(challenge_id, page).await
    }
}

// ── CreateMessage ────────────────────────────────────────────────────────────

pub struct CreateMessageInput {
    pub challenge_id: Option<Uuid>,
    pub content: String,
    pub is_reply: bool,
    pub parent_id: Option<Uuid>,
    pub is_rebuke: bool,
    pub is_back: bool,
}

pub struct CreateMessageUseCase<M: MessageRepository, C: ChallengeRepository> {
    pub message_repo: M,
    pub challenge_repo: C,
}

impl<M: MessageRepository, C: ChallengeRepository> CreateMessageUseCase<M, C> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: CreateMessageInput,
    ) -> Result<Message, ChatServiceError> {
        // 1. Body: trimmed, required, capped in characters.
        let content = input.content.trim();
        if content.is_empty() {
            return Err(ChatServiceError::MissingData);
        }
        if content.chars().count() > MESSAGE_MAX_CHARS {
            return Err(ChatServiceError::InvalidContent);
        }

        // 2. A challenge binding must point at a live challenge.
        if let Some(challenge_id) = input.challenge_id {
            self.challenge_repo
                .find_by_id(challenge_id)
                .await?
                .ok_or(ChatServiceError::InvalidChallenge)?;
        }

        // 3. Replies need a parent that exists and is still visible. The
        //    parent reference is dropped entirely on non-replies.
        let parent_id = if input.is_reply {
            let parent_id = input.parent_id.ok_or(ChatServiceError::MissingData)?;
            let parent = self
                .message_repo
                .find_by_id(parent_id)
                .await?
                .ok_or(ChatServiceError::InvalidParentMessage)?;
            if parent.is_deleted {
                return Err(ChatServiceError::InvalidParentMessage);
            }
            Some(parent_id)
        } else {
            None
        };

        let message = Message {
            id: Uuid::now_v7(),
            challenge_id: input.challenge_id,
            user_id,
            content: content.to_owned(),
            is_reply: input.is_reply,
            parent_id,
            is_rebuke: input.is_rebuke,
            is_back: input.is_back,
            is_edited: false,
            is_reported: false,
            is_deleted: false,
            likes: vec![],
            created_at: Utc::now(),
        };
        self.message_repo.create(&message).await?;

        Ok(message)
    }
}

// ── LikeMessage / UnlikeMessage ──────────────────────────────────────────────

pub struct LikeMessageUseCase<M: MessageRepository> {
    pub repo: M,
}

impl<M: MessageRepository> LikeMessageUseCase<M> {
    /// Record the caller's like and return the refreshed message. Liking
    /// twice changes nothing.
    pub async fn execute(
        &self,
        message_id: Uuid,
        user_id: Uuid,
    ) -> Result<Message, ChatServiceError> {
        // Existence first, so a missing message 404s instead of tripping
        // the like table's foreign key.
        self.repo
            .find_by_id(message_id)
            .await?
            .ok_or(ChatServiceError::MessageNotFound)?;
        self.repo.add_like(message_id, user_id).await?;
        self.repo
            .find_by_id(message_id)
            .await?
            .ok_or(ChatServiceError::MessageNotFound)
    }
}

pub struct UnlikeMessageUseCase<M: MessageRepository> {
    pub repo: M,
}

impl<M: MessageRepository> UnlikeMessageUseCase<M> {
    /// Remove the caller's like if present and return the refreshed message.
    pub async fn execute(
        &self,
        message_id: Uuid,
        user_id: Uuid,
    ) -> Result<Message, ChatServiceError> {
        self.repo
            .find_by_id(message_id)
            .await?
            .ok_or(ChatServiceError::MessageNotFound)?;
        self.repo.remove_like(message_id, user_id).await?;
        self.repo
            .find_by_id(message_id)
            .await?
            .ok_or(ChatServiceError::MessageNotFound)
    }
}

// ── ReportMessage ────────────────────────────────────────────────────────────

pub struct ReportMessageUseCase<M: MessageRepository> {
    pub repo: M,
}

impl<M: MessageRepository> ReportMessageUseCase<M> {
    pub async fn execute(&self, message_id: Uuid) -> Result<(), ChatServiceError> {
        if !self.repo.mark_reported(message_id).await? {
            return Err(ChatServiceError::MessageNotFound);
        }
        Ok(())
    }
}
