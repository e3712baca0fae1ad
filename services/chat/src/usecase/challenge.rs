//! Challenge listing and creation.
//!
//! Expiry removal runs as an interval task in `main`; nothing here waits for
//! it. Answer submission checks `expires_at` on its own.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use hamdel_domain::pagination::PageRequest;

use crate::domain::repository::{ChallengeRepository, RoomRepository};
use crate::domain::types::{Challenge, Room, TITLE_MAX_CHARS};
use crate::error::ChatServiceError;

// ── ListChallenges ───────────────────────────────────────────────────────────

pub struct ListChallengesUseCase<C: ChallengeRepository> {
    pub repo: C,
}

impl<C: ChallengeRepository> ListChallengesUseCase<C> {
    /// Newest first, optionally narrowed to one room. Each entry carries its
    /// owning room for the embedded summary.
    pub async fn execute(
        &self,
        room_id: Option<Uuid>,
        page: PageRequest,
    ) -> Result<Vec<(Challenge, Room)>, ChatServiceError> {
        self.repo.list(room_id, page).await
    }
}

// ── CreateChallenge ──────────────────────────────────────────────────────────

pub struct CreateChallengeInput {
    pub room_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub media_url: Option<String>,
    pub expires_at: DateTime<Utc>,
}

pub struct CreateChallengeUseCase<C: ChallengeRepository, R: RoomRepository> {
    pub challenge_repo: C,
    pub room_repo: R,
}

impl<C: ChallengeRepository, R: RoomRepository> CreateChallengeUseCase<C, R> {
    pub async fn execute(
        &self,
        input: CreateChallengeInput,
    ) -> Result<(Challenge, Room), ChatServiceError> {
        // 1. Title: required, capped in characters.
        let title = input.title.trim();
        if title.is_empty() {
            return Err(ChatServiceError::MissingData);
        }
        if title.chars().count() > TITLE_MAX_CHARS {
            return Err(ChatServiceError::InvalidTitle);
        }

        // 2. The room must exist and still accept challenges.
        let room = self
            .room_repo
            .find_by_id(input.room_id)
            .await?
            .ok_or(ChatServiceError::InvalidRoom)?;
        if !room.is_active {
            return Err(ChatServiceError::RoomInactive);
        }

        // 3. A challenge born expired would be invisible to every list and
        //    unanswerable, so the expiry must lie ahead.
        if input.expires_at <= Utc::now() {
            return Err(ChatServiceError::InvalidExpiration);
        }

        let challenge = Challenge {
            id: Uuid::now_v7(),
            room_id: room.id,
            title: title.to_owned(),
            description: input
                .description
                .map(|d| d.trim().to_owned())
                .filter(|d| !d.is_empty()),
            media_url: input.media_url,
            expires_at: input.expires_at,
            created_at: Utc::now(),
        };
        self.challenge_repo.create(&challenge).await?;

        tracing::debug!(challenge_id = %challenge.id, room_id = %room.id, "challenge created");

        Ok((challenge, room))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hamdel_domain::room::RoomKind;

    struct MockChallengeRepo;

    impl ChallengeRepository for MockChallengeRepo {
        async fn list(
            &self,
            _room_id: Option<Uuid>,
            _page: PageRequest,
        ) -> Result<Vec<(Challenge, Room)>, ChatServiceError> {
            Ok(vec![])
        }
        async fn find_by_id(&self, _id: Uuid) -> Result<Option<Challenge>, ChatServiceError> {
            Ok(None)
        }
        async fn create(&self, _challenge: &Challenge) -> Result<(), ChatServiceError> {
            Ok(())
        }
        async fn delete_expired(&self, _now: DateTime<Utc>) -> Result<u64, ChatServiceError> {
            Ok(0)
        }
    }

    struct MockRoomRepo {
        room: Option<Room>,
    }

    impl RoomRepository for MockRoomRepo {
        async fn list_active(&self, _page: PageRequest) -> Result<Vec<Room>, ChatServiceError> {
            Ok(vec![])
        }
        async fn find_by_id(&self, _id: Uuid) -> Result<Option<Room>, ChatServiceError> {
            Ok(self.room.clone())
        }
        async fn create(&self, _room: &Room) -> Result<(), ChatServiceError> {
            Ok(())
        }
        async fn delete(&self, _id: Uuid) -> Result<bool, ChatServiceError> {
            Ok(false)
        }
    }

    fn active_room() -> Room {
        Room {
            id: Uuid::now_v7(),
            title: "daily check-in".to_owned(),
            description: None,
            kind: RoomKind::Daily,
            language: "fa".to_owned(),
            max_members: 100,
            creator_id: Uuid::now_v7(),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    fn input(room_id: Uuid) -> CreateChallengeInput {
        CreateChallengeInput {
            room_id,
            title: "three deep breaths".to_owned(),
            description: None,
            media_url: None,
            expires_at: Utc::now() + chrono::Duration::hours(6),
        }
    }

    #[tokio::test]
    async fn should_create_challenge_in_active_room() {
        let room = active_room();
        let uc = CreateChallengeUseCase {
            challenge_repo: MockChallengeRepo,
            room_repo: MockRoomRepo {
                room: Some(room.clone()),
            },
        };

        let (challenge, owner) = uc.execute(input(room.id)).await.unwrap();
        assert_eq!(challenge.room_id, room.id);
        assert_eq!(owner.id, room.id);
    }

    #[tokio::test]
    async fn should_reject_challenge_for_missing_room() {
        let uc = CreateChallengeUseCase {
            challenge_repo: MockChallengeRepo,
            room_repo: MockRoomRepo { room: None },
        };

        let result = uc.execute(input(Uuid::now_v7())).await;
        assert!(matches!(result, Err(ChatServiceError::InvalidRoom)));
    }

    #[tokio::test]
    async fn should_reject_challenge_for_inactive_room() {
        let mut room = active_room();
        room.is_active = false;
        let uc = CreateChallengeUseCase {
            challenge_repo: MockChallengeRepo,
            room_repo: MockRoomRepo {
                room: Some(room.clone()),
            },
        };

        let result = uc.execute(input(room.id)).await;
        assert!(matches!(result, Err(ChatServiceError::RoomInactive)));
    }

    #[tokio::test]
    async fn should_reject_expiry_in_the_past() {
        let room = active_room();
        let uc = CreateChallengeUseCase {
            challenge_repo: MockChallengeRepo,
            room_repo: MockRoomRepo {
                room: Some(room.clone()),
            },
        };

        let mut i = input(room.id);
        i.expires_at = Utc::now() - chrono::Duration::minutes(1);
        let result = uc.execute(i).await;
        assert!(matches!(result, Err(ChatServiceError::InvalidExpiration)));
    }

    #[tokio::test]
    async fn should_reject_blank_title() {
        let room = active_room();
        let uc = CreateChallengeUseCase {
            challenge_repo: MockChallengeRepo,
            room_repo: MockRoomRepo {
                room: Some(room.clone()),
            },
        };

        let mut i = input(room.id);
        i.title = "  ".to_owned();
        let result = uc.execute(i).await;
        assert!(matches!(result, Err(ChatServiceError::MissingData)));
    }
}
