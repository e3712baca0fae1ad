//! Room lifecycle: listing, creation, lookup, deletion.

use chrono::Utc;
use uuid::Uuid;

use hamdel_domain::pagination::PageRequest;
use hamdel_domain::room::RoomKind;

use crate::domain::repository::RoomRepository;
use crate::domain::types::{
    DEFAULT_MAX_MEMBERS, MAX_MEMBERS_MAX, MAX_MEMBERS_MIN, Room, TITLE_MAX_CHARS,
    normalize_language,
};
use crate::error::ChatServiceError;

// ── ListRooms ────────────────────────────────────────────────────────────────

pub struct ListRoomsUseCase<R: RoomRepository> {
    pub repo: R,
}

impl<R: RoomRepository> ListRoomsUseCase<R> {
    /// Active rooms only, newest first.
    pub async fn execute(&self, page: PageRequest) -> Result<Vec<Room>, ChatServiceError> {
        self.repo.list_active(page).await
    }
}

// ── CreateRoom ───────────────────────────────────────────────────────────────

pub struct CreateRoomInput {
    pub title: String,
    pub description: Option<String>,
    pub kind: String,
    pub language: Option<String>,
    pub max_members: Option<i32>,
}

pub struct CreateRoomUseCase<R: RoomRepository> {
    pub repo: R,
}

impl<R: RoomRepository> CreateRoomUseCase<R> {
    pub async fn execute(
        &self,
        creator_id: Uuid,
        input: CreateRoomInput,
    ) -> Result<Room, ChatServiceError> {
        // 1. Title: required, capped in characters rather than bytes.
        let title = input.title.trim();
        if title.is_empty() {
            return Err(ChatServiceError::MissingData);
        }
        if title.chars().count() > TITLE_MAX_CHARS {
            return Err(ChatServiceError::InvalidTitle);
        }

        // 2. Kind: closed set.
        let kind = input.kind.trim();
        if kind.is_empty() {
            return Err(ChatServiceError::MissingData);
        }
        let kind = RoomKind::from_str_opt(kind).ok_or(ChatServiceError::InvalidRoomKind)?;

        // 3. Capacity: bounded, defaulted when absent.
        let max_members = input.max_members.unwrap_or(DEFAULT_MAX_MEMBERS);
        if !(MAX_MEMBERS_MIN..=MAX_MEMBERS_MAX).contains(&max_members) {
            return Err(ChatServiceError::InvalidMaxMembers);
        }

        let room = Room {
            id: Uuid::now_v7(),
            title: title.to_owned(),
            description: input
                .description
                .map(|d| d.trim().to_owned())
                .filter(|d| !d.is_empty()),
            kind,
            language: normalize_language(input.language.as_deref()),
            max_members,
            creator_id,
            is_active: true,
            created_at: Utc::now(),
        };
        self.repo.create(&room).await?;

        tracing::debug!(room_id = %room.id, kind = kind.as_str(), "room created");

        Ok(room)
    }
}

// ── GetRoom ──────────────────────────────────────────────────────────────────

pub struct GetRoomUseCase<R: RoomRepository> {
    pub repo: R,
}

impl<R: RoomRepository> GetRoomUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<Room, ChatServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ChatServiceError::RoomNotFound)
    }
}

// ── DeleteRoom ───────────────────────────────────────────────────────────────

/// Hard delete. Creator checks happen at the handler, after the room has
/// been fetched, so an absent room stays a 404 rather than a 403.
pub struct DeleteRoomUseCase<R: RoomRepository> {
    pub repo: R,
}

impl<R: RoomRepository> DeleteRoomUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), ChatServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ChatServiceError::RoomNotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockRoomRepo {
        room: Option<Room>,
        delete_returns: bool,
    }

    impl RoomRepository for MockRoomRepo {
        async fn list_active(&self, _page: PageRequest) -> Result<Vec<Room>, ChatServiceError> {
            Ok(self.room.clone().into_iter().collect())
        }
        async fn find_by_id(&self, _id: Uuid) -> Result<Option<Room>, ChatServiceError> {
            Ok(self.room.clone())
        }
        async fn create(&self, _room: &Room) -> Result<(), ChatServiceError> {
            Ok(())
        }
        async fn delete(&self, _id: Uuid) -> Result<bool, ChatServiceError> {
            Ok(self.delete_returns)
        }
    }

    fn input(title: &str, kind: &str) -> CreateRoomInput {
        CreateRoomInput {
            title: title.to_owned(),
            description: None,
            kind: kind.to_owned(),
            language: None,
            max_members: None,
        }
    }

    #[tokio::test]
    async fn should_create_room_with_defaults() {
        let uc = CreateRoomUseCase {
            repo: MockRoomRepo {
                room: None,
                delete_returns: false,
            },
        };
        let creator = Uuid::now_v7();

        let room = uc.execute(creator, input("  Morning check-in  ", "daily")).await.unwrap();
        assert_eq!(room.title, "Morning check-in");
        assert_eq!(room.kind, RoomKind::Daily);
        assert_eq!(room.language, "fa");
        assert_eq!(room.max_members, 100);
        assert_eq!(room.creator_id, creator);
        assert!(room.is_active);
    }

    #[tokio::test]
    async fn should_reject_blank_title() {
        let uc = CreateRoomUseCase {
            repo: MockRoomRepo {
                room: None,
                delete_returns: false,
            },
        };
        let result = uc.execute(Uuid::now_v7(), input("   ", "daily")).await;
        assert!(matches!(result, Err(ChatServiceError::MissingData)));
    }

    #[tokio::test]
    async fn should_reject_overlong_title() {
        let uc = CreateRoomUseCase {
            repo: MockRoomRepo {
                room: None,
                delete_returns: false,
            },
        };
        let result = uc.execute(Uuid::now_v7(), input(&"x".repeat(101), "daily")).await;
        assert!(matches!(result, Err(ChatServiceError::InvalidTitle)));
    }

    #[tokio::test]
    async fn should_reject_unknown_room_kind() {
        let uc = CreateRoomUseCase {
            repo: MockRoomRepo {
                room: None,
                delete_returns: false,
            },
        };
        let result = uc.execute(Uuid::now_v7(), input("room", "adults")).await;
        assert!(matches!(result, Err(ChatServiceError::InvalidRoomKind)));
    }

    #[tokio::test]
    async fn should_reject_out_of_range_max_members() {
        let uc = CreateRoomUseCase {
            repo: MockRoomRepo {
                room: None,
                delete_returns: false,
            },
        };
        for bad in [0, -5, 1001] {
            let mut i = input("room", "daily");
            i.max_members = Some(bad);
            let result = uc.execute(Uuid::now_v7(), i).await;
            assert!(
                matches!(result, Err(ChatServiceError::InvalidMaxMembers)),
                "max_members {bad} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn should_normalize_language() {
        let uc = CreateRoomUseCase {
            repo: MockRoomRepo {
                room: None,
                delete_returns: false,
            },
        };
        let mut i = input("room", "teens");
        i.language = Some(" EN ".to_owned());
        let room = uc.execute(Uuid::now_v7(), i).await.unwrap();
        assert_eq!(room.language, "en");
    }

    #[tokio::test]
    async fn should_404_on_missing_room_lookup() {
        let uc = GetRoomUseCase {
            repo: MockRoomRepo {
                room: None,
                delete_returns: false,
            },
        };
        let result = uc.execute(Uuid::now_v7()).await;
        assert!(matches!(result, Err(ChatServiceError::RoomNotFound)));
    }

    #[tokio::test]
    async fn should_404_on_deleting_missing_room() {
        let uc = DeleteRoomUseCase {
            repo: MockRoomRepo {
                room: None,
                delete_returns: false,
            },
        };
        let result = uc.execute(Uuid::now_v7()).await;
        assert!(matches!(result, Err(ChatServiceError::RoomNotFound)));
    }

    #[tokio::test]
    async fn should_delete_existing_room() {
        let uc = DeleteRoomUseCase {
            repo: MockRoomRepo {
                room: None,
                delete_returns: true,
            },
        };
        assert!(uc.execute(Uuid::now_v7()).await.is_ok());
    }
}
