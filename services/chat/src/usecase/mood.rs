//! Mood reporting and history.

use chrono::Utc;
use uuid::Uuid;

use hamdel_domain::mood::Mood;
use hamdel_domain::pagination::PageRequest;

use crate::domain::repository::UserMoodRepository;
use crate::domain::types::UserMood;
use crate::error::ChatServiceError;

// ── ReportMood ───────────────────────────────────────────────────────────────

pub struct ReportMoodUseCase<M: UserMoodRepository> {
    pub repo: M,
}

impl<M: UserMoodRepository> ReportMoodUseCase<M> {
    pub async fn execute(&self, user_id: Uuid, mood: &str) -> Result<UserMood, ChatServiceError> {
        let mood = mood.trim();
        if mood.is_empty() {
            return Err(ChatServiceError::MissingData);
        }
        let mood = Mood::from_str_opt(mood).ok_or(ChatServiceError::InvalidMood)?;

        let entry = UserMood {
            id: Uuid::now_v7(),
            user_id,
            mood,
            created_at: Utc::now(),
        };
        self.repo.create(&entry).await?;

        Ok(entry)
    }
}

// ── ListUserMoods ────────────────────────────────────────────────────────────

/// History for one user, newest first. The handler restricts this to the
/// owner before executing.
pub struct ListUserMoodsUseCase<M: UserMoodRepository> {
    pub repo: M,
}

impl<M: UserMoodRepository> ListUserMoodsUseCase<M> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<UserMood>, ChatServiceError> {
        self.repo.list_for_user(user_id, page).await
    }
}
