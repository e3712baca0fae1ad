//! Relaxation content: admin-side creation and mood-driven suggestions.

use chrono::Utc;
use uuid::Uuid;

use hamdel_domain::content::ContentCategory;
use hamdel_domain::mood::Mood;

use crate::domain::repository::{ContentRepository, UserMoodRepository};
use crate::domain::types::Content;
use crate::error::ChatServiceError;

/// Upper bound on one suggestions payload.
const SUGGESTION_LIMIT: u64 = 20;

// ── CreateContent ────────────────────────────────────────────────────────────

pub struct CreateContentInput {
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub mood_tags: Vec<String>,
    pub media_url: Option<String>,
    pub is_popular: bool,
}

pub struct CreateContentUseCase<C: ContentRepository> {
    pub repo: C,
}

impl<C: ContentRepository> CreateContentUseCase<C> {
    pub async fn execute(&self, input: CreateContentInput) -> Result<Content, ChatServiceError> {
        let title = input.title.trim();
        if title.is_empty() {
            return Err(ChatServiceError::MissingData);
        }

        let category = input.category.trim();
        if category.is_empty() {
            return Err(ChatServiceError::MissingData);
        }
        let category =
            ContentCategory::from_str_opt(category).ok_or(ChatServiceError::InvalidContentCategory)?;

        // Tags are deduplicated here; the tag table keys on (content_id,
        // mood) and a repeated tag would fail the insert.
        let mut mood_tags: Vec<Mood> = Vec::with_capacity(input.mood_tags.len());
        for raw in &input.mood_tags {
            let mood = Mood::from_str_opt(raw.trim()).ok_or(ChatServiceError::InvalidMood)?;
            if !mood_tags.contains(&mood) {
                mood_tags.push(mood);
            }
        }

        let content = Content {
            id: Uuid::now_v7(),
            title: title.to_owned(),
            description: input
                .description
                .map(|d| d.trim().to_owned())
                .filter(|d| !d.is_empty()),
            category,
            mood_tags,
            media_url: input.media_url,
            is_popular: input.is_popular,
            created_at: Utc::now(),
        };
        self.repo.create(&content).await?;

        tracing::debug!(content_id = %content.id, category = category.as_str(), "content created");

        Ok(content)
    }
}

// ── SuggestContents ──────────────────────────────────────────────────────────

pub struct ContentSuggestions {
    /// The mood that drove the selection; `None` when the popular fallback
    /// served instead.
    pub mood: Option<Mood>,
    pub contents: Vec<Content>,
}

pub struct SuggestContentsUseCase<C: ContentRepository, M: UserMoodRepository> {
    pub contents: C,
    pub moods: M,
}

impl<C: ContentRepository, M: UserMoodRepository> SuggestContentsUseCase<C, M> {
    /// The caller's latest mood selects tagged contents in random order.
    /// Without a recorded mood, or when nothing carries that tag, popular
    /// contents serve newest first.
    pub async fn execute(&self, user_id: Uuid) -> Result<ContentSuggestions, ChatServiceError> {
        if let Some(entry) = self.moods.latest_for_user(user_id).await? {
            let tagged = self
                .contents
                .list_by_mood_random(entry.mood, SUGGESTION_LIMIT)
                .await?;
            if !tagged.is_empty() {
                return Ok(ContentSuggestions {
                    mood: Some(entry.mood),
                    contents: tagged,
                });
            }
        }

        let popular = self.contents.list_popular(SUGGESTION_LIMIT).await?;
        Ok(ContentSuggestions {
            mood: None,
            contents: popular,
        })
    }
}
