use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

use hamdel_auth_types::bearer::Bearer;
use hamdel_domain::content::ContentCategory;
use hamdel_domain::mood::Mood;

use crate::access::require_admin;
use crate::domain::types::Content;
use crate::error::ChatServiceError;
use crate::handlers::require_member;
use crate::state::AppState;
use crate::usecase::content::{
    CreateContentInput, CreateContentUseCase, SuggestContentsUseCase,
};

#[derive(Serialize)]
pub struct ContentResponse {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: ContentCategory,
    pub mood_tags: Vec<Mood>,
    pub media_url: Option<String>,
    pub is_popular: bool,
    #[serde(serialize_with = "hamdel_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

fn content_response(content: Content) -> ContentResponse {
    ContentResponse {
        id: content.id.to_string(),
        title: content.title,
        description: content.description,
        category: content.category,
        mood_tags: content.mood_tags,
        media_url: content.media_url,
        is_popular: content.is_popular,
        created_at: content.created_at,
    }
}

// ── GET /contents/suggestions ────────────────────────────────────────────

#[derive(Serialize)]
pub struct SuggestionsResponse {
    /// The mood that drove the selection, absent when the popular fallback
    /// served.
    pub mood: Option<Mood>,
    pub contents: Vec<ContentResponse>,
}

pub async fn suggest_contents(
    State(state): State<AppState>,
    bearer: Bearer,
) -> Result<Json<SuggestionsResponse>, ChatServiceError> {
    let caller = require_member(&state, &bearer).await?;

    let usecase = SuggestContentsUseCase {
        contents: state.content_repo(),
        moods: state.mood_repo(),
    };
    let out = usecase.execute(caller.id).await?;

    Ok(Json(SuggestionsResponse {
        mood: out.mood,
        contents: out.contents.into_iter().map(content_response).collect(),
    }))
}

// ── POST /contents ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateContentRequest {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub mood_tags: Vec<String>,
    pub media_url: Option<String>,
    #[serde(default)]
    pub is_popular: bool,
}

pub async fn create_content(
    State(state): State<AppState>,
    bearer: Bearer,
    Json(body): Json<CreateContentRequest>,
) -> Result<impl IntoResponse, ChatServiceError> {
    let caller = require_member(&state, &bearer).await?;
    require_admin(&caller)?;

    let usecase = CreateContentUseCase {
        repo: state.content_repo(),
    };
    let content = usecase
        .execute(CreateContentInput {
            title: body.title,
            description: body.description,
            category: body.category,
            mood_tags: body.mood_tags,
            media_url: body.media_url,
            is_popular: body.is_popular,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(content_response(content))))
}
