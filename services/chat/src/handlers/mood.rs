use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hamdel_auth_types::bearer::Bearer;
use hamdel_domain::mood::Mood;
use hamdel_domain::pagination::PageRequest;

use crate::access::require_owner;
use crate::domain::types::UserMood;
use crate::error::ChatServiceError;
use crate::handlers::require_member;
use crate::state::AppState;
use crate::usecase::mood::{ListUserMoodsUseCase, ReportMoodUseCase};

#[derive(Serialize)]
pub struct MoodResponse {
    pub id: String,
    pub user_id: String,
    pub mood: Mood,
    #[serde(serialize_with = "hamdel_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

fn mood_response(entry: UserMood) -> MoodResponse {
    MoodResponse {
        id: entry.id.to_string(),
        user_id: entry.user_id.to_string(),
        mood: entry.mood,
        created_at: entry.created_at,
    }
}

// ── POST /moods ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ReportMoodRequest {
    #[serde(default)]
    pub mood: String,
}

pub async fn report_mood(
    State(state): State<AppState>,
    bearer: Bearer,
    Json(body): Json<ReportMoodRequest>,
) -> Result<impl IntoResponse, ChatServiceError> {
    let caller = require_member(&state, &bearer).await?;

    let usecase = ReportMoodUseCase {
        repo: state.mood_repo(),
    };
    let entry = usecase.execute(caller.id, &body.mood).await?;

    Ok((StatusCode::CREATED, Json(mood_response(entry))))
}

// ── GET /users/{user_id}/moods ───────────────────────────────────────────

// serde_qs cannot flatten non-string fields, so pagination stays inline.
#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct ListMoodsQuery {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

pub async fn list_user_moods(
    State(state): State<AppState>,
    bearer: Bearer,
    Path(user_id): Path<String>,
    axum::extract::RawQuery(raw_query): axum::extract::RawQuery,
) -> Result<Json<Vec<MoodResponse>>, ChatServiceError> {
    let caller = require_member(&state, &bearer).await?;

    let user_id = user_id
        .parse::<Uuid>()
        .map_err(|_| ChatServiceError::InvalidId)?;
    // Mood history is private to its owner.
    require_owner(&caller, user_id)?;

    let query: ListMoodsQuery = raw_query
        .as_deref()
        .map(serde_qs::from_str)
        .transpose()
        .map_err(|_| ChatServiceError::InvalidQuery)?
        .unwrap_or_default();

    let page = PageRequest {
        per_page: query.per_page.unwrap_or(20),
        page: query.page.unwrap_or(1),
    };

    let usecase = ListUserMoodsUseCase {
        repo: state.mood_repo(),
    };
    let moods = usecase.execute(user_id, page).await?;

    Ok(Json(moods.into_iter().map(mood_response).collect()))
}
