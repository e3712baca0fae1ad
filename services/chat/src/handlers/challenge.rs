use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hamdel_auth_types::bearer::Bearer;
use hamdel_domain::pagination::PageRequest;
use hamdel_domain::room::RoomKind;

use crate::domain::types::{Challenge, Room};
use crate::error::ChatServiceError;
use crate::handlers::require_member;
use crate::state::AppState;
use crate::usecase::challenge::{
    CreateChallengeInput, CreateChallengeUseCase, ListChallengesUseCase,
};

#[derive(Serialize)]
pub struct RoomSummaryResponse {
    pub id: String,
    pub title: String,
    pub kind: RoomKind,
}

#[derive(Serialize)]
pub struct ChallengeResponse {
    pub id: String,
    pub room_id: String,
    pub title: String,
    pub description: Option<String>,
    pub media_url: Option<String>,
    #[serde(serialize_with = "hamdel_core::serde::to_rfc3339_ms")]
    pub expires_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "hamdel_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub room: RoomSummaryResponse,
}

fn challenge_response(challenge: Challenge, room: Room) -> ChallengeResponse {
    ChallengeResponse {
        id: challenge.id.to_string(),
        room_id: challenge.room_id.to_string(),
        title: challenge.title,
        description: challenge.description,
        media_url: challenge.media_url,
        expires_at: challenge.expires_at,
        created_at: challenge.created_at,
        room: RoomSummaryResponse {
            id: room.id.to_string(),
            title: room.title,
            kind: room.kind,
        },
    }
}

// ── GET /challenges ──────────────────────────────────────────────────────

// serde_qs cannot flatten non-string fields, so pagination stays inline.
#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct ListChallengesQuery {
    /// Room id filter.
    pub room: Option<String>,
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

pub async fn list_challenges(
    State(state): State<AppState>,
    bearer: Bearer,
    axum::extract::RawQuery(raw_query): axum::extract::RawQuery,
) -> Result<Json<Vec<ChallengeResponse>>, ChatServiceError> {
    require_member(&state, &bearer).await?;

    let query: ListChallengesQuery = raw_query
        .as_deref()
        .map(serde_qs::from_str)
        .transpose()
        .map_err(|_| ChatServiceError::InvalidQuery)?
        .unwrap_or_default();
    let room_id = query
        .room
        .as_deref()
        .map(Uuid::parse_str)
        .transpose()
        .map_err(|_| ChatServiceError::InvalidId)?;

    let page = PageRequest {
        per_page: query.per_page.unwrap_or(20),
        page: query.page.unwrap_or(1),
    };

    let usecase = ListChallengesUseCase {
        repo: state.challenge_repo(),
    };
    let challenges = usecase.execute(room_id, page).await?;

    Ok(Json(
        challenges
            .into_iter()
            .map(|(challenge, room)| challenge_response(challenge, room))
            .collect(),
    ))
}

// ── POST /challenges ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateChallengeRequest {
    #[serde(default)]
    pub room_id: String,
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    pub media_url: Option<String>,
    pub expires_at: Option<chrono::DateTime<chrono::Utc>>,
}

pub async fn create_challenge(
    State(state): State<AppState>,
    bearer: Bearer,
    Json(body): Json<CreateChallengeRequest>,
) -> Result<impl IntoResponse, ChatServiceError> {
    require_member(&state, &bearer).await?;

    if body.room_id.trim().is_empty() {
        return Err(ChatServiceError::MissingData);
    }
    let room_id = body
        .room_id
        .parse::<Uuid>()
        .map_err(|_| ChatServiceError::InvalidId)?;
    let expires_at = body.expires_at.ok_or(ChatServiceError::MissingData)?;

    let usecase = CreateChallengeUseCase {
        challenge_repo: state.challenge_repo(),
        room_repo: state.room_repo(),
    };
    let (challenge, room) = usecase
        .execute(CreateChallengeInput {
            room_id,
            title: body.title,
            description: body.description,
            media_url: body.media_url,
            expires_at,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(challenge_response(challenge, room))))
}
