use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hamdel_auth_types::bearer::Bearer;

use crate::error::ChatServiceError;
use crate::handlers::require_member;
use crate::state::AppState;
use crate::usecase::response::SubmitChallengeResponseUseCase;

// ── POST /responses ──────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SubmitResponseRequest {
    #[serde(default)]
    pub challenge_id: String,
}

#[derive(Serialize)]
pub struct ChallengeSummaryResponse {
    pub id: String,
    pub title: String,
    pub room_id: String,
}

#[derive(Serialize)]
pub struct ChallengeResponseBody {
    pub id: String,
    pub user_id: String,
    pub challenge_id: String,
    #[serde(serialize_with = "hamdel_core::serde::to_rfc3339_ms")]
    pub answered_at: chrono::DateTime<chrono::Utc>,
    pub challenge: ChallengeSummaryResponse,
}

pub async fn submit_response(
    State(state): State<AppState>,
    bearer: Bearer,
    Json(body): Json<SubmitResponseRequest>,
) -> Result<impl IntoResponse, ChatServiceError> {
    let caller = require_member(&state, &bearer).await?;

    if body.challenge_id.trim().is_empty() {
        return Err(ChatServiceError::MissingData);
    }
    let challenge_id = body
        .challenge_id
        .parse::<Uuid>()
        .map_err(|_| ChatServiceError::InvalidId)?;

    let usecase = SubmitChallengeResponseUseCase {
        response_repo: state.response_repo(),
        challenge_repo: state.challenge_repo(),
    };
    let (response, challenge) = usecase.execute(caller.id, challenge_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(ChallengeResponseBody {
            id: response.id.to_string(),
            user_id: response.user_id.to_string(),
            challenge_id: response.challenge_id.to_string(),
            answered_at: response.answered_at,
            challenge: ChallengeSummaryResponse {
                id: challenge.id.to_string(),
                title: challenge.title,
                room_id: challenge.room_id.to_string(),
            },
        }),
    ))
}
