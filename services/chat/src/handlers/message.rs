use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hamdel_auth_types::bearer::Bearer;
use hamdel_domain::pagination::PageRequest;

use crate::domain::types::Message;
use crate::error::ChatServiceError;
use crate::handlers::require_member;
use crate::state::AppState;
use crate::usecase::message::{
    CreateMessageInput, CreateMessageUseCase, LikeMessageUseCase, ListMessagesUseCase,
    ReportMessageUseCase, UnlikeMessageUseCase,
};

#[derive(Serialize)]
pub struct MessageResponse {
    pub id: String,
    pub challenge_id: Option<String>,
    pub user_id: String,
    pub content: String,
    pub is_reply: bool,
    pub parent_id: Option<String>,
    pub is_rebuke: bool,
    pub is_back: bool,
    pub is_edited: bool,
    pub is_reported: bool,
    pub is_deleted: bool,
    pub likes: Vec<String>,
    pub likes_count: usize,
    #[serde(serialize_with = "hamdel_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

fn message_response(message: Message) -> MessageResponse {
    let likes: Vec<String> = message.likes.iter().map(Uuid::to_string).collect();
    MessageResponse {
        id: message.id.to_string(),
        challenge_id: message.challenge_id.map(|id| id.to_string()),
        user_id: message.user_id.to_string(),
        content: message.content,
        is_reply: message.is_reply,
        parent_id: message.parent_id.map(|id| id.to_string()),
        is_rebuke: message.is_rebuke,
        is_back: message.is_back,
        is_edited: message.is_edited,
        is_reported: message.is_reported,
        is_deleted: message.is_deleted,
        likes_count: likes.len(),
        likes,
        created_at: message.created_at,
    }
}

// ── GET /messages ────────────────────────────────────────────────────────

// serde_qs cannot flatten non-string fields, so pagination stays inline.
#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct ListMessagesQuery {
    /// Challenge id filter.
    pub challenge: Option<String>,
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

pub async fn list_messages(
    State(state): State<AppState>,
    bearer: Bearer,
    axum::extract::RawQuery(raw_query): axum::extract::RawQuery,
) -> Result<Json<Vec<MessageResponse>>, ChatServiceError> {
    require_member(&state, &bearer).await?;

    let query: ListMessagesQuery = raw_query
        .as_deref()
        .map(serde_qs::from_str)
        .transpose()
        .map_err(|_| ChatServiceError::InvalidQuery)?
        .unwrap_or_default();
    let challenge_id = query
        .challenge
        .as_deref()
        .map(Uuid::parse_str)
        .transpose()
        .map_err(|_| ChatServiceError::InvalidId)?;

    let page = PageRequest {
        per_page: query.per_page.unwrap_or(20),
        page: query.page.unwrap_or(1),
    };

    let usecase = ListMessagesUseCase {
        repo: state.message_repo(),
    };
    let messages = usecase.execute(challenge_id, page).await?;

    Ok(Json(messages.into_iter().map(message_response).collect()))
}

// ── POST /messages ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateMessageRequest {
    pub challenge_id: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub is_reply: bool,
    pub parent_id: Option<String>,
    #[serde(default)]
    pub is_rebuke: bool,
    #[serde(default)]
    pub is_back: bool,
}

pub async fn create_message(
    State(state): State<AppState>,
    bearer: Bearer,
    Json(body): Json<CreateMessageRequest>,
) -> Result<impl IntoResponse, ChatServiceError> {
    let caller = require_member(&state, &bearer).await?;

    let challenge_id = body
        .challenge_id
        .as_deref()
        .map(Uuid::parse_str)
        .transpose()
        .map_err(|_| ChatServiceError::InvalidId)?;
    let parent_id = body
        .parent_id
        .as_deref()
        .map(Uuid::parse_str)
        .transpose()
        .map_err(|_| ChatServiceError::InvalidId)?;

    let usecase = CreateMessageUseCase {
        message_repo: state.message_repo(),
        challenge_repo: state.challenge_repo(),
    };
    let message = usecase
        .execute(
            caller.id,
            CreateMessageInput {
                challenge_id,
                content: body.content,
                is_reply: body.is_reply,
                parent_id,
                is_rebuke: body.is_rebuke,
                is_back: body.is_back,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(message_response(message))))
}

// ── POST /messages/{message_id}/like ─────────────────────────────────────

pub async fn like_message(
    State(state): State<AppState>,
    bearer: Bearer,
    Path(message_id): Path<String>,
) -> Result<Json<MessageResponse>, ChatServiceError> {
    let caller = require_member(&state, &bearer).await?;

    let message_id = message_id
        .parse::<Uuid>()
        .map_err(|_| ChatServiceError::InvalidId)?;

    let usecase = LikeMessageUseCase {
        repo: state.message_repo(),
    };
    let message = usecase.execute(message_id, caller.id).await?;

    Ok(Json(message_response(message)))
}

// ── DELETE /messages/{message_id}/unlike ─────────────────────────────────

pub async fn unlike_message(
    State(state): State<AppState>,
    bearer: Bearer,
    Path(message_id): Path<String>,
) -> Result<Json<MessageResponse>, ChatServiceError> {
    let caller = require_member(&state, &bearer).await?;

    let message_id = message_id
        .parse::<Uuid>()
        .map_err(|_| ChatServiceError::InvalidId)?;

    let usecase = UnlikeMessageUseCase {
        repo: state.message_repo(),
    };
    let message = usecase.execute(message_id, caller.id).await?;

    Ok(Json(message_response(message)))
}

// ── POST /messages/{message_id}/report ───────────────────────────────────

#[derive(Serialize)]
pub struct ReportMessageResponse {
    pub reported: bool,
}

pub async fn report_message(
    State(state): State<AppState>,
    bearer: Bearer,
    Path(message_id): Path<String>,
) -> Result<Json<ReportMessageResponse>, ChatServiceError> {
    require_member(&state, &bearer).await?;

    let message_id = message_id
        .parse::<Uuid>()
        .map_err(|_| ChatServiceError::InvalidId)?;

    let usecase = ReportMessageUseCase {
        repo: state.message_repo(),
    };
    usecase.execute(message_id).await?;

    Ok(Json(ReportMessageResponse { reported: true }))
}
