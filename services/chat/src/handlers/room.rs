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
use hamdel_domain::room::RoomKind;

use crate::access::require_creator;
use crate::domain::types::Room;
use crate::error::ChatServiceError;
use crate::handlers::require_member;
use crate::state::AppState;
use crate::usecase::room::{
    CreateRoomInput, CreateRoomUseCase, DeleteRoomUseCase, GetRoomUseCase, ListRoomsUseCase,
};

#[derive(Serialize)]
pub struct RoomResponse {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub kind: RoomKind,
    pub language: String,
    pub max_members: i32,
    pub creator_id: String,
    pub is_active: bool,
    #[serde(serialize_with = "hamdel_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

fn room_response(room: Room) -> RoomResponse {
    RoomResponse {
        id: room.id.to_string(),
        title: room.title,
        description: room.description,
        kind: room.kind,
        language: room.language,
        max_members: room.max_members,
        creator_id: room.creator_id.to_string(),
        is_active: room.is_active,
        created_at: room.created_at,
    }
}

// ── GET /rooms ───────────────────────────────────────────────────────────

// serde_qs cannot flatten non-string fields, so pagination stays inline.
#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct ListRoomsQuery {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

pub async fn list_rooms(
    State(state): State<AppState>,
    bearer: Bearer,
    axum::extract::RawQuery(raw_query): axum::extract::RawQuery,
) -> Result<Json<Vec<RoomResponse>>, ChatServiceError> {
    require_member(&state, &bearer).await?;

    let query: ListRoomsQuery = raw_query
        .as_deref()
        .map(serde_qs::from_str)
        .transpose()
        .map_err(|_| ChatServiceError::InvalidQuery)?
        .unwrap_or_default();

    let page = PageRequest {
        per_page: query.per_page.unwrap_or(20),
        page: query.page.unwrap_or(1),
    };

    let usecase = ListRoomsUseCase {
        repo: state.room_repo(),
    };
    let rooms = usecase.execute(page).await?;

    Ok(Json(rooms.into_iter().map(room_response).collect()))
}

// ── POST /rooms ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateRoomRequest {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub kind: String,
    pub language: Option<String>,
    pub max_members: Option<i32>,
}

pub async fn create_room(
    State(state): State<AppState>,
    bearer: Bearer,
    Json(body): Json<CreateRoomRequest>,
) -> Result<impl IntoResponse, ChatServiceError> {
    let caller = require_member(&state, &bearer).await?;

    let usecase = CreateRoomUseCase {
        repo: state.room_repo(),
    };
    let room = usecase
        .execute(
            caller.id,
            CreateRoomInput {
                title: body.title,
                description: body.description,
                kind: body.kind,
                language: body.language,
                max_members: body.max_members,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(room_response(room))))
}

// ── GET /rooms/{room_id} ─────────────────────────────────────────────────

pub async fn get_room(
    State(state): State<AppState>,
    bearer: Bearer,
    Path(room_id): Path<String>,
) -> Result<Json<RoomResponse>, ChatServiceError> {
    require_member(&state, &bearer).await?;

    let room_id = room_id
        .parse::<Uuid>()
        .map_err(|_| ChatServiceError::InvalidId)?;

    let usecase = GetRoomUseCase {
        repo: state.room_repo(),
    };
    let room = usecase.execute(room_id).await?;

    Ok(Json(room_response(room)))
}

// ── DELETE /rooms/{room_id} ──────────────────────────────────────────────

pub async fn delete_room(
    State(state): State<AppState>,
    bearer: Bearer,
    Path(room_id): Path<String>,
) -> Result<StatusCode, ChatServiceError> {
    let caller = require_member(&state, &bearer).await?;

    let room_id = room_id
        .parse::<Uuid>()
        .map_err(|_| ChatServiceError::InvalidId)?;

    // Existence before ownership: an absent room is a 404 for everyone,
    // not a 403.
    let room = GetRoomUseCase {
        repo: state.room_repo(),
    }
    .execute(room_id)
    .await?;
    require_creator(&caller, room.creator_id)?;

    DeleteRoomUseCase {
        repo: state.room_repo(),
    }
    .execute(room_id)
    .await?;

    Ok(StatusCode::NO_CONTENT)
}
