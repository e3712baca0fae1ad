use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

use crate::error::AuthServiceError;
use crate::state::AppState;
use crate::usecase::token::RefreshTokenUseCase;

// ── POST /auth/refresh ───────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RefreshRequest {
    #[serde(default)]
    pub refresh: String,
}

#[derive(Serialize)]
pub struct RefreshResponse {
    pub access: String,
}

pub async fn refresh_token(
    State(state): State<AppState>,
    Json(body): Json<RefreshRequest>,
) -> Result<impl IntoResponse, AuthServiceError> {
    if body.refresh.trim().is_empty() {
        return Err(AuthServiceError::MissingData);
    }

    let usecase = RefreshTokenUseCase {
        users: state.user_repo(),
        jwt_secret: state.jwt_secret.clone(),
        access_ttl_secs: state.access_token_ttl_secs,
    };

    let out = usecase.execute(&body.refresh).await?;

    Ok((StatusCode::OK, Json(RefreshResponse { access: out.access_token })))
}
