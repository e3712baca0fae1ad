use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

use crate::error::AuthServiceError;
use crate::state::AppState;
use crate::usecase::otp::{RequestOtpUseCase, VerifyOtpUseCase};
use crate::usecase::token::MintTokenPairUseCase;

// ── POST /auth/request-code ──────────────────────────────────────────────

// Absent fields deserialize to "" and fail the blank check as MISSING_DATA
// instead of bouncing off axum's body rejection.
#[derive(Deserialize)]
pub struct RequestCodeRequest {
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize)]
pub struct RequestCodeResponse {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

pub async fn request_code(
    State(state): State<AppState>,
    Json(body): Json<RequestCodeRequest>,
) -> Result<impl IntoResponse, AuthServiceError> {
    let usecase = RequestOtpUseCase {
        otp_repo: state.otp_repo(),
        user_repo: state.user_repo(),
    };

    let out = usecase.execute(&body.phone, &body.password).await?;

    // Delivery is out of band. The body carries the code only on
    // deployments that explicitly opt in.
    let code = state.expose_otp_code.then_some(out.code);

    Ok((
        StatusCode::OK,
        Json(RequestCodeResponse {
            message: "verification code sent",
            code,
        }),
    ))
}

// ── POST /auth/verify-code ───────────────────────────────────────────────

#[derive(Deserialize)]
pub struct VerifyCodeRequest {
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub code: String,
}

#[derive(Serialize)]
pub struct TokenPairResponse {
    pub access: String,
    pub refresh: String,
}

pub async fn verify_code(
    State(state): State<AppState>,
    Json(body): Json<VerifyCodeRequest>,
) -> Result<impl IntoResponse, AuthServiceError> {
    let usecase = VerifyOtpUseCase {
        otp_repo: state.otp_repo(),
        user_repo: state.user_repo(),
    };

    let out = usecase
        .execute(&body.phone, &body.password, &body.code)
        .await?;

    let mint = MintTokenPairUseCase {
        jwt_secret: state.jwt_secret.clone(),
        access_ttl_secs: state.access_token_ttl_secs,
        refresh_ttl_secs: state.refresh_token_ttl_secs,
    };
    let pair = mint.execute(&out.user.phone)?;

    Ok((
        StatusCode::OK,
        Json(TokenPairResponse {
            access: pair.access_token,
            refresh: pair.refresh_token,
        }),
    ))
}
