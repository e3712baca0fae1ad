//! Auth service error taxonomy and HTTP mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum AuthServiceError {
    #[error("missing data")]
    MissingData,
    #[error("invalid phone number")]
    InvalidPhone,
    #[error("invalid query string")]
    InvalidQuery,
    #[error("invalid id")]
    InvalidId,
    #[error("wrong password")]
    InvalidPassword,
    /// Wrong and expired codes share one message so callers cannot probe
    /// which digits were right.
    #[error("code invalid or expired")]
    InvalidOtpCode,
    #[error("invalid refresh token")]
    InvalidRefreshToken,
    #[error("refresh token expired")]
    ExpiredRefreshToken,
    #[error("user not found")]
    UserNotFound,
    /// Admin login failures collapse here: unknown phone, wrong password,
    /// and non-admin accounts all get the same answer.
    #[error("invalid credentials")]
    InvalidCredential,
    #[error("session expired")]
    InvalidSession,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AuthServiceError {
    /// Stable machine-readable discriminator carried in error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingData => "MISSING_DATA",
            Self::InvalidPhone => "INVALID_PHONE",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::InvalidId => "INVALID_ID",
            Self::InvalidPassword => "INVALID_PASSWORD",
            Self::InvalidOtpCode => "INVALID_OTP_CODE",
            Self::InvalidRefreshToken => "INVALID_REFRESH_TOKEN",
            Self::ExpiredRefreshToken => "EXPIRED_REFRESH_TOKEN",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::InvalidCredential => "INVALID_CREDENTIAL",
            Self::InvalidSession => "INVALID_SESSION",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for AuthServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingData
            | Self::InvalidPhone
            | Self::InvalidQuery
            | Self::InvalidId
            | Self::InvalidRefreshToken => StatusCode::BAD_REQUEST,
            Self::InvalidPassword
            | Self::InvalidOtpCode
            | Self::ExpiredRefreshToken
            | Self::InvalidCredential
            | Self::InvalidSession => StatusCode::UNAUTHORIZED,
            Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Log 500s only — tower-http TraceLayer already records method/uri/status
        // for all requests. 4xx are expected client errors; logging them here
        // would be noise.
        if let Self::Internal(e) = &self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }

        let body = match &self {
            Self::Internal(_) => serde_json::json!({
                "kind": "INTERNAL",
                "error": "internal server error",
            }),
            _ => serde_json::json!({
                "kind": self.kind(),
                "error": self.to_string(),
            }),
        };

        (status, Json(body)).into_response()
    }
}
