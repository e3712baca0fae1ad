//! Chat service error taxonomy and HTTP mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum ChatServiceError {
    /// Bad signature, garbage, or a refresh token at the bearer gate.
    #[error("invalid token")]
    InvalidToken,
    #[error("token expired")]
    ExpiredToken,
    /// The token verified but its subject no longer exists.
    #[error("user not found")]
    UserNotFound,
    #[error("forbidden")]
    Forbidden,
    #[error("missing data")]
    MissingData,
    #[error("invalid id")]
    InvalidId,
    #[error("invalid query string")]
    InvalidQuery,
    #[error("title exceeds 100 characters")]
    InvalidTitle,
    #[error("invalid room kind")]
    InvalidRoomKind,
    #[error("max members must be between 1 and 1000")]
    InvalidMaxMembers,
    #[error("content exceeds 1000 characters")]
    InvalidContent,
    #[error("invalid mood")]
    InvalidMood,
    #[error("invalid content category")]
    InvalidContentCategory,
    /// A request body referenced a room that does not exist.
    #[error("room does not exist")]
    InvalidRoom,
    #[error("room is inactive")]
    RoomInactive,
    /// A request body referenced a challenge that does not exist.
    #[error("challenge does not exist")]
    InvalidChallenge,
    #[error("challenge expired")]
    ChallengeExpired,
    #[error("parent message missing or deleted")]
    InvalidParentMessage,
    #[error("expiry must be in the future")]
    InvalidExpiration,
    #[error("challenge already answered")]
    AlreadyAnswered,
    #[error("room not found")]
    RoomNotFound,
    #[error("message not found")]
    MessageNotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ChatServiceError {
    /// Stable machine-readable discriminator carried in error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidToken => "INVALID_TOKEN",
            Self::ExpiredToken => "EXPIRED_TOKEN",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::Forbidden => "FORBIDDEN",
            Self::MissingData => "MISSING_DATA",
            Self::InvalidId => "INVALID_ID",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::InvalidTitle => "INVALID_TITLE",
            Self::InvalidRoomKind => "INVALID_ROOM_KIND",
            Self::InvalidMaxMembers => "INVALID_MAX_MEMBERS",
            Self::InvalidContent => "INVALID_CONTENT",
            Self::InvalidMood => "INVALID_MOOD",
            Self::InvalidContentCategory => "INVALID_CONTENT_CATEGORY",
            Self::InvalidRoom => "INVALID_ROOM",
            Self::RoomInactive => "ROOM_INACTIVE",
            Self::InvalidChallenge => "INVALID_CHALLENGE",
            Self::ChallengeExpired => "CHALLENGE_EXPIRED",
            Self::InvalidParentMessage => "INVALID_PARENT_MESSAGE",
            Self::InvalidExpiration => "INVALID_EXPIRATION",
            Self::AlreadyAnswered => "ALREADY_ANSWERED",
            Self::RoomNotFound => "ROOM_NOT_FOUND",
            Self::MessageNotFound => "MESSAGE_NOT_FOUND",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for ChatServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidToken | Self::ExpiredToken | Self::UserNotFound => {
                StatusCode::UNAUTHORIZED
            }
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::MissingData
            | Self::InvalidId
            | Self::InvalidQuery
            | Self::InvalidTitle
            | Self::InvalidRoomKind
            | Self::InvalidMaxMembers
            | Self::InvalidContent
            | Self::InvalidMood
            | Self::InvalidContentCategory
            | Self::InvalidRoom
            | Self::RoomInactive
            | Self::InvalidChallenge
            | Self::ChallengeExpired
            | Self::InvalidParentMessage
            | Self::InvalidExpiration
            | Self::AlreadyAnswered => StatusCode::BAD_REQUEST,
            Self::RoomNotFound | Self::MessageNotFound => StatusCode::NOT_FOUND,
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

#[cfg(test)]
mod tests {
    use super::*;

    async fn assert_error(err: ChatServiceError, status: StatusCode, kind: &str) {
        let resp = err.into_response();
        assert_eq!(resp.status(), status);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["kind"], kind);
        assert!(json["error"].is_string());
    }

    #[tokio::test]
    async fn should_map_gate_failures_to_401() {
        assert_error(
            ChatServiceError::InvalidToken,
            StatusCode::UNAUTHORIZED,
            "INVALID_TOKEN",
        )
        .await;
        assert_error(
            ChatServiceError::ExpiredToken,
            StatusCode::UNAUTHORIZED,
            "EXPIRED_TOKEN",
        )
        .await;
        assert_error(
            ChatServiceError::UserNotFound,
            StatusCode::UNAUTHORIZED,
            "USER_NOT_FOUND",
        )
        .await;
    }

    #[tokio::test]
    async fn should_map_forbidden_to_403() {
        assert_error(ChatServiceError::Forbidden, StatusCode::FORBIDDEN, "FORBIDDEN").await;
    }

    #[tokio::test]
    async fn should_map_validation_errors_to_400() {
        assert_error(
            ChatServiceError::InvalidId,
            StatusCode::BAD_REQUEST,
            "INVALID_ID",
        )
        .await;
        assert_error(
            ChatServiceError::InvalidRoomKind,
            StatusCode::BAD_REQUEST,
            "INVALID_ROOM_KIND",
        )
        .await;
        assert_error(
            ChatServiceError::RoomInactive,
            StatusCode::BAD_REQUEST,
            "ROOM_INACTIVE",
        )
        .await;
        assert_error(
            ChatServiceError::ChallengeExpired,
            StatusCode::BAD_REQUEST,
            "CHALLENGE_EXPIRED",
        )
        .await;
    }

    #[tokio::test]
    async fn should_map_duplicate_answer_to_400_with_domain_message() {
        let resp = ChatServiceError::AlreadyAnswered.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["kind"], "ALREADY_ANSWERED");
        assert_eq!(json["error"], "challenge already answered");
    }

    #[tokio::test]
    async fn should_map_missing_entities_to_404() {
        assert_error(
            ChatServiceError::RoomNotFound,
            StatusCode::NOT_FOUND,
            "ROOM_NOT_FOUND",
        )
        .await;
        assert_error(
            ChatServiceError::MessageNotFound,
            StatusCode::NOT_FOUND,
            "MESSAGE_NOT_FOUND",
        )
        .await;
    }

    #[tokio::test]
    async fn should_hide_internal_error_details() {
        let err = ChatServiceError::Internal(anyhow::anyhow!("pool timed out at 10.0.0.7"));
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["kind"], "INTERNAL");
        assert_eq!(json["error"], "internal server error");
    }
}
