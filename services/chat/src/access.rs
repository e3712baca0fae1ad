//! Bearer-token gate and authorization predicates.
//!
//! Every chat endpoint runs [`authenticate`] first, then whichever
//! predicates the endpoint requires, in order. The admin panel in the auth
//! service uses its own cookie sessions and never passes through here.

use uuid::Uuid;

use hamdel_auth_types::token::{AuthError, validate_access_token};

use crate::domain::repository::UserPort;
use crate::domain::types::GateUser;
use crate::error::ChatServiceError;

/// Validate an access token and resolve its subject to a live user.
///
/// A refresh token is rejected here even when its signature and expiry are
/// fine; the two kinds never cross endpoints.
pub async fn authenticate<U: UserPort>(
    users: &U,
    jwt_secret: &str,
    token: &str,
) -> Result<GateUser, ChatServiceError> {
    let info = validate_access_token(token, jwt_secret).map_err(|e| match e {
        AuthError::Expired => ChatServiceError::ExpiredToken,
        AuthError::InvalidSignature | AuthError::Malformed | AuthError::WrongKind => {
            ChatServiceError::InvalidToken
        }
    })?;

    users
        .find_by_phone(&info.phone)
        .await?
        .ok_or(ChatServiceError::UserNotFound)
}

pub fn require_not_banned(user: &GateUser) -> Result<(), ChatServiceError> {
    if user.is_banned {
        return Err(ChatServiceError::Forbidden);
    }
    Ok(())
}

pub fn require_admin(user: &GateUser) -> Result<(), ChatServiceError> {
    if !user.is_admin {
        return Err(ChatServiceError::Forbidden);
    }
    Ok(())
}

/// The caller must be the user addressed by the path.
pub fn require_owner(user: &GateUser, owner_id: Uuid) -> Result<(), ChatServiceError> {
    if user.id != owner_id {
        return Err(ChatServiceError::Forbidden);
    }
    Ok(())
}

/// The caller must have created the resource.
pub fn require_creator(user: &GateUser, creator_id: Uuid) -> Result<(), ChatServiceError> {
    if user.id != creator_id {
        return Err(ChatServiceError::Forbidden);
    }
    Ok(())
}
