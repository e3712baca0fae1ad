pub mod challenge;
pub mod content;
pub mod message;
pub mod mood;
pub mod response;
pub mod room;

use hamdel_auth_types::bearer::Bearer;

use crate::access::{authenticate, require_not_banned};
use crate::domain::types::GateUser;
use crate::error::ChatServiceError;
use crate::state::AppState;

/// Resolve the bearer token to a live, non-banned caller. Every community
/// endpoint passes through here before touching its resources.
pub(crate) async fn require_member(
    state: &AppState,
    bearer: &Bearer,
) -> Result<GateUser, ChatServiceError> {
    let caller = authenticate(&state.user_client, &state.jwt_secret, bearer.token()).await?;
    require_not_banned(&caller)?;
    Ok(caller)
}
