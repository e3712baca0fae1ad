//! Challenge answer submission.

use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::{ChallengeRepository, ChallengeResponseRepository};
use crate::domain::types::{Challenge, ChallengeResponse};
use crate::error::ChatServiceError;

// ── SubmitChallengeResponse ──────────────────────────────────────────────────

pub struct SubmitChallengeResponseUseCase<R, C>
where
    R: ChallengeResponseRepository,
    C: ChallengeRepository,
{
    pub response_repo: R,
    pub challenge_repo: C,
}

impl<R, C> SubmitChallengeResponseUseCase<R, C>
where
    R: ChallengeResponseRepository,
    C: ChallengeRepository,
{
    /// Record that the caller answered a challenge. One answer per user per
    /// challenge; the unique index arbitrates concurrent submissions, so
    /// there is no read-before-write race here.
    pub async fn execute(
        &self,
        user_id: Uuid,
        challenge_id: Uuid,
    ) -> Result<(ChallengeResponse, Challenge), ChatServiceError> {
        let challenge = self
            .challenge_repo
            .find_by_id(challenge_id)
            .await?
            .ok_or(ChatServiceError::InvalidChallenge)?;
        if challenge.is_expired(Utc::now()) {
            return Err(ChatServiceError::ChallengeExpired);
        }

        let response = ChallengeResponse {
            id: Uuid::now_v7(),
            user_id,
            challenge_id: challenge.id,
            answered_at: Utc::now(),
        };
        if !self.response_repo.create(&response).await? {
            return Err(ChatServiceError::AlreadyAnswered);
        }

        Ok((response, challenge))
    }
}
