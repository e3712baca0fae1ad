#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};
use uuid::Uuid;

use hamdel_domain::pagination::PageRequest;

use crate::domain::types::{AuthUser, OtpCode};
use crate::error::AuthServiceError;

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_phone(&self, phone: &str) -> Result<Option<AuthUser>, AuthServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<AuthUser>, AuthServiceError>;

    async fn create(&self, user: &AuthUser) -> Result<(), AuthServiceError>;

    /// Admin listing. `search` matches username OR phone, case-insensitive
    /// contains. Ordered by `created_at` descending.
    async fn list(
        &self,
        search: Option<&str>,
        page: PageRequest,
    ) -> Result<Vec<AuthUser>, AuthServiceError>;

    /// Set the banned flag. Returns the updated user, `None` when absent.
    async fn set_banned(
        &self,
        id: Uuid,
        banned: bool,
    ) -> Result<Option<AuthUser>, AuthServiceError>;

    /// Delete a user. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, AuthServiceError>;
}

/// Repository for one-time verification codes.
pub trait OtpCodeRepository: Send + Sync {
    /// Replace every code for `otp.phone` with `otp` in one transaction.
    /// After this returns, `otp` is the only code observable for that phone.
    async fn replace_for_phone(&self, otp: &OtpCode) -> Result<(), AuthServiceError>;

    /// Exact match on phone AND code. Expiry is NOT checked here; the
    /// caller compares `expires_at` itself.
    async fn find_by_phone_and_code(
        &self,
        phone: &str,
        code: &str,
    ) -> Result<Option<OtpCode>, AuthServiceError>;

    /// Delete one code. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, AuthServiceError>;

    /// Delete every code with `expires_at <= now`. Returns the count.
    /// Hygiene only; expiry is enforced at verification time.
    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64, AuthServiceError>;
}

/// Server-side admin session store.
pub trait SessionStore: Send + Sync {
    /// Store `user_id` under `session_id` for `ttl_secs`.
    async fn set(
        &self,
        session_id: &str,
        user_id: Uuid,
        ttl_secs: u64,
    ) -> Result<(), AuthServiceError>;

    /// Look up a session. `None` when absent or expired.
    async fn get(&self, session_id: &str) -> Result<Option<Uuid>, AuthServiceError>;

    /// Drop a session. Unknown ids are a no-op.
    async fn delete(&self, session_id: &str) -> Result<(), AuthServiceError>;
}
