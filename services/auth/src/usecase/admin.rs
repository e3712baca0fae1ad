//! Admin panel: cookie-session login and user management.
//!
//! The panel is a separate trust surface from the token pair. Sessions are
//! server-side rows in Redis; the browser only ever holds an opaque id, and
//! every request re-validates against the store.

use uuid::Uuid;

use hamdel_domain::pagination::PageRequest;

use crate::domain::repository::{SessionStore, UserRepository};
use crate::domain::types::AuthUser;
use crate::error::AuthServiceError;
use crate::password::verify_password_blocking;

// ── AdminLogin ───────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct AdminLoginOutput {
    pub session_id: String,
}

pub struct AdminLoginUseCase<U: UserRepository, S: SessionStore> {
    pub users: U,
    pub sessions: S,
    pub session_ttl_secs: u64,
}

impl<U: UserRepository, S: SessionStore> AdminLoginUseCase<U, S> {
    pub async fn execute(
        &self,
        phone: &str,
        password: &str,
    ) -> Result<AdminLoginOutput, AuthServiceError> {
        if phone.trim().is_empty() || password.is_empty() {
            return Err(AuthServiceError::MissingData);
        }

        // Unknown phone, wrong password and non-admin account all collapse
        // into one answer, so a caller cannot probe which admins exist.
        let user = self
            .users
            .find_by_phone(phone)
            .await?
            .ok_or(AuthServiceError::InvalidCredential)?;

        if !verify_password_blocking(password.to_string(), user.password_hash.clone()).await? {
            return Err(AuthServiceError::InvalidCredential);
        }
        if !user.is_admin {
            return Err(AuthServiceError::InvalidCredential);
        }

        let session_id = Uuid::new_v4().to_string();
        self.sessions
            .set(&session_id, user.id, self.session_ttl_secs)
            .await?;

        Ok(AdminLoginOutput { session_id })
    }
}

// ── ValidateAdminSession ─────────────────────────────────────────────────

/// Resolve a session id back to a live admin account. Runs on every panel
/// request; a session dies the moment its account is deleted or demoted.
pub struct ValidateAdminSessionUseCase<U: UserRepository, S: SessionStore> {
    pub users: U,
    pub sessions: S,
}

impl<U: UserRepository, S: SessionStore> ValidateAdminSessionUseCase<U, S> {
    pub async fn execute(&self, session_id: &str) -> Result<AuthUser, AuthServiceError> {
        let user_id = self
            .sessions
            .get(session_id)
            .await?
            .ok_or(AuthServiceError::InvalidSession)?;

        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(AuthServiceError::InvalidSession)?;

        if !user.is_admin {
            return Err(AuthServiceError::InvalidSession);
        }

        Ok(user)
    }
}

// ── AdminLogout ──────────────────────────────────────────────────────────

pub struct AdminLogoutUseCase<S: SessionStore> {
    pub sessions: S,
}

impl<S: SessionStore> AdminLogoutUseCase<S> {
    pub async fn execute(&self, session_id: &str) -> Result<(), AuthServiceError> {
        self.sessions.delete(session_id).await
    }
}

// ── ListUsers ────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> ListUsersUseCase<U> {
    pub async fn execute(
        &self,
        search: Option<&str>,
        page: PageRequest,
    ) -> Result<Vec<AuthUser>, AuthServiceError> {
        // Blank search means no filter, not "match the empty string".
        let search = search.map(str::trim).filter(|s| !s.is_empty());
        self.users.list(search, page).await
    }
}

// ── ToggleUserBan ────────────────────────────────────────────────────────

pub struct ToggleUserBanUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> ToggleUserBanUseCase<U> {
    pub async fn execute(&self, user_id: Uuid) -> Result<AuthUser, AuthServiceError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(AuthServiceError::UserNotFound)?;
        self.users
            .set_banned(user_id, !user.is_banned)
            .await?
            .ok_or(AuthServiceError::UserNotFound)
    }
}

// ── DeleteUser ───────────────────────────────────────────────────────────

pub struct DeleteUserUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> DeleteUserUseCase<U> {
    pub async fn execute(&self, user_id: Uuid) -> Result<(), AuthServiceError> {
        let deleted = self.users.delete(user_id).await?;
        if !deleted {
            return Err(AuthServiceError::UserNotFound);
        }
        Ok(())
    }
}
