use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use hamdel_auth::domain::repository::{OtpCodeRepository, SessionStore, UserRepository};
use hamdel_auth::domain::types::{AuthUser, OtpCode};
use hamdel_auth::error::AuthServiceError;
use hamdel_auth::password::hash_password;
use hamdel_domain::pagination::PageRequest;

// ── MockUserRepo ─────────────────────────────────────────────────────────

pub struct MockUserRepo {
    pub users: Arc<Mutex<Vec<AuthUser>>>,
}

impl MockUserRepo {
    pub fn new(users: Vec<AuthUser>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Shared handle to the internal user list for post-execution inspection.
    pub fn users_handle(&self) -> Arc<Mutex<Vec<AuthUser>>> {
        Arc::clone(&self.users)
    }
}

impl UserRepository for MockUserRepo {
    async fn find_by_phone(&self, phone: &str) -> Result<Option<AuthUser>, AuthServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.phone == phone)
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<AuthUser>, AuthServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn create(&self, user: &AuthUser) -> Result<(), AuthServiceError> {
        self.users.lock().unwrap().push(user.clone());
        Ok(())
    }

    async fn list(
        &self,
        search: Option<&str>,
        page: PageRequest,
    ) -> Result<Vec<AuthUser>, AuthServiceError> {
        let mut users: Vec<AuthUser> = self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| match search {
                Some(term) => {
                    let term = term.to_lowercase();
                    u.username.to_lowercase().contains(&term) || u.phone.contains(&term)
                }
                None => true,
            })
            .cloned()
            .collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(users
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect())
    }

    async fn set_banned(
        &self,
        id: Uuid,
        banned: bool,
    ) -> Result<Option<AuthUser>, AuthServiceError> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.is_banned = banned;
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AuthServiceError> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);
        Ok(users.len() < before)
    }
}

// ── MockOtpRepo ──────────────────────────────────────────────────────────

pub struct MockOtpRepo {
    pub codes: Arc<Mutex<Vec<OtpCode>>>,
}

impl MockOtpRepo {
    pub fn new(codes: Vec<OtpCode>) -> Self {
        Self {
            codes: Arc::new(Mutex::new(codes)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Shared handle to the internal code list for post-execution inspection.
    pub fn codes_handle(&self) -> Arc<Mutex<Vec<OtpCode>>> {
        Arc::clone(&self.codes)
    }
}

impl OtpCodeRepository for MockOtpRepo {
    async fn replace_for_phone(&self, otp: &OtpCode) -> Result<(), AuthServiceError> {
        let mut codes = self.codes.lock().unwrap();
        codes.retain(|c| c.phone != otp.phone);
        codes.push(otp.clone());
        Ok(())
    }

    async fn find_by_phone_and_code(
        &self,
        phone: &str,
        code: &str,
    ) -> Result<Option<OtpCode>, AuthServiceError> {
        Ok(self
            .codes
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.phone == phone && c.code == code)
            .cloned())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AuthServiceError> {
        let mut codes = self.codes.lock().unwrap();
        let before = codes.len();
        codes.retain(|c| c.id != id);
        Ok(codes.len() < before)
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64, AuthServiceError> {
        let mut codes = self.codes.lock().unwrap();
        let before = codes.len();
        codes.retain(|c| c.expires_at > now);
        Ok((before - codes.len()) as u64)
    }
}

// ── MockSessionStore ─────────────────────────────────────────────────────

pub struct MockSessionStore {
    pub sessions: Arc<Mutex<Vec<(String, Uuid)>>>,
}

impl MockSessionStore {
    pub fn empty() -> Self {
        Self {
            sessions: Arc::new(Mutex::new(vec![])),
        }
    }

    /// Shared handle to the internal session list.
    pub fn sessions_handle(&self) -> Arc<Mutex<Vec<(String, Uuid)>>> {
        Arc::clone(&self.sessions)
    }
}

impl SessionStore for MockSessionStore {
    async fn set(
        &self,
        session_id: &str,
        user_id: Uuid,
        _ttl_secs: u64,
    ) -> Result<(), AuthServiceError> {
        self.sessions
            .lock()
            .unwrap()
            .push((session_id.to_owned(), user_id));
        Ok(())
    }

    async fn get(&self, session_id: &str) -> Result<Option<Uuid>, AuthServiceError> {
        Ok(self
            .sessions
            .lock()
            .unwrap()
            .iter()
            .find(|(id, _)| id == session_id)
            .map(|(_, user_id)| *user_id))
    }

    async fn delete(&self, session_id: &str) -> Result<(), AuthServiceError> {
        self.sessions.lock().unwrap().retain(|(id, _)| id != session_id);
        Ok(())
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────

pub const TEST_PHONE: &str = "+15551230000";
pub const TEST_PASSWORD: &str = "correct-horse-battery";
pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-unit-tests-only";

pub fn test_user() -> AuthUser {
    AuthUser {
        id: Uuid::parse_str("00000000-0000-0000-0000-000000000001").unwrap(),
        username: TEST_PHONE.to_owned(),
        phone: TEST_PHONE.to_owned(),
        password_hash: Some(hash_password(TEST_PASSWORD).unwrap()),
        email: None,
        is_banned: false,
        is_admin: false,
        created_at: Utc::now(),
    }
}

pub fn test_admin() -> AuthUser {
    AuthUser {
        id: Uuid::parse_str("00000000-0000-0000-0000-000000000002").unwrap(),
        username: "admin".to_owned(),
        phone: "+15559990000".to_owned(),
        password_hash: Some(hash_password(TEST_PASSWORD).unwrap()),
        email: None,
        is_banned: false,
        is_admin: true,
        created_at: Utc::now(),
    }
}

pub fn test_otp(phone: &str) -> OtpCode {
    OtpCode {
        id: Uuid::new_v4(),
        phone: phone.to_owned(),
        code: "123456".to_owned(),
        expires_at: Utc::now() + Duration::seconds(120),
        created_at: Utc::now(),
    }
}

pub fn expired_otp(phone: &str) -> OtpCode {
    OtpCode {
        id: Uuid::new_v4(),
        phone: phone.to_owned(),
        code: "123456".to_owned(),
        expires_at: Utc::now() - Duration::seconds(1),
        created_at: Utc::now() - Duration::seconds(121),
    }
}
