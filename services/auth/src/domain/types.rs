//! Core auth domain types.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// Verification codes live this long after issuance.
pub const OTP_TTL_SECS: i64 = 120;

/// Inclusive bounds of the uniform 6-digit verification code.
pub const OTP_CODE_MIN: u32 = 100_000;
pub const OTP_CODE_MAX: u32 = 999_999;

/// User account as seen by usecases.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    pub username: String,
    pub phone: String,
    /// PHC-string digest; `None` for accounts that never bound a password.
    pub password_hash: Option<String>,
    pub email: Option<String>,
    pub is_banned: bool,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl AuthUser {
    /// Account created on first OTP verification. The display name defaults
    /// to the phone number; both member flags start false.
    pub fn new_member(phone: &str, password_hash: String) -> Self {
        Self {
            id: Uuid::now_v7(),
            username: phone.to_string(),
            phone: phone.to_string(),
            password_hash: Some(password_hash),
            email: None,
            is_banned: false,
            is_admin: false,
            created_at: Utc::now(),
        }
    }
}

/// A pending one-time verification code.
#[derive(Debug, Clone)]
pub struct OtpCode {
    pub id: Uuid,
    pub phone: String,
    pub code: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl OtpCode {
    /// Build a fresh code for `phone`, expiring [`OTP_TTL_SECS`] after `now`.
    pub fn issue(phone: &str, code: String, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            phone: phone.to_string(),
            code,
            expires_at: now + Duration::seconds(OTP_TTL_SECS),
            created_at: now,
        }
    }

    /// Expiry is inclusive: a code whose `expires_at` equals `now` is dead.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// Accepted phone shapes: international (`+...`) or the national `09...`
/// form. Anything else never reaches the store.
pub fn validate_phone(phone: &str) -> bool {
    (phone.starts_with('+') && phone.len() > 1) || phone.starts_with("09")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_international_and_national_phones() {
        assert!(validate_phone("+15551230000"));
        assert!(validate_phone("+989121234567"));
        assert!(validate_phone("09121234567"));
    }

    #[test]
    fn should_reject_other_phone_shapes() {
        assert!(!validate_phone(""));
        assert!(!validate_phone("+"));
        assert!(!validate_phone("15551230000"));
        assert!(!validate_phone("0812345678"));
    }

    #[test]
    fn should_issue_code_with_two_minute_expiry() {
        let now = Utc::now();
        let otp = OtpCode::issue("+15551230000", "123456".to_string(), now);

        assert_eq!(otp.phone, "+15551230000");
        assert_eq!(otp.expires_at, now + Duration::seconds(120));
        assert!(!otp.is_expired(now));
    }

    #[test]
    fn should_treat_expiry_instant_as_expired() {
        let now = Utc::now();
        let otp = OtpCode::issue("+15551230000", "123456".to_string(), now);

        assert!(otp.is_expired(otp.expires_at));
        assert!(otp.is_expired(otp.expires_at + Duration::seconds(1)));
        assert!(!otp.is_expired(otp.expires_at - Duration::seconds(1)));
    }

    #[test]
    fn should_default_new_member_name_to_phone() {
        let user = AuthUser::new_member("+15551230000", "digest".to_string());

        assert_eq!(user.username, "+15551230000");
        assert_eq!(user.phone, "+15551230000");
        assert!(!user.is_banned);
        assert!(!user.is_admin);
        assert!(user.password_hash.is_some());
    }
}
