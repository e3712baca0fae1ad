//! Argon2id password digests.
//!
//! Hashing and verification are CPU-bound and deliberately slow; every call
//! site goes through the `*_blocking` wrappers so the async runtime's worker
//! threads never carry this work.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};

use crate::error::AuthServiceError;

/// Hash a plaintext password into a PHC string. The salt is random per call
/// and embedded in the output; nothing else needs to be stored.
pub fn hash_password(plain: &str) -> Result<String, AuthServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| AuthServiceError::Internal(anyhow::anyhow!("hash password: {e}")))?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored digest.
///
/// Fails closed: an absent or empty digest verifies `false`, never errors.
/// A digest that does not parse as a PHC string is an error, since it means
/// the store is corrupt rather than the caller being wrong.
pub fn verify_password(plain: &str, digest: Option<&str>) -> Result<bool, AuthServiceError> {
    let Some(digest) = digest.filter(|d| !d.is_empty()) else {
        return Ok(false);
    };

    let parsed = PasswordHash::new(digest)
        .map_err(|e| AuthServiceError::Internal(anyhow::anyhow!("parse password digest: {e}")))?;

    match Argon2::default().verify_password(plain.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AuthServiceError::Internal(anyhow::anyhow!(
            "verify password: {e}"
        ))),
    }
}

/// [`hash_password`] on the blocking pool.
pub async fn hash_password_blocking(plain: String) -> Result<String, AuthServiceError> {
    tokio::task::spawn_blocking(move || hash_password(&plain))
        .await
        .map_err(|e| AuthServiceError::Internal(anyhow::anyhow!("hash task join: {e}")))?
}

/// [`verify_password`] on the blocking pool.
pub async fn verify_password_blocking(
    plain: String,
    digest: Option<String>,
) -> Result<bool, AuthServiceError> {
    tokio::task::spawn_blocking(move || verify_password(&plain, digest.as_deref()))
        .await
        .map_err(|e| AuthServiceError::Internal(anyhow::anyhow!("verify task join: {e}")))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_hash_and_verify_round_trip() {
        let digest = hash_password("otp-bound-pass").unwrap();

        assert!(digest.starts_with("$argon2id$"));
        assert!(verify_password("otp-bound-pass", Some(&digest)).unwrap());
    }

    #[test]
    fn should_reject_wrong_password() {
        let digest = hash_password("otp-bound-pass").unwrap();

        assert!(!verify_password("other-pass", Some(&digest)).unwrap());
    }

    #[test]
    fn should_fail_closed_on_absent_digest() {
        assert!(!verify_password("anything", None).unwrap());
        assert!(!verify_password("anything", Some("")).unwrap());
    }

    #[test]
    fn should_error_on_corrupt_digest() {
        let result = verify_password("anything", Some("not-a-phc-string"));
        assert!(result.is_err());
    }

    #[test]
    fn should_salt_each_hash_independently() {
        let a = hash_password("same-input").unwrap();
        let b = hash_password("same-input").unwrap();

        assert_ne!(a, b);
        assert!(verify_password("same-input", Some(&a)).unwrap());
        assert!(verify_password("same-input", Some(&b)).unwrap());
    }
}
