//! JWT validation for the phone-bound token pair.

use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

/// Discriminates the two halves of the token pair. Carried in the `type`
/// claim; every consumer checks it against the endpoint being served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// Identity extracted from a validated access token.
#[derive(Debug, Clone)]
pub struct TokenInfo {
    /// Subject phone number.
    pub phone: String,
    /// Expiration timestamp (seconds since UNIX epoch).
    pub expires_at: u64,
}

/// Errors returned by token validation.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
    #[error("wrong token kind")]
    WrongKind,
}

/// JWT claims payload shared by token creation (auth service) and validation
/// (every bearer-guarded service).
///
/// # Fields
///
/// | Field  | JWT claim | Rust type | Meaning |
/// |--------|-----------|-----------|---------|
/// | `sub`  | `sub`     | phone string | subject phone number |
/// | `kind` | `type`    | `TokenKind` | `access` or `refresh` |
/// | `iat`  | `iat`     | seconds since epoch | issued at |
/// | `exp`  | `exp`     | seconds since epoch | expiration |
///
/// # Feature gate
///
/// [`Deserialize`] is always available — all consumers validate tokens.
/// [`Serialize`] requires the **`USE_ONLY_IN_AUTH_SERVICE`** cargo feature.
/// Only the auth service (and the test-support crate) enable it, because the
/// auth service is the sole token issuer.
#[derive(Debug, Deserialize)]
#[cfg_attr(any(feature = "USE_ONLY_IN_AUTH_SERVICE", test), derive(Serialize))]
pub struct JwtClaims {
    /// Subject phone number.
    pub sub: String,
    /// Token kind (`access` or `refresh`).
    #[serde(rename = "type")]
    pub kind: TokenKind,
    /// Issued-at timestamp (seconds since UNIX epoch).
    pub iat: u64,
    /// Expiration timestamp (seconds since UNIX epoch).
    pub exp: u64,
}

// ── Core decode ──────────────────────────────────────────────────────────

/// Decode and validate a JWT, returning raw claims.
///
/// Validation: HS256, exp checked, required claims: `exp` + `sub`.
/// Default leeway = 60s — tolerates clock skew between services.
/// The `type` claim is NOT checked here; callers match it against the
/// endpoint they serve.
pub fn decode_jwt(token: &str, secret: &str) -> Result<JwtClaims, AuthError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature
        | jsonwebtoken::errors::ErrorKind::InvalidEcdsaKey
        | jsonwebtoken::errors::ErrorKind::InvalidRsaKey(_) => AuthError::InvalidSignature,
        _ => AuthError::Malformed,
    })?;

    Ok(data.claims)
}

// ── Public: all consumers ────────────────────────────────────────────────

/// Validate a bearer token as an ACCESS token, returning the subject.
///
/// This is the only entry point bearer-guarded services use. A refresh
/// token presented here fails with [`AuthError::WrongKind`] even when its
/// signature and expiry are fine.
pub fn validate_access_token(token: &str, secret: &str) -> Result<TokenInfo, AuthError> {
    let claims = decode_jwt(token, secret)?;
    if claims.kind != TokenKind::Access {
        return Err(AuthError::WrongKind);
    }
    Ok(TokenInfo {
        phone: claims.sub,
        expires_at: claims.exp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};

    const TEST_SECRET: &str = "test-secret-key-for-unit-tests";

    fn now_secs() -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs()
    }

    fn make_token(sub: &str, kind: TokenKind, exp: u64) -> String {
        let iat = now_secs();
        let claims = JwtClaims {
            sub: sub.to_string(),
            kind,
            iat,
            exp,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn should_validate_valid_access_token() {
        let token = make_token("+15551230000", TokenKind::Access, now_secs() + 3600);

        let info = validate_access_token(&token, TEST_SECRET).unwrap();
        assert_eq!(info.phone, "+15551230000");
        assert!(info.expires_at > now_secs());
    }

    #[test]
    fn should_reject_expired_token_as_expired() {
        // Far in the past so the 60s default leeway cannot save it.
        let token = make_token("+15551230000", TokenKind::Access, now_secs() - 3600);

        let err = validate_access_token(&token, TEST_SECRET).unwrap_err();
        assert!(matches!(err, AuthError::Expired), "got {err:?}");
    }

    #[test]
    fn should_reject_wrong_secret() {
        let token = make_token("+15551230000", TokenKind::Access, now_secs() + 3600);

        let err = validate_access_token(&token, "wrong-secret").unwrap_err();
        assert!(matches!(err, AuthError::InvalidSignature), "got {err:?}");
    }

    #[test]
    fn should_reject_malformed_token() {
        let err = validate_access_token("not-a-jwt", TEST_SECRET).unwrap_err();
        assert!(matches!(err, AuthError::Malformed), "got {err:?}");
    }

    #[test]
    fn should_reject_refresh_token_presented_as_access() {
        let token = make_token("+15551230000", TokenKind::Refresh, now_secs() + 3600);

        let err = validate_access_token(&token, TEST_SECRET).unwrap_err();
        assert!(matches!(err, AuthError::WrongKind), "got {err:?}");
    }

    #[test]
    fn should_expose_kind_through_decode_jwt() {
        let token = make_token("+15551230000", TokenKind::Refresh, now_secs() + 3600);

        let claims = decode_jwt(&token, TEST_SECRET).unwrap();
        assert_eq!(claims.kind, TokenKind::Refresh);
        assert_eq!(claims.sub, "+15551230000");
    }

    #[test]
    fn should_serialize_kind_into_type_claim() {
        let claims = JwtClaims {
            sub: "+15551230000".to_string(),
            kind: TokenKind::Access,
            iat: 1,
            exp: 2,
        };
        let json = serde_json::to_string(&claims).unwrap();
        assert!(json.contains("\"type\":\"access\""), "got {json}");
    }
}
