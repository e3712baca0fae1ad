use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{EncodingKey, Header, encode};

use hamdel_auth_types::token::{AuthError, JwtClaims, TokenKind, decode_jwt};

use crate::domain::repository::UserRepository;
use crate::error::AuthServiceError;

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

pub fn issue_token(
    phone: &str,
    kind: TokenKind,
    ttl_secs: u64,
    secret: &str,
) -> Result<String, AuthServiceError> {
    let iat = now_secs();
    let claims = JwtClaims {
        sub: phone.to_string(),
        kind,
        iat,
        exp: iat + ttl_secs,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AuthServiceError::Internal(e.into()))
}

// ── MintTokenPair (after phone verification) ─────────────────────────────

#[derive(Debug)]
pub struct MintTokenPairOutput {
    pub access_token: String,
    pub refresh_token: String,
}

/// Mint a fresh access + refresh pair for a verified phone. Callers resolve
/// the account first; this step only signs.
pub struct MintTokenPairUseCase {
    pub jwt_secret: String,
    pub access_ttl_secs: u64,
    pub refresh_ttl_secs: u64,
}

impl MintTokenPairUseCase {
    pub fn execute(&self, phone: &str) -> Result<MintTokenPairOutput, AuthServiceError> {
        let access_token = issue_token(
            phone,
            TokenKind::Access,
            self.access_ttl_secs,
            &self.jwt_secret,
        )?;
        let refresh_token = issue_token(
            phone,
            TokenKind::Refresh,
            self.refresh_ttl_secs,
            &self.jwt_secret,
        )?;
        Ok(MintTokenPairOutput {
            access_token,
            refresh_token,
        })
    }
}

// ── RefreshToken ─────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct RefreshTokenOutput {
    pub access_token: String,
}

/// Exchange a live refresh token for a new access token. The refresh token
/// itself is not rotated; it stays valid until its own expiry.
pub struct RefreshTokenUseCase<U: UserRepository> {
    pub users: U,
    pub jwt_secret: String,
    pub access_ttl_secs: u64,
}

impl<U: UserRepository> RefreshTokenUseCase<U> {
    pub async fn execute(
        &self,
        refresh_token_value: &str,
    ) -> Result<RefreshTokenOutput, AuthServiceError> {
        // 1. Signature and expiry. An expired refresh token is its own case;
        //    the client must restart phone verification.
        let claims = decode_jwt(refresh_token_value, &self.jwt_secret).map_err(|e| match e {
            AuthError::Expired => AuthServiceError::ExpiredRefreshToken,
            AuthError::InvalidSignature | AuthError::Malformed | AuthError::WrongKind => {
                AuthServiceError::InvalidRefreshToken
            }
        })?;

        // 2. An access token is never accepted here, however fresh.
        if claims.kind != TokenKind::Refresh {
            return Err(AuthServiceError::InvalidRefreshToken);
        }

        // 3. The subject must still exist; deleted accounts cannot mint.
        let user = self
            .users
            .find_by_phone(&claims.sub)
            .await?
            .ok_or(AuthServiceError::UserNotFound)?;

        let access_token = issue_token(
            &user.phone,
            TokenKind::Access,
            self.access_ttl_secs,
            &self.jwt_secret,
        )?;

        Ok(RefreshTokenOutput { access_token })
    }
}
