//! JWT minting for tests.

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{EncodingKey, Header, encode};

use hamdel_auth_types::token::{JwtClaims, TokenKind};

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

/// Mint a token with an explicit expiry.
///
/// To test expiry, pass an `exp` well over 60 s in the past; the validator
/// tolerates that much clock skew.
pub fn mint_token_with_exp(phone: &str, kind: TokenKind, exp: u64, secret: &str) -> String {
    let claims = JwtClaims {
        sub: phone.to_string(),
        kind,
        iat: exp.saturating_sub(60),
        exp,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("mint test token")
}

/// A live access token for `phone`.
pub fn mint_access_token(phone: &str, secret: &str) -> String {
    mint_token_with_exp(phone, TokenKind::Access, now_secs() + 3600, secret)
}

/// A live refresh token for `phone`.
pub fn mint_refresh_token(phone: &str, secret: &str) -> String {
    mint_token_with_exp(phone, TokenKind::Refresh, now_secs() + 2_592_000, secret)
}

/// An access token that expired an hour ago.
pub fn mint_expired_access_token(phone: &str, secret: &str) -> String {
    mint_token_with_exp(phone, TokenKind::Access, now_secs() - 3600, secret)
}
