//! `Authorization: Bearer` header extractor.

use axum::extract::FromRequestParts;
use http::StatusCode;
use http::header::AUTHORIZATION;
use http::request::Parts;

/// Raw bearer token pulled from the `Authorization` header.
///
/// Rejects with 401 when the header is absent, is not `Bearer `-prefixed,
/// or carries an empty token. No signature validation happens here; the
/// service validates the token against its secret afterwards.
#[derive(Debug, Clone)]
pub struct Bearer(pub String);

impl Bearer {
    pub fn token(&self) -> &str {
        &self.0
    }
}

impl<S> FromRequestParts<S> for Bearer
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // In Rust 1.82+ precise capturing, `async fn` captures lifetimes differently,
    // causing E0195. Fix: extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.strip_prefix("Bearer "))
            .filter(|t| !t.is_empty())
            .map(str::to_owned);

        async move {
            let token = token.ok_or(StatusCode::UNAUTHORIZED)?;
            Ok(Self(token))
        }
    }
}
