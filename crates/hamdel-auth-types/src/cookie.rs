//! Cookie builder for the admin panel session.
//!
//! The session cookie carries an opaque server-side id, never a token. It is
//! scoped to `/admin` so the community surface never sees it.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

/// Cookie name for the admin session id.
pub const ADMIN_SESSION_COOKIE: &str = "hamdel_admin_session";

/// Set the admin session cookie on the jar.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use hamdel_auth_types::cookie::{set_admin_session_cookie, ADMIN_SESSION_COOKIE};
///
/// let jar = CookieJar::new();
/// let jar = set_admin_session_cookie(jar, "session_id".to_string(), 3600);
/// let cookie = jar.get(ADMIN_SESSION_COOKIE).unwrap();
/// assert_eq!(cookie.path(), Some("/admin"));
/// assert_eq!(cookie.max_age(), Some(time::Duration::seconds(3600)));
/// assert!(cookie.http_only().unwrap_or(false));
/// ```
pub fn set_admin_session_cookie(jar: CookieJar, value: String, max_age_secs: u64) -> CookieJar {
    let cookie = Cookie::build((ADMIN_SESSION_COOKIE, value))
        .path("/admin")
        .max_age(Duration::seconds(max_age_secs as i64))
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();
    jar.add(cookie)
}

/// Clear the admin session cookie by setting Max-Age to 0.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use hamdel_auth_types::cookie::{
///     clear_admin_session_cookie, set_admin_session_cookie, ADMIN_SESSION_COOKIE,
/// };
///
/// let jar = CookieJar::new();
/// let jar = set_admin_session_cookie(jar, "session_id".to_string(), 3600);
/// let jar = clear_admin_session_cookie(jar);
/// let cookie = jar.get(ADMIN_SESSION_COOKIE).unwrap();
/// assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
/// ```
pub fn clear_admin_session_cookie(jar: CookieJar) -> CookieJar {
    let cookie = Cookie::build((ADMIN_SESSION_COOKIE, ""))
        .path("/admin")
        .max_age(Duration::ZERO)
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();
    jar.add(cookie)
}
