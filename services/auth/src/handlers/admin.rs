use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hamdel_auth_types::cookie::{
    ADMIN_SESSION_COOKIE, clear_admin_session_cookie, set_admin_session_cookie,
};
use hamdel_domain::pagination::PageRequest;

use crate::domain::types::AuthUser;
use crate::error::AuthServiceError;
use crate::state::AppState;
use crate::usecase::admin::{
    AdminLoginUseCase, AdminLogoutUseCase, DeleteUserUseCase, ListUsersUseCase,
    ToggleUserBanUseCase, ValidateAdminSessionUseCase,
};

/// Resolve the session cookie to a live admin account, or 401.
async fn require_admin(state: &AppState, jar: &CookieJar) -> Result<AuthUser, AuthServiceError> {
    let session_id = jar
        .get(ADMIN_SESSION_COOKIE)
        .map(|c| c.value().to_owned())
        .ok_or(AuthServiceError::InvalidSession)?;

    let usecase = ValidateAdminSessionUseCase {
        users: state.user_repo(),
        sessions: state.session_store(),
    };
    usecase.execute(&session_id).await
}

// ── POST /admin/login ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct AdminLoginRequest {
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<AdminLoginRequest>,
) -> Result<impl IntoResponse, AuthServiceError> {
    let usecase = AdminLoginUseCase {
        users: state.user_repo(),
        sessions: state.session_store(),
        session_ttl_secs: state.admin_session_ttl_secs,
    };

    let out = usecase.execute(&body.phone, &body.password).await?;

    let jar = set_admin_session_cookie(jar, out.session_id, state.admin_session_ttl_secs);
    Ok((StatusCode::NO_CONTENT, jar))
}

// ── POST /admin/logout ───────────────────────────────────────────────────

pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AuthServiceError> {
    if let Some(cookie) = jar.get(ADMIN_SESSION_COOKIE) {
        let usecase = AdminLogoutUseCase {
            sessions: state.session_store(),
        };
        usecase.execute(cookie.value()).await?;
    }

    let jar = clear_admin_session_cookie(jar);
    Ok((StatusCode::NO_CONTENT, jar))
}

// ── GET /admin/users ─────────────────────────────────────────────────────

// Pagination fields stay plain options here: serde_qs cannot flatten
// non-string fields.
#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct ListUsersQuery {
    pub q: Option<String>,
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

#[derive(Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub phone: String,
    pub email: Option<String>,
    pub is_banned: bool,
    pub is_admin: bool,
    #[serde(serialize_with = "hamdel_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

pub async fn list_users(
    State(state): State<AppState>,
    jar: CookieJar,
    axum::extract::RawQuery(raw_query): axum::extract::RawQuery,
) -> Result<Json<Vec<UserResponse>>, AuthServiceError> {
    require_admin(&state, &jar).await?;

    let query: ListUsersQuery = raw_query
        .as_deref()
        .map(serde_qs::from_str)
        .transpose()
        .map_err(|_| AuthServiceError::InvalidQuery)?
        .unwrap_or_default();

    let page = PageRequest {
        per_page: query.per_page.unwrap_or(20),
        page: query.page.unwrap_or(1),
    };

    let usecase = ListUsersUseCase {
        users: state.user_repo(),
    };
    let users = usecase.execute(query.q.as_deref(), page).await?;

    Ok(Json(
        users
            .into_iter()
            .map(|user| UserResponse {
                id: user.id.to_string(),
                username: user.username,
                phone: user.phone,
                email: user.email,
                is_banned: user.is_banned,
                is_admin: user.is_admin,
                created_at: user.created_at,
            })
            .collect(),
    ))
}

// ── POST /admin/users/{user_id}/toggle-ban ───────────────────────────────

#[derive(Serialize)]
pub struct ToggleBanResponse {
    pub id: String,
    pub is_banned: bool,
}

pub async fn toggle_ban(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(user_id): Path<String>,
) -> Result<Json<ToggleBanResponse>, AuthServiceError> {
    require_admin(&state, &jar).await?;

    let user_id = user_id
        .parse::<Uuid>()
        .map_err(|_| AuthServiceError::InvalidId)?;

    let usecase = ToggleUserBanUseCase {
        users: state.user_repo(),
    };
    let user = usecase.execute(user_id).await?;

    Ok(Json(ToggleBanResponse {
        id: user.id.to_string(),
        is_banned: user.is_banned,
    }))
}

// ── DELETE /admin/users/{user_id} ────────────────────────────────────────

pub async fn delete_user(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(user_id): Path<String>,
) -> Result<StatusCode, AuthServiceError> {
    require_admin(&state, &jar).await?;

    let user_id = user_id
        .parse::<Uuid>()
        .map_err(|_| AuthServiceError::InvalidId)?;

    let usecase = DeleteUserUseCase {
        users: state.user_repo(),
    };
    usecase.execute(user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
