use hamdel_auth::error::AuthServiceError;
use hamdel_auth::usecase::admin::{
    AdminLoginUseCase, AdminLogoutUseCase, DeleteUserUseCase, ListUsersUseCase,
    ToggleUserBanUseCase, ValidateAdminSessionUseCase,
};
use hamdel_domain::pagination::PageRequest;

use crate::helpers::{MockSessionStore, MockUserRepo, TEST_PASSWORD, test_admin, test_user};

// ── AdminLoginUseCase ────────────────────────────────────────────────────

#[tokio::test]
async fn should_login_admin_and_store_session() {
    let admin = test_admin();
    let sessions = MockSessionStore::empty();
    let handle = sessions.sessions_handle();

    let usecase = AdminLoginUseCase {
        users: MockUserRepo::new(vec![admin.clone()]),
        sessions,
        session_ttl_secs: 3600,
    };

    let out = usecase.execute(&admin.phone, TEST_PASSWORD).await.unwrap();

    assert!(!out.session_id.is_empty());
    let stored = handle.lock().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].0, out.session_id);
    assert_eq!(stored[0].1, admin.id);
}

#[tokio::test]
async fn should_collapse_all_login_failures_into_one_error() {
    let admin = test_admin();
    let member = test_user();

    let usecase = AdminLoginUseCase {
        users: MockUserRepo::new(vec![admin.clone(), member.clone()]),
        sessions: MockSessionStore::empty(),
        session_ttl_secs: 3600,
    };

    // Unknown phone.
    let result = usecase.execute("+15550000000", TEST_PASSWORD).await;
    assert!(
        matches!(result, Err(AuthServiceError::InvalidCredential)),
        "expected InvalidCredential, got {result:?}"
    );

    // Wrong password.
    let result = usecase.execute(&admin.phone, "wrong-password").await;
    assert!(
        matches!(result, Err(AuthServiceError::InvalidCredential)),
        "expected InvalidCredential, got {result:?}"
    );

    // Correct password but not an admin.
    let result = usecase.execute(&member.phone, TEST_PASSWORD).await;
    assert!(
        matches!(result, Err(AuthServiceError::InvalidCredential)),
        "expected InvalidCredential, got {result:?}"
    );
}

// ── ValidateAdminSessionUseCase ──────────────────────────────────────────

#[tokio::test]
async fn should_resolve_live_session_to_admin() {
    let admin = test_admin();
    let users = MockUserRepo::new(vec![admin.clone()]);
    let sessions = MockSessionStore::empty();

    let login = AdminLoginUseCase {
        users: MockUserRepo::new(vec![admin.clone()]),
        sessions: MockSessionStore {
            sessions: sessions.sessions_handle(),
        },
        session_ttl_secs: 3600,
    };
    let out = login.execute(&admin.phone, TEST_PASSWORD).await.unwrap();

    let usecase = ValidateAdminSessionUseCase { users, sessions };
    let resolved = usecase.execute(&out.session_id).await.unwrap();
    assert_eq!(resolved.id, admin.id);
}

#[tokio::test]
async fn should_reject_unknown_session() {
    let usecase = ValidateAdminSessionUseCase {
        users: MockUserRepo::new(vec![test_admin()]),
        sessions: MockSessionStore::empty(),
    };

    let result = usecase.execute("no-such-session").await;
    assert!(
        matches!(result, Err(AuthServiceError::InvalidSession)),
        "expected InvalidSession, got {result:?}"
    );
}

#[tokio::test]
async fn should_invalidate_session_when_account_demoted() {
    let admin = test_admin();
    let users = MockUserRepo::new(vec![admin.clone()]);
    let users_handle = users.users_handle();
    let sessions = MockSessionStore::empty();
    sessions
        .sessions_handle()
        .lock()
        .unwrap()
        .push(("session-1".to_owned(), admin.id));

    let usecase = ValidateAdminSessionUseCase { users, sessions };

    // Live admin resolves.
    assert!(usecase.execute("session-1").await.is_ok());

    // Demote mid-session; the same session id now fails.
    users_handle.lock().unwrap()[0].is_admin = false;
    let result = usecase.execute("session-1").await;
    assert!(
        matches!(result, Err(AuthServiceError::InvalidSession)),
        "expected InvalidSession, got {result:?}"
    );
}

// ── AdminLogoutUseCase ───────────────────────────────────────────────────

#[tokio::test]
async fn should_drop_session_on_logout() {
    let admin = test_admin();
    let sessions = MockSessionStore::empty();
    let handle = sessions.sessions_handle();
    handle
        .lock()
        .unwrap()
        .push(("session-1".to_owned(), admin.id));

    let usecase = AdminLogoutUseCase { sessions };
    usecase.execute("session-1").await.unwrap();

    assert!(handle.lock().unwrap().is_empty());
}

// ── ListUsersUseCase ─────────────────────────────────────────────────────

#[tokio::test]
async fn should_filter_and_paginate_user_list() {
    let admin = test_admin();
    let member = test_user();

    let usecase = ListUsersUseCase {
        users: MockUserRepo::new(vec![admin.clone(), member.clone()]),
    };

    // Search hits the username.
    let found = usecase
        .execute(Some("admin"), PageRequest::default())
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, admin.id);

    // Blank search means no filter.
    let all = usecase
        .execute(Some("   "), PageRequest::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 2);

    // Pagination slices.
    let page2 = usecase
        .execute(None, PageRequest { per_page: 1, page: 2 })
        .await
        .unwrap();
    assert_eq!(page2.len(), 1);
}

// ── ToggleUserBanUseCase / DeleteUserUseCase ─────────────────────────────

#[tokio::test]
async fn should_toggle_ban_flag_back_and_forth() {
    let member = test_user();
    let users = MockUserRepo::new(vec![member.clone()]);

    let usecase = ToggleUserBanUseCase { users };

    let banned = usecase.execute(member.id).await.unwrap();
    assert!(banned.is_banned);

    let unbanned = usecase.execute(member.id).await.unwrap();
    assert!(!unbanned.is_banned);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_user_on_toggle() {
    let usecase = ToggleUserBanUseCase {
        users: MockUserRepo::empty(),
    };

    let result = usecase.execute(uuid::Uuid::new_v4()).await;
    assert!(
        matches!(result, Err(AuthServiceError::UserNotFound)),
        "expected UserNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_delete_user_once() {
    let member = test_user();
    let users = MockUserRepo::new(vec![member.clone()]);

    let usecase = DeleteUserUseCase { users };

    usecase.execute(member.id).await.unwrap();

    let result = usecase.execute(member.id).await;
    assert!(
        matches!(result, Err(AuthServiceError::UserNotFound)),
        "expected UserNotFound, got {result:?}"
    );
}
