use hamdel_auth::error::AuthServiceError;
use hamdel_auth::usecase::token::{MintTokenPairUseCase, RefreshTokenUseCase};
use hamdel_auth_types::token::{TokenKind, decode_jwt, validate_access_token};
use hamdel_testing::token::{mint_refresh_token, mint_token_with_exp};

use crate::helpers::{MockUserRepo, TEST_JWT_SECRET, TEST_PHONE, test_user};

fn mint_pair_usecase() -> MintTokenPairUseCase {
    MintTokenPairUseCase {
        jwt_secret: TEST_JWT_SECRET.to_owned(),
        access_ttl_secs: 3600,
        refresh_ttl_secs: 2_592_000,
    }
}

fn refresh_usecase(users: MockUserRepo) -> RefreshTokenUseCase<MockUserRepo> {
    RefreshTokenUseCase {
        users,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
        access_ttl_secs: 3600,
    }
}

// ── MintTokenPairUseCase ─────────────────────────────────────────────────

#[tokio::test]
async fn should_mint_pair_with_matching_subject_and_kinds() {
    let pair = mint_pair_usecase().execute(TEST_PHONE).unwrap();

    let access = validate_access_token(&pair.access_token, TEST_JWT_SECRET).unwrap();
    assert_eq!(access.phone, TEST_PHONE);

    let refresh = decode_jwt(&pair.refresh_token, TEST_JWT_SECRET).unwrap();
    assert_eq!(refresh.kind, TokenKind::Refresh);
    assert_eq!(refresh.sub, TEST_PHONE);
}

// ── RefreshTokenUseCase ──────────────────────────────────────────────────

#[tokio::test]
async fn should_mint_fresh_access_token_from_refresh_token() {
    let user = test_user();
    let refresh = mint_refresh_token(&user.phone, TEST_JWT_SECRET);

    let usecase = refresh_usecase(MockUserRepo::new(vec![user.clone()]));
    let out = usecase.execute(&refresh).await.unwrap();

    let info = validate_access_token(&out.access_token, TEST_JWT_SECRET).unwrap();
    assert_eq!(info.phone, user.phone);
}

#[tokio::test]
async fn should_reject_access_token_presented_for_refresh() {
    let pair = mint_pair_usecase().execute(TEST_PHONE).unwrap();

    let usecase = refresh_usecase(MockUserRepo::new(vec![test_user()]));
    let result = usecase.execute(&pair.access_token).await;

    assert!(
        matches!(result, Err(AuthServiceError::InvalidRefreshToken)),
        "expected InvalidRefreshToken, got {result:?}"
    );
}

#[tokio::test]
async fn should_report_expired_refresh_token_as_expired() {
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs();
    // Well past the validator's 60 s leeway.
    let refresh = mint_token_with_exp(TEST_PHONE, TokenKind::Refresh, now - 3600, TEST_JWT_SECRET);

    let usecase = refresh_usecase(MockUserRepo::new(vec![test_user()]));
    let result = usecase.execute(&refresh).await;

    assert!(
        matches!(result, Err(AuthServiceError::ExpiredRefreshToken)),
        "expected ExpiredRefreshToken, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_refresh_token_signed_with_wrong_secret() {
    let refresh = mint_refresh_token(TEST_PHONE, "other-secret");

    let usecase = refresh_usecase(MockUserRepo::new(vec![test_user()]));
    let result = usecase.execute(&refresh).await;

    assert!(
        matches!(result, Err(AuthServiceError::InvalidRefreshToken)),
        "expected InvalidRefreshToken, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_garbage_refresh_token() {
    let usecase = refresh_usecase(MockUserRepo::new(vec![test_user()]));
    let result = usecase.execute("not-a-jwt").await;

    assert!(
        matches!(result, Err(AuthServiceError::InvalidRefreshToken)),
        "expected InvalidRefreshToken, got {result:?}"
    );
}

#[tokio::test]
async fn should_return_not_found_when_subject_user_deleted() {
    let refresh = mint_refresh_token(TEST_PHONE, TEST_JWT_SECRET);

    let usecase = refresh_usecase(MockUserRepo::empty());
    let result = usecase.execute(&refresh).await;

    assert!(
        matches!(result, Err(AuthServiceError::UserNotFound)),
        "expected UserNotFound, got {result:?}"
    );
}
