use chrono::Utc;

use hamdel_auth::error::AuthServiceError;
use hamdel_auth::usecase::otp::{RequestOtpUseCase, VerifyOtpUseCase};

use crate::helpers::{
    MockOtpRepo, MockUserRepo, TEST_PASSWORD, TEST_PHONE, expired_otp, test_otp, test_user,
};

// ── RequestOtpUseCase ────────────────────────────────────────────────────

#[tokio::test]
async fn should_issue_six_digit_code_for_new_phone() {
    let otp_repo = MockOtpRepo::empty();
    let codes = otp_repo.codes_handle();

    let usecase = RequestOtpUseCase {
        otp_repo,
        user_repo: MockUserRepo::empty(),
    };

    let out = usecase.execute(TEST_PHONE, TEST_PASSWORD).await.unwrap();

    assert_eq!(out.code.len(), 6);
    assert!(out.code.chars().all(|c| c.is_ascii_digit()));
    let n: u32 = out.code.parse().unwrap();
    assert!((100_000..=999_999).contains(&n), "got {n}");

    let codes = codes.lock().unwrap();
    assert_eq!(codes.len(), 1);
    assert_eq!(codes[0].phone, TEST_PHONE);
    assert_eq!(codes[0].code, out.code);
    // Roughly two minutes out.
    let ttl = (codes[0].expires_at - Utc::now()).num_seconds();
    assert!((115..=120).contains(&ttl), "got {ttl}");
}

#[tokio::test]
async fn should_keep_only_newest_code_after_second_request() {
    let otp_repo = MockOtpRepo::empty();
    let codes = otp_repo.codes_handle();

    let usecase = RequestOtpUseCase {
        otp_repo,
        user_repo: MockUserRepo::empty(),
    };

    usecase.execute(TEST_PHONE, TEST_PASSWORD).await.unwrap();
    let second = usecase.execute(TEST_PHONE, TEST_PASSWORD).await.unwrap();

    let codes = codes.lock().unwrap();
    assert_eq!(codes.len(), 1, "older codes must be replaced");
    assert_eq!(codes[0].code, second.code);
}

#[tokio::test]
async fn should_accept_both_plus_and_09_phone_shapes() {
    let usecase = RequestOtpUseCase {
        otp_repo: MockOtpRepo::empty(),
        user_repo: MockUserRepo::empty(),
    };

    assert!(usecase.execute("+15551230000", "pw").await.is_ok());
    assert!(usecase.execute("09123456789", "pw").await.is_ok());
}

#[tokio::test]
async fn should_reject_blank_fields_and_bad_phone_shape() {
    let usecase = RequestOtpUseCase {
        otp_repo: MockOtpRepo::empty(),
        user_repo: MockUserRepo::empty(),
    };

    let result = usecase.execute("  ", TEST_PASSWORD).await;
    assert!(
        matches!(result, Err(AuthServiceError::MissingData)),
        "expected MissingData, got {result:?}"
    );

    let result = usecase.execute(TEST_PHONE, "").await;
    assert!(
        matches!(result, Err(AuthServiceError::MissingData)),
        "expected MissingData, got {result:?}"
    );

    let result = usecase.execute("15551230000", TEST_PASSWORD).await;
    assert!(
        matches!(result, Err(AuthServiceError::InvalidPhone)),
        "expected InvalidPhone, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_wrong_password_for_existing_user_without_writing_code() {
    let otp_repo = MockOtpRepo::empty();
    let codes = otp_repo.codes_handle();

    let usecase = RequestOtpUseCase {
        otp_repo,
        user_repo: MockUserRepo::new(vec![test_user()]),
    };

    let result = usecase.execute(TEST_PHONE, "wrong-password").await;

    assert!(
        matches!(result, Err(AuthServiceError::InvalidPassword)),
        "expected InvalidPassword, got {result:?}"
    );
    assert!(
        codes.lock().unwrap().is_empty(),
        "a rejected request must not leave a code behind"
    );
}

#[tokio::test]
async fn should_issue_code_for_existing_user_with_correct_password() {
    let otp_repo = MockOtpRepo::empty();
    let codes = otp_repo.codes_handle();

    let usecase = RequestOtpUseCase {
        otp_repo,
        user_repo: MockUserRepo::new(vec![test_user()]),
    };

    usecase.execute(TEST_PHONE, TEST_PASSWORD).await.unwrap();
    assert_eq!(codes.lock().unwrap().len(), 1);
}

// ── VerifyOtpUseCase ─────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_member_on_first_verification() {
    let user_repo = MockUserRepo::empty();
    let users = user_repo.users_handle();

    let usecase = VerifyOtpUseCase {
        otp_repo: MockOtpRepo::new(vec![test_otp(TEST_PHONE)]),
        user_repo,
    };

    let out = usecase
        .execute(TEST_PHONE, TEST_PASSWORD, "123456")
        .await
        .unwrap();

    assert_eq!(out.user.phone, TEST_PHONE);
    assert_eq!(out.user.username, TEST_PHONE);
    assert!(!out.user.is_banned);
    assert!(!out.user.is_admin);

    let users = users.lock().unwrap();
    assert_eq!(users.len(), 1);
    assert!(users[0].password_hash.is_some(), "digest bound at verify");
}

#[tokio::test]
async fn should_consume_code_so_it_cannot_be_replayed() {
    let otp_repo = MockOtpRepo::new(vec![test_otp(TEST_PHONE)]);
    let codes = otp_repo.codes_handle();

    let usecase = VerifyOtpUseCase {
        otp_repo,
        user_repo: MockUserRepo::empty(),
    };

    usecase
        .execute(TEST_PHONE, TEST_PASSWORD, "123456")
        .await
        .unwrap();
    assert!(codes.lock().unwrap().is_empty(), "code must be deleted");

    let result = usecase.execute(TEST_PHONE, TEST_PASSWORD, "123456").await;
    assert!(
        matches!(result, Err(AuthServiceError::InvalidOtpCode)),
        "expected InvalidOtpCode, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_expired_code_with_same_error_as_wrong_code() {
    let usecase = VerifyOtpUseCase {
        otp_repo: MockOtpRepo::new(vec![expired_otp(TEST_PHONE)]),
        user_repo: MockUserRepo::empty(),
    };

    let expired = usecase.execute(TEST_PHONE, TEST_PASSWORD, "123456").await;
    assert!(
        matches!(expired, Err(AuthServiceError::InvalidOtpCode)),
        "expected InvalidOtpCode, got {expired:?}"
    );

    let wrong = usecase.execute(TEST_PHONE, TEST_PASSWORD, "654321").await;
    assert!(
        matches!(wrong, Err(AuthServiceError::InvalidOtpCode)),
        "expected InvalidOtpCode, got {wrong:?}"
    );
}

#[tokio::test]
async fn should_consume_code_even_when_password_is_wrong() {
    let otp_repo = MockOtpRepo::new(vec![test_otp(TEST_PHONE)]);
    let codes = otp_repo.codes_handle();

    let usecase = VerifyOtpUseCase {
        otp_repo,
        user_repo: MockUserRepo::new(vec![test_user()]),
    };

    let result = usecase
        .execute(TEST_PHONE, "wrong-password", "123456")
        .await;

    assert!(
        matches!(result, Err(AuthServiceError::InvalidPassword)),
        "expected InvalidPassword, got {result:?}"
    );
    assert!(
        codes.lock().unwrap().is_empty(),
        "the code is single-use no matter how the account work ends"
    );
}

#[tokio::test]
async fn should_verify_existing_user_with_correct_password() {
    let user = test_user();

    let usecase = VerifyOtpUseCase {
        otp_repo: MockOtpRepo::new(vec![test_otp(TEST_PHONE)]),
        user_repo: MockUserRepo::new(vec![user.clone()]),
    };

    let out = usecase
        .execute(TEST_PHONE, TEST_PASSWORD, "123456")
        .await
        .unwrap();
    assert_eq!(out.user.id, user.id);
}

#[tokio::test]
async fn should_fail_closed_for_existing_user_without_digest() {
    let mut user = test_user();
    user.password_hash = None;

    let usecase = VerifyOtpUseCase {
        otp_repo: MockOtpRepo::new(vec![test_otp(TEST_PHONE)]),
        user_repo: MockUserRepo::new(vec![user]),
    };

    let result = usecase.execute(TEST_PHONE, TEST_PASSWORD, "123456").await;
    assert!(
        matches!(result, Err(AuthServiceError::InvalidPassword)),
        "expected InvalidPassword, got {result:?}"
    );
}
