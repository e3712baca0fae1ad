//! Phone verification flows: code issuance and code consumption.

use chrono::Utc;
use rand::RngExt;

use crate::domain::repository::{OtpCodeRepository, UserRepository};
use crate::domain::types::{AuthUser, OTP_CODE_MAX, OTP_CODE_MIN, OtpCode, validate_phone};
use crate::error::AuthServiceError;
use crate::password::{hash_password_blocking, verify_password_blocking};

/// Uniform 6-digit code.
fn generate_code() -> String {
    let mut rng = rand::rng();
    rng.random_range(OTP_CODE_MIN..=OTP_CODE_MAX).to_string()
}

/// Issue a verification code for a phone, replacing any earlier codes.
pub struct RequestOtpUseCase<O, U> {
    pub otp_repo: O,
    pub user_repo: U,
}

#[derive(Debug)]
pub struct RequestOtpOutput {
    /// The issued code. Handlers expose this only on deployments that opt
    /// in; it never goes to logs.
    pub code: String,
}

impl<O: OtpCodeRepository, U: UserRepository> RequestOtpUseCase<O, U> {
    pub async fn execute(
        &self,
        phone: &str,
        password: &str,
    ) -> Result<RequestOtpOutput, AuthServiceError> {
        // 1. Validate input shape.
        if phone.trim().is_empty() || password.is_empty() {
            return Err(AuthServiceError::MissingData);
        }
        if !validate_phone(phone) {
            return Err(AuthServiceError::InvalidPhone);
        }

        // 2. An existing account with a digest must present the matching
        //    password BEFORE any code is written; otherwise anyone could
        //    trigger SMS traffic against a known phone. Brand-new phones
        //    bind their password at verify time.
        if let Some(user) = self.user_repo.find_by_phone(phone).await? {
            if user.password_hash.is_some()
                && !verify_password_blocking(password.to_string(), user.password_hash).await?
            {
                return Err(AuthServiceError::InvalidPassword);
            }
        }

        // 3. Issue: fresh uniform code, two-minute expiry, replacing every
        //    earlier code for this phone in one transaction.
        let code = generate_code();
        let otp = OtpCode::issue(phone, code.clone(), Utc::now());
        self.otp_repo.replace_for_phone(&otp).await?;

        tracing::debug!(phone, "verification code issued");

        Ok(RequestOtpOutput { code })
    }
}

/// Consume a verification code and resolve the account behind it, creating
/// the account on a phone's first verification.
pub struct VerifyOtpUseCase<O, U> {
    pub otp_repo: O,
    pub user_repo: U,
}

#[derive(Debug)]
pub struct VerifyOtpOutput {
    pub user: AuthUser,
}

impl<O: OtpCodeRepository, U: UserRepository> VerifyOtpUseCase<O, U> {
    pub async fn execute(
        &self,
        phone: &str,
        password: &str,
        code: &str,
    ) -> Result<VerifyOtpOutput, AuthServiceError> {
        // 1. Validate input shape.
        if phone.trim().is_empty() || password.is_empty() || code.trim().is_empty() {
            return Err(AuthServiceError::MissingData);
        }
        if !validate_phone(phone) {
            return Err(AuthServiceError::InvalidPhone);
        }

        // 2. Exact match, then expiry. Wrong and expired codes return the
        //    same error; the sweeper owns removal of expired rows.
        let otp = self
            .otp_repo
            .find_by_phone_and_code(phone, code)
            .await?
            .ok_or(AuthServiceError::InvalidOtpCode)?;
        if otp.is_expired(Utc::now()) {
            return Err(AuthServiceError::InvalidOtpCode);
        }

        // 3. Single use: the row dies before any account work, so a failure
        //    below cannot leave a replayable code behind.
        self.otp_repo.delete(otp.id).await?;

        // 4. First verification creates the account; later ones must match
        //    the stored digest. An account without a digest fails closed.
        let user = match self.user_repo.find_by_phone(phone).await? {
            None => {
                let digest = hash_password_blocking(password.to_string()).await?;
                let user = AuthUser::new_member(phone, digest);
                self.user_repo.create(&user).await?;
                user
            }
            Some(user) => {
                if !verify_password_blocking(password.to_string(), user.password_hash.clone())
                    .await?
                {
                    return Err(AuthServiceError::InvalidPassword);
                }
                user
            }
        };

        Ok(VerifyOtpOutput { user })
    }
}
