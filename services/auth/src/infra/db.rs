use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    IntoActiveModel as _, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
    sea_query::{Expr, extension::postgres::PgExpr as _},
};
use uuid::Uuid;

use hamdel_auth_schema::{otp_codes, users};
use hamdel_domain::pagination::PageRequest;

use crate::domain::repository::{OtpCodeRepository, UserRepository};
use crate::domain::types::{AuthUser, OtpCode};
use crate::error::AuthServiceError;

// ── User repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_phone(&self, phone: &str) -> Result<Option<AuthUser>, AuthServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Phone.eq(phone))
            .one(&self.db)
            .await
            .context("find user by phone")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<AuthUser>, AuthServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &AuthUser) -> Result<(), AuthServiceError> {
        users::ActiveModel {
            id: Set(user.id),
            username: Set(user.username.clone()),
            phone: Set(user.phone.clone()),
            password_hash: Set(user.password_hash.clone()),
            email: Set(user.email.clone()),
            is_banned: Set(user.is_banned),
            is_admin: Set(user.is_admin),
            created_at: Set(user.created_at),
        }
        .insert(&self.db)
        .await
        .context("create user")?;
        Ok(())
    }

    async fn list(
        &self,
        search: Option<&str>,
        page: PageRequest,
    ) -> Result<Vec<AuthUser>, AuthServiceError> {
        let mut query = users::Entity::find();
        if let Some(term) = search {
            let pattern = format!("%{}%", escape_like(term));
            query = query.filter(
                Condition::any()
                    .add(Expr::col((users::Entity, users::Column::Username)).ilike(&pattern))
                    .add(Expr::col((users::Entity, users::Column::Phone)).ilike(&pattern)),
            );
        }
        let models = query
            .order_by_desc(users::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list users")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn set_banned(
        &self,
        id: Uuid,
        banned: bool,
    ) -> Result<Option<AuthUser>, AuthServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user for ban update")?;
        let Some(model) = model else {
            return Ok(None);
        };
        let mut active = model.into_active_model();
        active.is_banned = Set(banned);
        let updated = active
            .update(&self.db)
            .await
            .context("update user banned flag")?;
        Ok(Some(user_from_model(updated)))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AuthServiceError> {
        let result = users::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete user")?;
        Ok(result.rows_affected > 0)
    }
}

// LIKE wildcards in a search term must match literally.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

fn user_from_model(model: users::Model) -> AuthUser {
    AuthUser {
        id: model.id,
        username: model.username,
        phone: model.phone,
        password_hash: model.password_hash,
        email: model.email,
        is_banned: model.is_banned,
        is_admin: model.is_admin,
        created_at: model.created_at,
    }
}

// ── Otp code repository ──────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbOtpCodeRepository {
    pub db: DatabaseConnection,
}

impl OtpCodeRepository for DbOtpCodeRepository {
    async fn replace_for_phone(&self, otp: &OtpCode) -> Result<(), AuthServiceError> {
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                let otp = otp.clone();
                Box::pin(async move {
                    otp_codes::Entity::delete_many()
                        .filter(otp_codes::Column::Phone.eq(otp.phone.clone()))
                        .exec(txn)
                        .await?;
                    otp_codes::ActiveModel {
                        id: Set(otp.id),
                        phone: Set(otp.phone),
                        code: Set(otp.code),
                        expires_at: Set(otp.expires_at),
                        created_at: Set(otp.created_at),
                    }
                    .insert(txn)
                    .await?;
                    Ok(())
                })
            })
            .await
            .context("replace otp codes for phone")?;
        Ok(())
    }

    async fn find_by_phone_and_code(
        &self,
        phone: &str,
        code: &str,
    ) -> Result<Option<OtpCode>, AuthServiceError> {
        let model = otp_codes::Entity::find()
            .filter(otp_codes::Column::Phone.eq(phone))
            .filter(otp_codes::Column::Code.eq(code))
            .one(&self.db)
            .await
            .context("find otp code")?;
        Ok(model.map(otp_from_model))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AuthServiceError> {
        let result = otp_codes::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete otp code")?;
        Ok(result.rows_affected > 0)
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64, AuthServiceError> {
        let result = otp_codes::Entity::delete_many()
            .filter(otp_codes::Column::ExpiresAt.lte(now))
            .exec(&self.db)
            .await
            .context("purge expired otp codes")?;
        Ok(result.rows_affected)
    }
}

fn otp_from_model(model: otp_codes::Model) -> OtpCode {
    OtpCode {
        id: model.id,
        phone: model.phone,
        code: model.code,
        expires_at: model.expires_at,
        created_at: model.created_at,
    }
}
