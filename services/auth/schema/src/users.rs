use sea_orm::entity::prelude::*;

/// User account owned by the auth service. The phone number is the unique
/// credential identifier; `username` is a display name and may repeat.
/// `password_hash` is absent for accounts that never completed an OTP
/// verification with a password.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub username: String,
    #[sea_orm(unique)]
    pub phone: String,
    pub password_hash: Option<String>,
    pub email: Option<String>,
    pub is_banned: bool,
    pub is_admin: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
