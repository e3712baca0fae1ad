use sea_orm::entity::prelude::*;

/// Chat message, optionally attached to a challenge and optionally a reply
/// to another message. Soft-deleted rows keep their thread position; likes
/// live in `message_likes`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "messages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub challenge_id: Option<Uuid>,
    pub user_id: Uuid,
    pub content: String,
    pub is_reply: bool,
    pub parent_id: Option<Uuid>,
    pub is_rebuke: bool,
    pub is_back: bool,
    pub is_edited: bool,
    pub is_reported: bool,
    pub is_deleted: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::challenges::Entity",
        from = "Column::ChallengeId",
        to = "super::challenges::Column::Id"
    )]
    Challenge,
    #[sea_orm(has_many = "super::message_likes::Entity")]
    MessageLikes,
}

impl Related<super::challenges::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Challenge.def()
    }
}

impl Related<super::message_likes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MessageLikes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
