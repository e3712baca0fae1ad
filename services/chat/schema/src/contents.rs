use sea_orm::entity::prelude::*;

/// Relaxation content item suggested to users by mood. `category` holds a
/// [`hamdel_domain::content::ContentCategory`] string; mood tags live in
/// `content_mood_tags`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "contents")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub media_url: Option<String>,
    pub is_popular: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::content_mood_tags::Entity")]
    ContentMoodTags,
}

impl Related<super::content_mood_tags::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ContentMoodTags.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
