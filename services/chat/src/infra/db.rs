use std::collections::HashMap;

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, SqlErr, TransactionTrait,
    sea_query::{Expr, OnConflict},
};
use uuid::Uuid;

use hamdel_chat_schema::{
    challenge_responses, challenges, content_mood_tags, contents, message_likes, messages, rooms,
    user_moods,
};
use hamdel_core::sea_ext::RandomSample as _;
use hamdel_domain::content::ContentCategory;
use hamdel_domain::mood::Mood;
use hamdel_domain::pagination::PageRequest;
use hamdel_domain::room::RoomKind;

use crate::domain::repository::{
    ChallengeRepository, ChallengeResponseRepository, ContentRepository, MessageRepository,
    RoomRepository, UserMoodRepository,
};
use crate::domain::types::{Challenge, ChallengeResponse, Content, Message, Room, UserMood};
use crate::error::ChatServiceError;

// ── Room repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRoomRepository {
    pub db: DatabaseConnection,
}

impl RoomRepository for DbRoomRepository {
    async fn list_active(&self, page: PageRequest) -> Result<Vec<Room>, ChatServiceError> {
        let models = rooms::Entity::find()
            .filter(rooms::Column::IsActive.eq(true))
            .order_by_desc(rooms::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list active rooms")?;
        models.into_iter().map(room_from_model).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Room>, ChatServiceError> {
        let model = rooms::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find room by id")?;
        model.map(room_from_model).transpose()
    }

    async fn create(&self, room: &Room) -> Result<(), ChatServiceError> {
        rooms::ActiveModel {
            id: Set(room.id),
            title: Set(room.title.clone()),
            description: Set(room.description.clone()),
            kind: Set(room.kind.as_str().to_owned()),
            language: Set(room.language.clone()),
            max_members: Set(room.max_members),
            creator_id: Set(room.creator_id),
            is_active: Set(room.is_active),
            created_at: Set(room.created_at),
        }
        .insert(&self.db)
        .await
        .context("create room")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ChatServiceError> {
        // Challenges, their messages and answers go with the room via
        // ON DELETE CASCADE.
        let result = rooms::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete room")?;
        Ok(result.rows_affected > 0)
    }
}

fn room_from_model(model: rooms::Model) -> Result<Room, ChatServiceError> {
    let kind = RoomKind::from_str_opt(&model.kind)
        .with_context(|| format!("unknown room kind {:?}", model.kind))?;
    Ok(Room {
        id: model.id,
        title: model.title,
        description: model.description,
        kind,
        language: model.language,
        max_members: model.max_members,
        creator_id: model.creator_id,
        is_active: model.is_active,
        created_at: model.created_at,
    })
}

// ── Challenge repository ─────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbChallengeRepository {
    pub db: DatabaseConnection,
}

impl ChallengeRepository for DbChallengeRepository {
    async fn list(
        &self,
        room_id: Option<Uuid>,
        page: PageRequest,
    ) -> Result<Vec<(Challenge, Room)>, ChatServiceError> {
        let mut query = challenges::Entity::find().find_also_related(rooms::Entity);
        if let Some(room_id) = room_id {
            query = query.filter(challenges::Column::RoomId.eq(room_id));
        }
        let pairs = query
            .order_by_desc(challenges::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list challenges")?;
        pairs
            .into_iter()
            .map(|(challenge, room)| {
                // The FK guarantees the room; a miss here is corruption.
                let room = room.context("challenge row without its room")?;
                Ok((challenge_from_model(challenge), room_from_model(room)?))
            })
            .collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Challenge>, ChatServiceError> {
        let model = challenges::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find challenge by id")?;
        Ok(model.map(challenge_from_model))
    }

    async fn create(&self, challenge: &Challenge) -> Result<(), ChatServiceError> {
        challenges::ActiveModel {
            id: Set(challenge.id),
            room_id: Set(challenge.room_id),
            title: Set(challenge.title.clone()),
            description: Set(challenge.description.clone()),
            media_url: Set(challenge.media_url.clone()),
            expires_at: Set(challenge.expires_at),
            created_at: Set(challenge.created_at),
        }
        .insert(&self.db)
        .await
        .context("create challenge")?;
        Ok(())
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, ChatServiceError> {
        let result = challenges::Entity::delete_many()
            .filter(challenges::Column::ExpiresAt.lte(now))
            .exec(&self.db)
            .await
            .context("delete expired challenges")?;
        Ok(result.rows_affected)
    }
}

fn challenge_from_model(model: challenges::Model) -> Challenge {
    Challenge {
        id: model.id,
        room_id: model.room_id,
        title: model.title,
        description: model.description,
        media_url: model.media_url,
        expires_at: model.expires_at,
        created_at: model.created_at,
    }
}

// ── Message repository ───────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbMessageRepository {
    pub db: DatabaseConnection,
}

impl DbMessageRepository {
    /// Liker ids per message, one query for the whole page.
    async fn load_likes(&self, ids: &[Uuid]) -> Result<HashMap<Uuid, Vec<Uuid>>, ChatServiceError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let rows = message_likes::Entity::find()
            .filter(message_likes::Column::MessageId.is_in(ids.iter().copied()))
            .order_by_asc(message_likes::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("load message likes")?;
        let mut by_message: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for row in rows {
            by_message.entry(row.message_id).or_default().push(row.user_id);
        }
        Ok(by_message)
    }
}

impl MessageRepository for DbMessageRepository {
    async fn list(
        &self,
        challenge_id: Option<Uuid>,
        page: PageRequest,
    ) -> Result<Vec<Message>, ChatServiceError> {
        let mut query = messages::Entity::find();
        if let Some(challenge_id) = challenge_id {
            query = query.filter(messages::Column::ChallengeId.eq(challenge_id));
        }
        let models = query
            .order_by_desc(messages::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list messages")?;

        let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
        let mut likes = self.load_likes(&ids).await?;
        Ok(models
            .into_iter()
            .map(|m| {
                let l = likes.remove(&m.id).unwrap_or_default();
                message_from_model(m, l)
            })
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Message>, ChatServiceError> {
        let model = messages::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find message by id")?;
        let Some(model) = model else {
            return Ok(None);
        };
        let likes = self
            .load_likes(&[model.id])
            .await?
            .remove(&model.id)
            .unwrap_or_default();
        Ok(Some(message_from_model(model, likes)))
    }

    async fn create(&self, message: &Message) -> Result<(), ChatServiceError> {
        messages::ActiveModel {
            id: Set(message.id),
            challenge_id: Set(message.challenge_id),
            user_id: Set(message.user_id),
            content: Set(message.content.clone()),
            is_reply: Set(message.is_reply),
            parent_id: Set(message.parent_id),
            is_rebuke: Set(message.is_rebuke),
            is_back: Set(message.is_back),
            is_edited: Set(message.is_edited),
            is_reported: Set(message.is_reported),
            is_deleted: Set(message.is_deleted),
            created_at: Set(message.created_at),
        }
        .insert(&self.db)
        .await
        .context("create message")?;
        Ok(())
    }

    async fn add_like(&self, message_id: Uuid, user_id: Uuid) -> Result<(), ChatServiceError> {
        // The composite key absorbs repeats; DO NOTHING keeps them silent.
        message_likes::Entity::insert(message_likes::ActiveModel {
            message_id: Set(message_id),
            user_id: Set(user_id),
            created_at: Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                message_likes::Column::MessageId,
                message_likes::Column::UserId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(&self.db)
        .await
        .context("record message like")?;
        Ok(())
    }

    async fn remove_like(&self, message_id: Uuid, user_id: Uuid) -> Result<(), ChatServiceError> {
        message_likes::Entity::delete_many()
            .filter(message_likes::Column::MessageId.eq(message_id))
            .filter(message_likes::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .context("remove message like")?;
        Ok(())
    }

    async fn mark_reported(&self, id: Uuid) -> Result<bool, ChatServiceError> {
        let result = messages::Entity::update_many()
            .col_expr(messages::Column::IsReported, Expr::value(true))
            .filter(messages::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("mark message reported")?;
        Ok(result.rows_affected > 0)
    }
}

fn message_from_model(model: messages::Model, likes: Vec<Uuid>) -> Message {
    Message {
        id: model.id,
        challenge_id: model.challenge_id,
        user_id: model.user_id,
        content: model.content,
        is_reply: model.is_reply,
        parent_id: model.parent_id,
        is_rebuke: model.is_rebuke,
        is_back: model.is_back,
        is_edited: model.is_edited,
        is_reported: model.is_reported,
        is_deleted: model.is_deleted,
        likes,
        created_at: model.created_at,
    }
}

// ── Challenge response repository ────────────────────────────────────────

#[derive(Clone)]
pub struct DbChallengeResponseRepository {
    pub db: DatabaseConnection,
}

impl ChallengeResponseRepository for DbChallengeResponseRepository {
    async fn create(&self, response: &ChallengeResponse) -> Result<bool, ChatServiceError> {
        // The unique index on (user_id, challenge_id) arbitrates duplicates;
        // a prior SELECT would race with concurrent submissions.
        let insert = challenge_responses::ActiveModel {
            id: Set(response.id),
            user_id: Set(response.user_id),
            challenge_id: Set(response.challenge_id),
            answered_at: Set(response.answered_at),
        }
        .insert(&self.db)
        .await;

        match insert {
            Ok(_) => Ok(true),
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Ok(false),
                _ => Err(anyhow::Error::from(e)
                    .context("record challenge answer")
                    .into()),
            },
        }
    }
}

// ── User mood repository ─────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserMoodRepository {
    pub db: DatabaseConnection,
}

impl UserMoodRepository for DbUserMoodRepository {
    async fn create(&self, mood: &UserMood) -> Result<(), ChatServiceError> {
        user_moods::ActiveModel {
            id: Set(mood.id),
            user_id: Set(mood.user_id),
            mood: Set(mood.mood.as_str().to_owned()),
            created_at: Set(mood.created_at),
        }
        .insert(&self.db)
        .await
        .context("record mood")?;
        Ok(())
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<UserMood>, ChatServiceError> {
        let models = user_moods::Entity::find()
            .filter(user_moods::Column::UserId.eq(user_id))
            .order_by_desc(user_moods::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list moods for user")?;
        models.into_iter().map(mood_from_model).collect()
    }

    async fn latest_for_user(&self, user_id: Uuid) -> Result<Option<UserMood>, ChatServiceError> {
        let model = user_moods::Entity::find()
            .filter(user_moods::Column::UserId.eq(user_id))
            .order_by_desc(user_moods::Column::CreatedAt)
            .one(&self.db)
            .await
            .context("find latest mood for user")?;
        model.map(mood_from_model).transpose()
    }
}

fn mood_from_model(model: user_moods::Model) -> Result<UserMood, ChatServiceError> {
    let mood = Mood::from_str_opt(&model.mood)
        .with_context(|| format!("unknown mood {:?}", model.mood))?;
    Ok(UserMood {
        id: model.id,
        user_id: model.user_id,
        mood,
        created_at: model.created_at,
    })
}

// ── Content repository ───────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbContentRepository {
    pub db: DatabaseConnection,
}

impl DbContentRepository {
    /// Attach mood tags to a fetched page of contents, one query.
    async fn hydrate(&self, models: Vec<contents::Model>) -> Result<Vec<Content>, ChatServiceError> {
        if models.is_empty() {
            return Ok(vec![]);
        }
        let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
        let tag_rows = content_mood_tags::Entity::find()
            .filter(content_mood_tags::Column::ContentId.is_in(ids))
            .all(&self.db)
            .await
            .context("load content mood tags")?;

        let mut tags: HashMap<Uuid, Vec<Mood>> = HashMap::new();
        for row in tag_rows {
            let mood = Mood::from_str_opt(&row.mood)
                .with_context(|| format!("unknown mood tag {:?}", row.mood))?;
            tags.entry(row.content_id).or_default().push(mood);
        }
        models
            .into_iter()
            .map(|m| {
                let t = tags.remove(&m.id).unwrap_or_default();
                content_from_model(m, t)
            })
            .collect()
    }
}

impl ContentRepository for DbContentRepository {
    async fn create(&self, content: &Content) -> Result<(), ChatServiceError> {
        // Row and tags land together or not at all.
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                let content = content.clone();
                Box::pin(async move {
                    contents::ActiveModel {
                        id: Set(content.id),
                        title: Set(content.title.clone()),
                        description: Set(content.description.clone()),
                        category: Set(content.category.as_str().to_owned()),
                        media_url: Set(content.media_url.clone()),
                        is_popular: Set(content.is_popular),
                        created_at: Set(content.created_at),
                    }
                    .insert(txn)
                    .await?;
                    for mood in content.mood_tags.iter().copied() {
                        content_mood_tags::ActiveModel {
                            content_id: Set(content.id),
                            mood: Set(mood.as_str().to_owned()),
                        }
                        .insert(txn)
                        .await?;
                    }
                    Ok(())
                })
            })
            .await
            .context("create content with tags")?;
        Ok(())
    }

    async fn list_by_mood_random(
        &self,
        mood: Mood,
        limit: u64,
    ) -> Result<Vec<Content>, ChatServiceError> {
        let models = contents::Entity::find()
            .inner_join(content_mood_tags::Entity)
            .filter(content_mood_tags::Column::Mood.eq(mood.as_str()))
            .random_sample(limit)
            .all(&self.db)
            .await
            .context("list contents by mood")?;
        self.hydrate(models).await
    }

    async fn list_popular(&self, limit: u64) -> Result<Vec<Content>, ChatServiceError> {
        let models = contents::Entity::find()
            .filter(contents::Column::IsPopular.eq(true))
            .order_by_desc(contents::Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .context("list popular contents")?;
        self.hydrate(models).await
    }
}

fn content_from_model(
    model: contents::Model,
    mood_tags: Vec<Mood>,
) -> Result<Content, ChatServiceError> {
    let category = ContentCategory::from_str_opt(&model.category)
        .with_context(|| format!("unknown content category {:?}", model.category))?;
    Ok(Content {
        id: model.id,
        title: model.title,
        description: model.description,
        category,
        mood_tags,
        media_url: model.media_url,
        is_popular: model.is_popular,
        created_at: model.created_at,
    })
}
