use sea_orm_migration::prelude::*;

mod m20260801_000001_create_rooms;
mod m20260801_000002_create_challenges;
mod m20260801_000003_create_messages;
mod m20260801_000004_create_message_likes;
mod m20260801_000005_create_challenge_responses;
mod m20260801_000006_create_user_moods;
mod m20260801_000007_create_contents;
mod m20260801_000008_create_content_mood_tags;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_rooms::Migration),
            Box::new(m20260801_000002_create_challenges::Migration),
            Box::new(m20260801_000003_create_messages::Migration),
            Box::new(m20260801_000004_create_message_likes::Migration),
            Box::new(m20260801_000005_create_challenge_responses::Migration),
            Box::new(m20260801_000006_create_user_moods::Migration),
            Box::new(m20260801_000007_create_contents::Migration),
            Box::new(m20260801_000008_create_content_mood_tags::Migration),
        ]
    }
}
