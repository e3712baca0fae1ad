use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContentMoodTags::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ContentMoodTags::ContentId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ContentMoodTags::Mood).string().not_null())
                    .primary_key(
                        Index::create()
                            .col(ContentMoodTags::ContentId)
                            .col(ContentMoodTags::Mood),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ContentMoodTags::Table, ContentMoodTags::ContentId)
                            .to(Contents::Table, Contents::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Suggestions look up content ids by mood.
        manager
            .create_index(
                Index::create()
                    .table(ContentMoodTags::Table)
                    .col(ContentMoodTags::Mood)
                    .name("idx_content_mood_tags_mood")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContentMoodTags::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ContentMoodTags {
    Table,
    ContentId,
    Mood,
}

#[derive(Iden)]
enum Contents {
    Table,
    Id,
}
