use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Challenges::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Challenges::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Challenges::RoomId).uuid().not_null())
                    .col(ColumnDef::new(Challenges::Title).string().not_null())
                    .col(ColumnDef::new(Challenges::Description).string())
                    .col(ColumnDef::new(Challenges::MediaUrl).string())
                    .col(
                        ColumnDef::new(Challenges::ExpiresAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Challenges::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Challenges::Table, Challenges::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Challenges::Table)
                    .col(Challenges::RoomId)
                    .name("idx_challenges_room_id")
                    .to_owned(),
            )
            .await?;

        // The background sweeper deletes by expiry.
        manager
            .create_index(
                Index::create()
                    .table(Challenges::Table)
                    .col(Challenges::ExpiresAt)
                    .name("idx_challenges_expires_at")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Challenges::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Challenges {
    Table,
    Id,
    RoomId,
    Title,
    Description,
    MediaUrl,
    ExpiresAt,
    CreatedAt,
}

#[derive(Iden)]
enum Rooms {
    Table,
    Id,
}
