use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // creator_id points at a user owned by the auth service, so it stays
        // a plain column.
        manager
            .create_table(
                Table::create()
                    .table(Rooms::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Rooms::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Rooms::Title).string().not_null())
                    .col(ColumnDef::new(Rooms::Description).string())
                    .col(ColumnDef::new(Rooms::Kind).string().not_null())
                    .col(
                        ColumnDef::new(Rooms::Language)
                            .string()
                            .not_null()
                            .default("fa"),
                    )
                    .col(
                        ColumnDef::new(Rooms::MaxMembers)
                            .integer()
                            .not_null()
                            .default(100),
                    )
                    .col(ColumnDef::new(Rooms::CreatorId).uuid().not_null())
                    .col(
                        ColumnDef::new(Rooms::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Rooms::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Room listing orders by recency.
        manager
            .create_index(
                Index::create()
                    .table(Rooms::Table)
                    .col(Rooms::CreatedAt)
                    .name("idx_rooms_created_at")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rooms::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Rooms {
    Table,
    Id,
    Title,
    Description,
    Kind,
    Language,
    MaxMembers,
    CreatorId,
    IsActive,
    CreatedAt,
}
