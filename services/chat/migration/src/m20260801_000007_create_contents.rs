use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Contents::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Contents::Title).string().not_null())
                    .col(ColumnDef::new(Contents::Description).string())
                    .col(ColumnDef::new(Contents::Category).string().not_null())
                    .col(ColumnDef::new(Contents::MediaUrl).string())
                    .col(
                        ColumnDef::new(Contents::IsPopular)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Contents::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // The popular fallback filters on is_popular and orders by recency.
        manager
            .create_index(
                Index::create()
                    .table(Contents::Table)
                    .col(Contents::IsPopular)
                    .col(Contents::CreatedAt)
                    .name("idx_contents_is_popular_created_at")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Contents::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Contents {
    Table,
    Id,
    Title,
    Description,
    Category,
    MediaUrl,
    IsPopular,
    CreatedAt,
}
