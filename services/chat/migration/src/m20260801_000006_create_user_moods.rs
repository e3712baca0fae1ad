use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserMoods::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserMoods::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserMoods::UserId).uuid().not_null())
                    .col(ColumnDef::new(UserMoods::Mood).string().not_null())
                    .col(
                        ColumnDef::new(UserMoods::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Mood history and latest-mood lookups filter by user and order by
        // recency.
        manager
            .create_index(
                Index::create()
                    .table(UserMoods::Table)
                    .col(UserMoods::UserId)
                    .col(UserMoods::CreatedAt)
                    .name("idx_user_moods_user_id_created_at")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserMoods::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UserMoods {
    Table,
    Id,
    UserId,
    Mood,
    CreatedAt,
}
