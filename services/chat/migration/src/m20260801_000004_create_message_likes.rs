use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MessageLikes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(MessageLikes::MessageId).uuid().not_null())
                    .col(ColumnDef::new(MessageLikes::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(MessageLikes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(MessageLikes::MessageId)
                            .col(MessageLikes::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(MessageLikes::Table, MessageLikes::MessageId)
                            .to(Messages::Table, Messages::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MessageLikes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum MessageLikes {
    Table,
    MessageId,
    UserId,
    CreatedAt,
}

#[derive(Iden)]
enum Messages {
    Table,
    Id,
}
