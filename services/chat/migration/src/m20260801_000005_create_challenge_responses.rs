use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChallengeResponses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ChallengeResponses::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ChallengeResponses::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(ChallengeResponses::ChallengeId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ChallengeResponses::AnsweredAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ChallengeResponses::Table, ChallengeResponses::ChallengeId)
                            .to(Challenges::Table, Challenges::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One answer per user per challenge; the insert path relies on this
        // to detect duplicates.
        manager
            .create_index(
                Index::create()
                    .table(ChallengeResponses::Table)
                    .col(ChallengeResponses::UserId)
                    .col(ChallengeResponses::ChallengeId)
                    .unique()
                    .name("idx_challenge_responses_user_challenge")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ChallengeResponses::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ChallengeResponses {
    Table,
    Id,
    UserId,
    ChallengeId,
    AnsweredAt,
}

#[derive(Iden)]
enum Challenges {
    Table,
    Id,
}
