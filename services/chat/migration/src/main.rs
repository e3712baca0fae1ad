use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(hamdel_chat_migration::Migrator).await;
}
