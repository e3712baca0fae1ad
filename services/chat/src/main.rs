use chrono::Utc;
use sea_orm::Database;
use tracing::info;

use hamdel_chat::config::ChatConfig;
use hamdel_chat::domain::repository::ChallengeRepository;
use hamdel_chat::infra::grpc::GrpcUserClient;
use hamdel_chat::router::build_router;
use hamdel_chat::state::AppState;

#[tokio::main]
async fn main() {
    hamdel_core::tracing::init_tracing();

    let config = ChatConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    // Lazy channel: the gate fails per-request until the auth service is
    // reachable, so startup order between the two services does not matter.
    let user_client = GrpcUserClient::lazy(&config.auth_grpc_url);

    let state = AppState {
        db,
        user_client,
        jwt_secret: config.jwt_secret,
    };

    // Spawn expired-challenge sweeper. Answer submission checks expiry
    // itself; this only keeps dead challenges out of the lists.
    let sweeper_state = state.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(60));
        loop {
            interval.tick().await;
            match sweeper_state.challenge_repo().delete_expired(Utc::now()).await {
                Ok(0) => {}
                Ok(purged) => info!(purged, "swept expired challenges"),
                Err(e) => tracing::warn!(error = %e, "challenge sweep failed"),
            }
        }
    });

    // HTTP server
    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.chat_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("chat service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
