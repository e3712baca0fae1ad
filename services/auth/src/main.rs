use chrono::Utc;
use sea_orm::Database;
use tracing::info;

use hamdel_proto::user::user_service_server::UserServiceServer;

use hamdel_auth::config::AuthConfig;
use hamdel_auth::domain::repository::OtpCodeRepository;
use hamdel_auth::grpc_server::AuthGrpcServer;
use hamdel_auth::router::build_router;
use hamdel_auth::state::AppState;

#[tokio::main]
async fn main() {
    hamdel_core::tracing::init_tracing();

    let config = AuthConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let redis_cfg = deadpool_redis::Config::from_url(&config.redis_url);
    let redis = redis_cfg
        .create_pool(Some(deadpool_redis::Runtime::Tokio1))
        .expect("failed to create Redis pool");

    let state = AppState {
        db,
        redis,
        jwt_secret: config.jwt_secret,
        access_token_ttl_secs: config.access_token_ttl_secs,
        refresh_token_ttl_secs: config.refresh_token_ttl_secs,
        admin_session_ttl_secs: config.admin_session_ttl_secs,
        expose_otp_code: config.expose_otp_code,
    };

    // Spawn gRPC server
    let grpc_state = state.clone();
    let grpc_addr = format!("0.0.0.0:{}", config.auth_grpc_port);
    tokio::spawn(async move {
        let server = AuthGrpcServer { state: grpc_state };
        info!("auth gRPC server listening on {grpc_addr}");
        tonic::transport::Server::builder()
            .add_service(UserServiceServer::new(server))
            .serve(grpc_addr.parse().expect("invalid gRPC address"))
            .await
            .expect("gRPC server error");
    });

    // Spawn expired-code sweeper. Verification checks expiry itself; this
    // only keeps dead rows from accumulating.
    let sweeper_state = state.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(60));
        loop {
            interval.tick().await;
            match sweeper_state.otp_repo().purge_expired(Utc::now()).await {
                Ok(0) => {}
                Ok(purged) => info!(purged, "swept expired verification codes"),
                Err(e) => tracing::warn!(error = %e, "verification code sweep failed"),
            }
        }
    });

    // HTTP server
    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.auth_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("auth service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
