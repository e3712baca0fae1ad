/// Chat service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ChatConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret for validating JWT access tokens. Must match the auth
    /// service's secret or every bearer token fails the gate.
    pub jwt_secret: String,
    /// TCP port for the HTTP server (default 3110). Env var: `CHAT_PORT`.
    pub chat_port: u16,
    /// URL of the auth service's gRPC endpoint (default
    /// `http://localhost:3101`). Env var: `AUTH_GRPC_URL`.
    pub auth_grpc_url: String,
}

impl ChatConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            chat_port: std::env::var("CHAT_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3110),
            auth_grpc_url: std::env::var("AUTH_GRPC_URL")
                .unwrap_or_else(|_| "http://localhost:3101".to_owned()),
        }
    }
}
