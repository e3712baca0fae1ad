/// Auth service configuration loaded from environment variables.
#[derive(Debug)]
pub struct AuthConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// Redis connection URL (admin sessions).
    pub redis_url: String,
    /// HMAC secret for signing JWT access and refresh tokens.
    pub jwt_secret: String,
    /// TCP port for the HTTP server (default 3100). Env var: `AUTH_PORT`.
    pub auth_port: u16,
    /// TCP port for the gRPC server (default 3101). Env var: `AUTH_GRPC_PORT`.
    pub auth_grpc_port: u16,
    /// Access token lifetime in seconds (default 3600).
    pub access_token_ttl_secs: u64,
    /// Refresh token lifetime in seconds (default 2592000, 30 days).
    pub refresh_token_ttl_secs: u64,
    /// Admin session lifetime in seconds (default 3600).
    pub admin_session_ttl_secs: u64,
    /// Echo issued verification codes in responses. Development only.
    pub expose_otp_code: bool,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            redis_url: std::env::var("REDIS_URL").expect("REDIS_URL"),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            auth_port: std::env::var("AUTH_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3100),
            auth_grpc_port: std::env::var("AUTH_GRPC_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3101),
            access_token_ttl_secs: std::env::var("ACCESS_TOKEN_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3600),
            refresh_token_ttl_secs: std::env::var("REFRESH_TOKEN_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2_592_000),
            admin_session_ttl_secs: std::env::var("ADMIN_SESSION_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3600),
            expose_otp_code: std::env::var("EXPOSE_OTP_CODE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}
