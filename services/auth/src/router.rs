use axum::{
    Router,
    routing::{delete, get, post},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use hamdel_core::health::{healthz, readyz};
use hamdel_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    admin::{delete_user, list_users, login, logout, toggle_ban},
    otp::{request_code, verify_code},
    token::refresh_token,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Phone verification
        .route("/auth/request-code", post(request_code))
        .route("/auth/verify-code", post(verify_code))
        // Token
        .route("/auth/refresh", post(refresh_token))
        // Admin panel
        .route("/admin/login", post(login))
        .route("/admin/logout", post(logout))
        .route("/admin/users", get(list_users))
        .route("/admin/users/{user_id}/toggle-ban", post(toggle_ban))
        .route("/admin/users/{user_id}", delete(delete_user))
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http())
                .layer(propagate_request_id_layer()),
        )
        .with_state(state)
}
