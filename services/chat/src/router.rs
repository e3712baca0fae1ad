use axum::{
    Router,
    routing::{delete, get, post},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use hamdel_core::health::{healthz, readyz};
use hamdel_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    challenge::{create_challenge, list_challenges},
    content::{create_content, suggest_contents},
    message::{create_message, like_message, list_messages, report_message, unlike_message},
    mood::{list_user_moods, report_mood},
    response::submit_response,
    room::{create_room, delete_room, get_room, list_rooms},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Rooms
        .route("/rooms", get(list_rooms).post(create_room))
        .route("/rooms/{room_id}", get(get_room).delete(delete_room))
        // Challenges
        .route("/challenges", get(list_challenges).post(create_challenge))
        // Messages
        .route("/messages", get(list_messages).post(create_message))
        .route("/messages/{message_id}/like", post(like_message))
        .route("/messages/{message_id}/unlike", delete(unlike_message))
        .route("/messages/{message_id}/report", post(report_message))
        // Challenge responses
        .route("/responses", post(submit_response))
        // Moods and contents
        .route("/moods", post(report_mood))
        .route("/users/{user_id}/moods", get(list_user_moods))
        .route("/contents/suggestions", get(suggest_contents))
        .route("/contents", post(create_content))
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http())
                .layer(propagate_request_id_layer()),
        )
        .with_state(state)
}
