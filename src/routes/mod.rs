pub mod attempts;
pub mod docs;
pub mod health;
pub mod lessons;
pub mod progress;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Attempt payloads are a handful of scalar fields.
const MAX_BODY_BYTES: usize = 64 * 1024;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::health))
        .route("/openapi.json", get(docs::openapi_json))
        .route("/lessons", get(lessons::list_lessons))
        .route("/user/progress/:user_id", get(progress::get_user_progress))
        .route(
            "/user/progress/:user_id/lessons",
            get(progress::get_lesson_progress),
        )
        .route("/attempts", post(attempts::record_attempt))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}
