use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::dto::health_dto::HealthResponse;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
#[axum::debug_handler]
pub async fn health() -> impl IntoResponse {
    let body = HealthResponse {
        status: "ok".to_string(),
        message: "HangulType API is running".to_string(),
    };
    (StatusCode::OK, Json(body))
}
