use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    dto::{
        attempt_dto::{AttemptCreate, AttemptSavedResponse},
        health_dto::ErrorResponse,
    },
    error::Result,
    AppState,
};

#[utoipa::path(
    post,
    path = "/attempts",
    request_body = AttemptCreate,
    responses(
        (status = 200, description = "Attempt scored and stored", body = AttemptSavedResponse),
        (status = 400, description = "Invalid duration or payload", body = ErrorResponse),
        (status = 422, description = "Missing or mistyped fields", body = ErrorResponse),
        (status = 500, description = "Failed to save attempt", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn record_attempt(
    State(state): State<AppState>,
    payload: std::result::Result<Json<AttemptCreate>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload?;
    payload.validate()?;
    let attempt = state.attempt_service.record_attempt(&payload).await?;
    Ok(Json(AttemptSavedResponse::from(attempt)))
}
