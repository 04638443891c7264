use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{
        health_dto::ErrorResponse,
        progress_dto::{LessonProgress, ProgressSummary},
    },
    error::Result,
    AppState,
};

#[utoipa::path(
    get,
    path = "/user/progress/{user_id}",
    params(
        ("user_id" = String, Path, description = "Opaque user identifier")
    ),
    responses(
        (status = 200, description = "Aggregated progress", body = ProgressSummary),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn get_user_progress(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse> {
    let summary = state.progress_service.user_progress(&user_id).await?;
    Ok(Json(summary))
}

#[utoipa::path(
    get,
    path = "/user/progress/{user_id}/lessons",
    params(
        ("user_id" = String, Path, description = "Opaque user identifier")
    ),
    responses(
        (status = 200, description = "Per-lesson progress", body = [LessonProgress]),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn get_lesson_progress(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse> {
    let lessons = state.progress_service.lesson_breakdown(&user_id).await?;
    Ok(Json(lessons))
}
