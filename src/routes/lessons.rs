use axum::{extract::State, response::IntoResponse, Json};

use crate::{dto::health_dto::ErrorResponse, error::Result, models::lesson::Lesson, AppState};

#[utoipa::path(
    get,
    path = "/lessons",
    responses(
        (status = 200, description = "Lesson catalog ordered by order_index", body = [Lesson]),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn list_lessons(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let lessons = state.lesson_service.list_lessons().await?;
    tracing::debug!(count = lessons.len(), "Lessons served");
    Ok(Json(lessons))
}
