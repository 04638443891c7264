use axum::{response::IntoResponse, Json};
use utoipa::OpenApi;

use crate::dto::attempt_dto::{AttemptCreate, AttemptSavedResponse};
use crate::dto::health_dto::{ErrorResponse, HealthResponse};
use crate::dto::progress_dto::{LessonProgress, ProgressSummary};
use crate::models::attempt::Attempt;
use crate::models::lesson::Lesson;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::health::health,
        super::lessons::list_lessons,
        super::progress::get_user_progress,
        super::progress::get_lesson_progress,
        super::attempts::record_attempt,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorResponse,
            Lesson,
            Attempt,
            AttemptCreate,
            AttemptSavedResponse,
            ProgressSummary,
            LessonProgress,
        )
    ),
    tags(
        (name = "HangulType API", description = "Hangul typing lessons, attempt scoring and progress.")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
