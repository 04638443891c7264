use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Scored attempt ready for insertion. Produced by the scoring service only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAttempt {
    pub user_id: String,
    pub lesson_id: String,
    pub wpm: i64,
    pub accuracy: f64,
    pub duration_seconds: f64,
    pub verified: bool,
}

/// Attempt row as persisted, including the store-assigned columns.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Attempt {
    pub id: Uuid,
    pub user_id: String,
    pub lesson_id: String,
    pub wpm: i64,
    pub accuracy: f64,
    pub duration_seconds: f64,
    pub verified: bool,
    pub created_at: Option<DateTime<Utc>>,
}

/// Projection used by progress aggregation. Legacy rows may lack either metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct AttemptStats {
    pub lesson_id: String,
    pub wpm: Option<f64>,
    pub accuracy: Option<f64>,
}
