use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::attempt::Attempt;

/// Raw typing-session result as submitted by the client.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AttemptCreate {
    #[validate(length(min = 1))]
    pub lesson_id: String,
    #[validate(length(min = 1))]
    pub user_id: String,
    /// Unix timestamp in milliseconds.
    pub start_time: f64,
    /// Unix timestamp in milliseconds.
    pub end_time: f64,
    #[validate(range(min = 0))]
    pub total_keystrokes: i64,
    #[validate(range(min = 0))]
    pub error_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttemptSavedResponse {
    pub status: String,
    pub data: Attempt,
}

impl From<Attempt> for AttemptSavedResponse {
    fn from(data: Attempt) -> Self {
        Self {
            status: "success".to_string(),
            data,
        }
    }
}
