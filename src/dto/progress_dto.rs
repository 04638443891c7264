use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProgressSummary {
    pub completed_lessons: Vec<String>,
    pub average_wpm: f64,
    pub average_accuracy: f64,
}

impl ProgressSummary {
    /// State of a user with no attempts yet.
    pub fn empty() -> Self {
        Self {
            completed_lessons: Vec::new(),
            average_wpm: 0.0,
            average_accuracy: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LessonProgress {
    pub lesson_id: String,
    pub attempts: usize,
    pub best_wpm: Option<f64>,
    pub average_wpm: f64,
    pub average_accuracy: f64,
}
