use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::dto::progress_dto::{LessonProgress, ProgressSummary};
use crate::error::{Error, Result};
use crate::models::attempt::AttemptStats;
use crate::repository::Repository;
use crate::utils::rounding::round_to;

#[derive(Clone)]
pub struct ProgressService {
    repository: Arc<dyn Repository>,
}

impl ProgressService {
    pub fn new(repository: Arc<dyn Repository>) -> Self {
        Self { repository }
    }

    pub async fn user_progress(&self, user_id: &str) -> Result<ProgressSummary> {
        let attempts = self.fetch(user_id).await?;
        Ok(summarize(&attempts))
    }

    pub async fn lesson_breakdown(&self, user_id: &str) -> Result<Vec<LessonProgress>> {
        let attempts = self.fetch(user_id).await?;
        Ok(per_lesson(&attempts))
    }

    async fn fetch(&self, user_id: &str) -> Result<Vec<AttemptStats>> {
        tracing::debug!(%user_id, "Fetching attempts for progress");
        self.repository
            .fetch_attempts_by_user(user_id)
            .await
            .map_err(|e| {
                tracing::error!(%user_id, error = %e, "Failed to fetch attempts");
                Error::Repository(e)
            })
    }
}

/// Folds a user's full history into the dashboard summary. An empty history
/// is the new-user state, not an error.
pub fn summarize(attempts: &[AttemptStats]) -> ProgressSummary {
    if attempts.is_empty() {
        return ProgressSummary::empty();
    }

    let completed: BTreeSet<&str> = attempts.iter().map(|a| a.lesson_id.as_str()).collect();
    let (average_wpm, average_accuracy) = field_averages(attempts.iter());

    ProgressSummary {
        completed_lessons: completed.into_iter().map(str::to_string).collect(),
        average_wpm,
        average_accuracy,
    }
}

/// One entry per attempted lesson, ordered by lesson id.
pub fn per_lesson(attempts: &[AttemptStats]) -> Vec<LessonProgress> {
    let mut grouped: BTreeMap<&str, Vec<&AttemptStats>> = BTreeMap::new();
    for attempt in attempts {
        grouped.entry(attempt.lesson_id.as_str()).or_default().push(attempt);
    }

    grouped
        .into_iter()
        .map(|(lesson_id, rows)| {
            let best_wpm = rows.iter().filter_map(|a| a.wpm).reduce(f64::max);
            let (average_wpm, average_accuracy) = field_averages(rows.iter().copied());
            LessonProgress {
                lesson_id: lesson_id.to_string(),
                attempts: rows.len(),
                best_wpm,
                average_wpm,
                average_accuracy,
            }
        })
        .collect()
}

// Each field is averaged over its own non-null values.
fn field_averages<'a>(attempts: impl Iterator<Item = &'a AttemptStats> + Clone) -> (f64, f64) {
    let wpm = mean(attempts.clone().filter_map(|a| a.wpm));
    let accuracy = mean(attempts.filter_map(|a| a.accuracy));
    (
        wpm.map(|v| round_to(v, 1)).unwrap_or(0.0),
        accuracy.map(|v| round_to(v, 1)).unwrap_or(0.0),
    )
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}
