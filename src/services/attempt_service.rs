use std::sync::Arc;

use crate::dto::attempt_dto::AttemptCreate;
use crate::error::{Error, Result};
use crate::models::attempt::Attempt;
use crate::repository::Repository;
use crate::services::scoring_service::ScoringService;

pub const SAVE_FAILED: &str = "Failed to save attempt";

#[derive(Clone)]
pub struct AttemptService {
    repository: Arc<dyn Repository>,
}

impl AttemptService {
    pub fn new(repository: Arc<dyn Repository>) -> Self {
        Self { repository }
    }

    /// Scores the session server-side and stores the result. Nothing is
    /// written when scoring fails.
    pub async fn record_attempt(&self, payload: &AttemptCreate) -> Result<Attempt> {
        let scored = ScoringService::score(payload)?;

        if !scored.verified {
            tracing::warn!(
                user_id = %scored.user_id,
                lesson_id = %scored.lesson_id,
                wpm = scored.wpm,
                "Implausible typing speed, storing attempt as unverified"
            );
        }

        let stored = self
            .repository
            .insert_attempt(scored)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Error saving attempt");
                Error::Storage(SAVE_FAILED.to_string())
            })?;

        tracing::info!(
            attempt_id = %stored.id,
            user_id = %stored.user_id,
            lesson_id = %stored.lesson_id,
            wpm = stored.wpm,
            accuracy = stored.accuracy,
            "Attempt recorded"
        );
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::attempt::NewAttempt;
    use crate::repository::{MockRepository, RepositoryError};
    use crate::services::scoring_service::ScoringError;
    use uuid::Uuid;

    fn payload(end_time: f64) -> AttemptCreate {
        AttemptCreate {
            lesson_id: "1.1.1".into(),
            user_id: "user-1".into(),
            start_time: 0.0,
            end_time,
            total_keystrokes: 250,
            error_count: 5,
        }
    }

    fn stored(attempt: NewAttempt) -> Attempt {
        Attempt {
            id: Uuid::new_v4(),
            user_id: attempt.user_id,
            lesson_id: attempt.lesson_id,
            wpm: attempt.wpm,
            accuracy: attempt.accuracy,
            duration_seconds: attempt.duration_seconds,
            verified: attempt.verified,
            created_at: None,
        }
    }

    #[tokio::test]
    async fn scored_record_is_inserted() {
        let mut repo = MockRepository::new();
        repo.expect_insert_attempt()
            .withf(|a| a.wpm == 50 && a.accuracy == 98.0 && a.duration_seconds == 60.0 && a.verified)
            .times(1)
            .returning(|a| Ok(stored(a)));

        let service = AttemptService::new(Arc::new(repo));
        let attempt = service.record_attempt(&payload(60_000.0)).await.unwrap();
        assert_eq!(attempt.wpm, 50);
        assert_eq!(attempt.lesson_id, "1.1.1");
    }

    #[tokio::test]
    async fn invalid_duration_never_reaches_the_store() {
        let mut repo = MockRepository::new();
        repo.expect_insert_attempt().times(0);

        let service = AttemptService::new(Arc::new(repo));
        let err = service.record_attempt(&payload(0.0)).await.unwrap_err();
        assert!(matches!(err, Error::Scoring(ScoringError::InvalidDuration)));
    }

    #[tokio::test]
    async fn insert_failure_is_reported_generically() {
        let mut repo = MockRepository::new();
        repo.expect_insert_attempt()
            .times(1)
            .returning(|_| Err(RepositoryError::Http("duplicate key value".into())));

        let service = AttemptService::new(Arc::new(repo));
        let err = service.record_attempt(&payload(60_000.0)).await.unwrap_err();
        assert!(matches!(err, Error::Storage(ref m) if m == SAVE_FAILED));
    }
}
