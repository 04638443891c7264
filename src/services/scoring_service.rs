use crate::dto::attempt_dto::AttemptCreate;
use crate::models::attempt::NewAttempt;
use crate::utils::rounding::round_to;

/// Keystrokes counted as one word.
pub const KEYSTROKES_PER_WORD: f64 = 5.0;

/// Sessions at or above this speed are stored unverified.
pub const MAX_VERIFIED_WPM: i64 = 250;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("Invalid duration")]
    InvalidDuration,
}

pub struct ScoringService;

impl ScoringService {
    pub fn score(attempt: &AttemptCreate) -> Result<NewAttempt, ScoringError> {
        let duration_seconds = (attempt.end_time - attempt.start_time) / 1000.0;
        if duration_seconds <= 0.0 {
            return Err(ScoringError::InvalidDuration);
        }

        let wpm = words_per_minute(attempt.total_keystrokes, duration_seconds);
        let accuracy = keystroke_accuracy(attempt.total_keystrokes, attempt.error_count);

        Ok(NewAttempt {
            user_id: attempt.user_id.clone(),
            lesson_id: attempt.lesson_id.clone(),
            wpm,
            accuracy: round_to(accuracy, 2),
            duration_seconds: round_to(duration_seconds, 2),
            verified: wpm < MAX_VERIFIED_WPM,
        })
    }
}

/// Truncated, never rounded. Saturates at `i64::MAX` for vanishing durations.
fn words_per_minute(total_keystrokes: i64, duration_seconds: f64) -> i64 {
    let minutes = duration_seconds / 60.0;
    ((total_keystrokes as f64 / KEYSTROKES_PER_WORD) / minutes).floor() as i64
}

/// Percentage of correct keystrokes, floored at zero. Zero keystrokes score zero.
fn keystroke_accuracy(total_keystrokes: i64, error_count: i64) -> f64 {
    if total_keystrokes <= 0 {
        return 0.0;
    }
    let total = total_keystrokes as f64;
    ((total - error_count as f64) / total).max(0.0) * 100.0
}
