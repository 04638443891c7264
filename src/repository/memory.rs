use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Repository, RepositoryResult};
use crate::models::attempt::{Attempt, AttemptStats, NewAttempt};
use crate::models::lesson::Lesson;

/// Process-local store for development and tests.
#[derive(Clone, Default)]
pub struct MemoryRepository {
    lessons: Arc<RwLock<Vec<Lesson>>>,
    attempts: Arc<RwLock<Vec<Attempt>>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lessons(lessons: Vec<Lesson>) -> Self {
        Self {
            lessons: Arc::new(RwLock::new(lessons)),
            attempts: Arc::default(),
        }
    }

    pub async fn add_lesson(&self, lesson: Lesson) {
        self.lessons.write().await.push(lesson);
    }

    pub async fn attempts(&self) -> Vec<Attempt> {
        self.attempts.read().await.clone()
    }
}

#[async_trait]
impl Repository for MemoryRepository {
    async fn fetch_lessons_ordered(&self) -> RepositoryResult<Vec<Lesson>> {
        let mut lessons = self.lessons.read().await.clone();
        // stable: equal order_index keeps insertion order
        lessons.sort_by_key(|l| l.order_index);
        Ok(lessons)
    }

    async fn fetch_attempts_by_user(&self, user_id: &str) -> RepositoryResult<Vec<AttemptStats>> {
        let attempts = self.attempts.read().await;
        Ok(attempts
            .iter()
            .filter(|a| a.user_id == user_id)
            .map(|a| AttemptStats {
                lesson_id: a.lesson_id.clone(),
                wpm: Some(a.wpm as f64),
                accuracy: Some(a.accuracy),
            })
            .collect())
    }

    async fn insert_attempt(&self, attempt: NewAttempt) -> RepositoryResult<Attempt> {
        let stored = Attempt {
            id: Uuid::new_v4(),
            user_id: attempt.user_id,
            lesson_id: attempt.lesson_id,
            wpm: attempt.wpm,
            accuracy: attempt.accuracy,
            duration_seconds: attempt.duration_seconds,
            verified: attempt.verified,
            created_at: Some(Utc::now()),
        };
        self.attempts.write().await.push(stored.clone());
        Ok(stored)
    }
}
