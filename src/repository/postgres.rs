use async_trait::async_trait;
use sqlx::PgPool;

use super::{Repository, RepositoryResult};
use crate::models::attempt::{Attempt, AttemptStats, NewAttempt};
use crate::models::lesson::Lesson;

#[derive(Clone)]
pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn run_migrations(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }
}

#[async_trait]
impl Repository for PgRepository {
    async fn fetch_lessons_ordered(&self) -> RepositoryResult<Vec<Lesson>> {
        let lessons = sqlx::query_as::<_, Lesson>(
            r#"
            SELECT id, title, description, phase, unit, lesson_number, difficulty,
                   order_index, content_json
            FROM lessons
            ORDER BY order_index ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(lessons)
    }

    async fn fetch_attempts_by_user(&self, user_id: &str) -> RepositoryResult<Vec<AttemptStats>> {
        let rows = sqlx::query_as::<_, AttemptStats>(
            r#"
            SELECT lesson_id, wpm::float8 AS wpm, accuracy
            FROM attempts
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn insert_attempt(&self, attempt: NewAttempt) -> RepositoryResult<Attempt> {
        let stored = sqlx::query_as::<_, Attempt>(
            r#"
            INSERT INTO attempts (user_id, lesson_id, wpm, accuracy, duration_seconds, verified)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, lesson_id, wpm, accuracy, duration_seconds, verified, created_at
            "#,
        )
        .bind(attempt.user_id)
        .bind(attempt.lesson_id)
        .bind(attempt.wpm)
        .bind(attempt.accuracy)
        .bind(attempt.duration_seconds)
        .bind(attempt.verified)
        .fetch_one(&self.pool)
        .await?;
        Ok(stored)
    }
}
