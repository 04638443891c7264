//! Data-access contract consumed by the services, plus its adapters.
//!
//! The services never see a pool or an HTTP client, only `Arc<dyn Repository>`.

pub mod memory;
pub mod postgres;
pub mod supabase;

use async_trait::async_trait;

use crate::models::attempt::{Attempt, AttemptStats, NewAttempt};
use crate::models::lesson::Lesson;

pub use memory::MemoryRepository;
pub use postgres::PgRepository;
pub use supabase::SupabaseRepository;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Http(String),

    #[error("Unexpected response from store: {0}")]
    Decode(String),

    #[error("Store did not return the inserted attempt")]
    NotReturned,
}

impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RepositoryError::Decode(err.to_string())
        } else {
            RepositoryError::Http(err.to_string())
        }
    }
}

pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Repository: Send + Sync {
    /// All lessons, ascending by `order_index`.
    async fn fetch_lessons_ordered(&self) -> RepositoryResult<Vec<Lesson>>;

    /// Every attempt a user has submitted, projected to the aggregated columns.
    async fn fetch_attempts_by_user(&self, user_id: &str) -> RepositoryResult<Vec<AttemptStats>>;

    /// Persists a scored attempt and returns the stored row.
    async fn insert_attempt(&self, attempt: NewAttempt) -> RepositoryResult<Attempt>;
}
