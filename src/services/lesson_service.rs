use std::sync::Arc;

use crate::error::{Error, Result};
use crate::models::lesson::Lesson;
use crate::repository::Repository;

#[derive(Clone)]
pub struct LessonService {
    repository: Arc<dyn Repository>,
}

impl LessonService {
    pub fn new(repository: Arc<dyn Repository>) -> Self {
        Self { repository }
    }

    /// Catalog in `order_index` order, exactly as the store returns it.
    pub async fn list_lessons(&self) -> Result<Vec<Lesson>> {
        self.repository.fetch_lessons_ordered().await.map_err(|e| {
            tracing::error!(error = %e, "Error fetching lessons");
            Error::Repository(e)
        })
    }
}
