pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use crate::repository::Repository;
use crate::services::{
    attempt_service::AttemptService, lesson_service::LessonService,
    progress_service::ProgressService,
};

#[derive(Clone)]
pub struct AppState {
    pub attempt_service: AttemptService,
    pub lesson_service: LessonService,
    pub progress_service: ProgressService,
}

impl AppState {
    pub fn new(repository: Arc<dyn Repository>) -> Self {
        Self {
            attempt_service: AttemptService::new(repository.clone()),
            lesson_service: LessonService::new(repository.clone()),
            progress_service: ProgressService::new(repository),
        }
    }
}
