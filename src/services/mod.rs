pub mod attempt_service;
pub mod lesson_service;
pub mod progress_service;
pub mod scoring_service;
