pub mod attempt_dto;
pub mod health_dto;
pub mod progress_dto;
