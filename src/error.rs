use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

use crate::repository::RepositoryError;
use crate::services::scoring_service::ScoringError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid request body: {0}")]
    JsonBody(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Scoring error: {0}")]
    Scoring(#[from] ScoringError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Repository failure whose cause was logged and must not reach the client.
    #[error("{0}")]
    Storage(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, detail) = match self {
            Error::JsonBody(rejection) => (rejection.status(), rejection.body_text()),
            Error::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Error::Scoring(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Error::Repository(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            Error::Storage(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            Error::Database(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected error occurred".to_string(),
            ),
        };

        let body = Json(json!({ "detail": detail }));
        (status, body).into_response()
    }
}
