use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::form::TemplateError;
use crate::puzzle::PuzzleError;
use crate::render::DocumentError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Internal detail is logged, never sent to the client.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Puzzle error: {0}")]
    Puzzle(#[from] PuzzleError),

    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Machine-readable code sent in the error body.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Puzzle(PuzzleError::InvalidWord { .. }) => "INVALID_WORD",
            AppError::Puzzle(PuzzleError::GridFull { .. }) => "GRID_FULL",
            AppError::Puzzle(PuzzleError::TooManyWords { .. }) => "TOO_MANY_WORDS",
            AppError::Document(_) => "DOCUMENT_WRITE_ERROR",
            AppError::Template(_) => "TEMPLATE_RENDER_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Puzzle(e) => {
                tracing::error!("Puzzle error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "The word search could not be generated".to_string(),
                )
            }
            AppError::Document(e) => {
                tracing::error!("Document error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "The document could not be written".to_string(),
                )
            }
            AppError::Template(e) => {
                tracing::error!("Template error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "The page could not be rendered".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": self.code(),
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
