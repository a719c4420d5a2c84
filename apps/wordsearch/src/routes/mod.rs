pub mod health;

use axum::{http::Uri, routing::get, Router};

use crate::errors::AppError;
use crate::form::handlers::handle_form;
use crate::puzzle::handlers::{handle_pdf, handle_text};
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_form))
        .route("/wordsearch.pdf", get(handle_pdf))
        .route("/wordsearch.txt", get(handle_text))
        .route("/health", get(health::health_handler))
        .fallback(not_found)
        .with_state(state)
}
