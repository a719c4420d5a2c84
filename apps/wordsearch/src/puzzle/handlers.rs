//! Axum route handlers for puzzle downloads.

use axum::{
    extract::{Query, State},
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::layout::HELVETICA;
use crate::puzzle::generator::{generate, new_rng};
use crate::puzzle::{Grid, WordList, COLUMNS, ROWS};
use crate::render::{render, render_text};
use crate::state::AppState;

pub const PDF_CONTENT_DISPOSITION: &str = r#"inline; filename="wordsearch.pdf""#;

/// GET /wordsearch.pdf?Word_0=..&Word_13=..
///
/// Generates a fresh puzzle from the submitted words and returns it as an inline PDF.
pub async fn handle_pdf(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let words = WordList::from_query(&params)?;
    info!(words = words.filled(), "Generating word search PDF");

    let page_config = state.page_config.clone();
    let seed = state.config.puzzle_seed;

    // Placement + layout are CPU-bound; keep them off the async workers.
    let pdf = tokio::task::spawn_blocking(move || -> Result<Vec<u8>, AppError> {
        let grid = build_grid(&words, seed)?;
        Ok(render(&grid, words.as_slice(), &page_config, &HELVETICA)?)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in PDF render: {e}")))??;

    Ok((
        [
            (CONTENT_TYPE, "application/pdf"),
            (CONTENT_DISPOSITION, PDF_CONTENT_DISPOSITION),
        ],
        Bytes::from(pdf),
    )
        .into_response())
}

/// GET /wordsearch.txt?Word_0=..&Word_13=..
///
/// Same puzzle as the PDF route, rendered as plain text.
pub async fn handle_text(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let words = WordList::from_query(&params)?;
    info!(words = words.filled(), "Generating word search text");

    let seed = state.config.puzzle_seed;
    let text = tokio::task::spawn_blocking(move || -> Result<String, AppError> {
        let grid = build_grid(&words, seed)?;
        Ok(render_text(&grid, words.as_slice()))
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in text render: {e}")))??;

    Ok(([(CONTENT_TYPE, "text/plain; charset=utf-8")], text).into_response())
}

/// Generates the grid for one request with its own random generator.
fn build_grid(words: &WordList, seed: Option<u64>) -> Result<Grid, AppError> {
    let mut rng = new_rng(seed);
    Ok(generate(words.as_slice(), ROWS, COLUMNS, &mut rng)?)
}
