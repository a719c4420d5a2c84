//! Axum route handler for the form page.

use axum::response::Html;

use crate::errors::AppError;
use crate::form::template::render_form;
use crate::puzzle::NUM_WORDS;

/// GET /
///
/// Returns the HTML form with one input per word slot.
pub async fn handle_form() -> Result<Html<String>, AppError> {
    let page = render_form(NUM_WORDS)?;
    Ok(Html(page))
}
