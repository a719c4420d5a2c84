use crate::config::Config;
use crate::layout::PageConfig;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only: each request builds its own grid and random generator.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Page geometry for the printable puzzle (A4, 10 mm cells).
    pub page_config: PageConfig,
}
