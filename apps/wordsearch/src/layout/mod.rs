// Page layout for the printable puzzle.
// Pure geometry: grid table + numbered word list flowed through the column state machine.
// No PDF types here; render::pdf consumes DocumentLayout.

pub mod columns;
pub mod font_metrics;
pub mod page;

pub use font_metrics::{a4_page_config, PageConfig, HELVETICA};
