// Output formats for a generated puzzle: printable PDF and plain text.

pub mod pdf;
pub mod text;

pub use pdf::{render, DocumentError};
pub use text::render_text;
