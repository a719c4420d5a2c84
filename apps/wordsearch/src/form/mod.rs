// HTML form that collects the puzzle words.
// Templates are plain string constants filled with `{placeholder}` replacement.

pub mod handlers;
pub mod template;

pub use template::{render_form, TemplateError};
