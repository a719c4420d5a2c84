//! Plain-text rendering of a puzzle: letter rows, a blank line, then the numbered word list.

use std::fmt::Write;

use crate::puzzle::Grid;

pub fn render_text(grid: &Grid, words: &[String]) -> String {
    let mut out = String::new();

    for row in 0..grid.rows() {
        for cell in grid.row(row) {
            out.push(cell.unwrap_or(' '));
            out.push(' ');
        }
        out.push('\n');
    }
    out.push('\n');

    for (i, word) in words.iter().enumerate() {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{}. {}", i + 1, word);
    }

    out
}
