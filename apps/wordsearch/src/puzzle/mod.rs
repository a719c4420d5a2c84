// Puzzle engine: word list boundary, grid model, placement + filler generation.
// Generation is CPU-bound; handlers run it inside tokio::task::spawn_blocking.

pub mod generator;
pub mod grid;
pub mod handlers;
pub mod word_list;

use thiserror::Error;

/// Number of grid rows in every generated puzzle.
pub const ROWS: usize = 12;
/// Number of grid columns in every generated puzzle.
pub const COLUMNS: usize = 14;
/// Fixed capacity of the word list (and number of form inputs).
pub const NUM_WORDS: usize = 14;

pub use grid::Grid;
pub use word_list::WordList;

/// Failures raised while building a word list or placing words into a grid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("invalid word '{word}': {reason}")]
    InvalidWord {
        word: String,
        reason: InvalidWordReason,
    },

    #[error("no free run found for word '{word}' after {attempts} attempts")]
    GridFull { word: String, attempts: u32 },

    #[error("{count} words supplied but the word list holds {capacity}")]
    TooManyWords { count: usize, capacity: usize },
}

/// Why a word cannot be placed into the grid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidWordReason {
    #[error("{len} letters leave no start column in a {columns}-column grid")]
    TooLong { len: usize, columns: usize },

    #[error("'{0}' is not a letter")]
    NotALetter(char),

    #[error("'{0}' cannot be printed in the puzzle font")]
    Unprintable(char),
}
