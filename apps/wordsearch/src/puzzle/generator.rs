//! Puzzle generation: horizontal word placement followed by random filler.
//!
//! # Placement
//! Each non-empty word is placed by rejection sampling: draw a row in `[0, rows)`
//! and a start column in `[0, columns - len)`, accept the first draw whose cells
//! are all empty. Attempts are bounded by `MAX_PLACEMENT_ATTEMPTS`.
//!
//! # Filler
//! Every cell left empty afterwards gets an independent uniform draw from
//! `FILLER_ALPHABET`. Filler can spell extra words; that is accepted.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use crate::layout::font_metrics::is_winansi;
use crate::puzzle::grid::{Grid, Placement};
use crate::puzzle::{InvalidWordReason, PuzzleError};

/// Letters used for filler cells.
pub const FILLER_ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Upper bound on rejection-sampling draws for a single word.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;

/// Builds the per-request generator. A configured seed makes every puzzle reproducible.
pub fn new_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Places `words` into a fresh `rows x columns` grid and fills the remaining cells.
///
/// Empty words are skipped without drawing from `rng`, so adding blank slots
/// never changes the puzzle produced for a given seed.
pub fn generate<R: Rng + ?Sized>(
    words: &[String],
    rows: usize,
    columns: usize,
    rng: &mut R,
) -> Result<Grid, PuzzleError> {
    let mut grid = Grid::new(rows, columns);

    for word in words.iter().filter(|w| !w.is_empty()) {
        let placement = place_word(&mut grid, word, rng)?;
        debug!(
            word = %word,
            row = placement.row,
            start_column = placement.start_column,
            len = placement.len,
            "Placed word"
        );
    }

    fill_empty_cells(&mut grid, rng);
    debug_assert!(grid.is_complete());
    debug!(placed = grid.placements().len(), "Grid filled");
    Ok(grid)
}

/// Uppercases `word` into grid cells.
///
/// Every character must be a letter that the PDF font encoding can show after
/// uppercasing, and the uppercased word must leave at least one start column.
fn word_letters(word: &str, columns: usize) -> Result<Vec<char>, PuzzleError> {
    let invalid = |reason| PuzzleError::InvalidWord {
        word: word.to_string(),
        reason,
    };

    if let Some(c) = word.chars().find(|c| !c.is_alphabetic()) {
        return Err(invalid(InvalidWordReason::NotALetter(c)));
    }

    let letters: Vec<char> = word.chars().flat_map(char::to_uppercase).collect();

    if let Some(c) = letters.iter().copied().find(|c| !is_winansi(*c)) {
        return Err(invalid(InvalidWordReason::Unprintable(c)));
    }

    if letters.len() >= columns {
        return Err(invalid(InvalidWordReason::TooLong {
            len: letters.len(),
            columns,
        }));
    }

    Ok(letters)
}

/// Finds a free horizontal run for `word` and writes it, uppercased, into the grid.
fn place_word<R: Rng + ?Sized>(
    grid: &mut Grid,
    word: &str,
    rng: &mut R,
) -> Result<Placement, PuzzleError> {
    let letters = word_letters(word, grid.columns())?;
    let len = letters.len();

    if grid.rows() > 0 {
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let row = rng.gen_range(0..grid.rows());
            let start_column = rng.gen_range(0..grid.columns() - len);

            if grid.is_run_free(row, start_column, len) {
                let placement = Placement {
                    row,
                    start_column,
                    len,
                };
                grid.place(placement, &letters);
                return Ok(placement);
            }
        }
    }

    warn!(
        word = %word,
        attempts = MAX_PLACEMENT_ATTEMPTS,
        "Placement attempts exhausted"
    );
    Err(PuzzleError::GridFull {
        word: word.to_string(),
        attempts: MAX_PLACEMENT_ATTEMPTS,
    })
}

fn fill_empty_cells<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    for row in 0..grid.rows() {
        for column in 0..grid.columns() {
            if grid.get(row, column).is_none() {
                let letter = FILLER_ALPHABET[rng.gen_range(0..FILLER_ALPHABET.len())];
                grid.set(row, column, letter as char);
            }
        }
    }
}
