//! Fixed-capacity ordered word list built from request input.
//!
//! Every list holds exactly `NUM_WORDS` slots. Blank slots are kept so the
//! rendered answer list numbers stay aligned with the form inputs.

use crate::puzzle::{PuzzleError, NUM_WORDS};

/// Query parameter prefix used by the form inputs (`Word_0` .. `Word_13`).
pub const WORD_PARAM_PREFIX: &str = "Word_";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    slots: Vec<String>,
}

impl WordList {
    /// Builds a list from up to `NUM_WORDS` raw values, trimming whitespace
    /// and padding the remainder with empty slots.
    pub fn new<I, S>(words: I) -> Result<Self, PuzzleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let slots: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .collect();

        if slots.len() > NUM_WORDS {
            return Err(PuzzleError::TooManyWords {
                count: slots.len(),
                capacity: NUM_WORDS,
            });
        }

        let mut list = WordList { slots };
        list.slots.resize(NUM_WORDS, String::new());
        Ok(list)
    }

    /// Reads `Word_0 .. Word_{N-1}` out of decoded query pairs.
    /// Missing keys become empty slots and any other key is ignored. A key
    /// repeated in the query keeps its first value.
    pub fn from_query(params: &[(String, String)]) -> Result<Self, PuzzleError> {
        let words = (0..NUM_WORDS).map(|i| {
            let key = format!("{WORD_PARAM_PREFIX}{i}");
            params
                .iter()
                .find(|(name, _)| *name == key)
                .map_or("", |(_, value)| value.as_str())
        });
        Self::new(words)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.slots
    }

    /// Number of slots holding an actual word.
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|w| !w.is_empty()).count()
    }
}
