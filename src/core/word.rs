//! Corpus word normalization
//!
//! Raw corpus lines are trimmed, lowercased and length-checked before they
//! can enter a corpus.

use super::{ALPHABET_SIZE, LetterSet, MAX_WORD_LEN, MIN_WORD_LEN};
use thiserror::Error;

/// Reason a raw line was rejected as a corpus word
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be 3 to 10 letters, got {0}")]
    InvalidLength(usize),
}

/// Normalize a raw corpus line into a word
///
/// Trims surrounding whitespace and lowercases. Length is counted in
/// characters so accented letters count once.
///
/// # Errors
/// Returns `WordError::InvalidLength` if the normalized word is shorter than
/// `MIN_WORD_LEN` or longer than `MAX_WORD_LEN`.
///
/// # Examples
/// ```
/// use paralogic::core::normalize_word;
///
/// assert_eq!(normalize_word("  Tesoro \n").unwrap(), "tesoro");
/// assert!(normalize_word("ya").is_err());
/// ```
pub fn normalize_word(raw: &str) -> Result<String, WordError> {
    let word = raw.trim().to_lowercase();
    let len = word.chars().count();

    if (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&len) {
        Ok(word)
    } else {
        Err(WordError::InvalidLength(len))
    }
}

/// Check whether a word has exactly seven distinct letters
#[must_use]
pub fn is_pangram(word: &str) -> bool {
    LetterSet::of(word).len() == ALPHABET_SIZE
}
