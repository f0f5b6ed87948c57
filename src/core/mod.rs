//! Core letter-level types for the puzzle
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure, testable, and have clear set-theoretic properties.

mod letters;
mod word;

pub use letters::{LetterSet, to_lower, to_upper};
pub use word::{WordError, is_pangram, normalize_word};

/// Shortest word kept in a corpus
pub const MIN_WORD_LEN: usize = 3;

/// Longest word kept in a corpus
pub const MAX_WORD_LEN: usize = 10;

/// Number of distinct letters in a puzzle alphabet (and in a pangram)
pub const ALPHABET_SIZE: usize = 7;
