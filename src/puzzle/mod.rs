//! The immutable puzzle model
//!
//! A `Puzzle` is one required letter, six companion letters and the corpus
//! words spellable from them. It is built once by the generator and only
//! ever read afterwards; "changing" a puzzle means building a new one.

mod rank;
mod scoring;

pub use rank::Rank;
pub use scoring::Scoring;

use crate::core::{ALPHABET_SIZE, LetterSet, normalize_word, to_lower, to_upper};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

/// Number of non-required letters in a puzzle
pub const COMPANION_COUNT: usize = ALPHABET_SIZE - 1;

const FALLBACK_REQUIRED: char = 'E';
const FALLBACK_COMPANIONS: [char; COMPANION_COUNT] = ['A', 'T', 'M', 'S', 'R', 'O'];
const FALLBACK_SOLUTIONS: &[&str] = &["tesoro", "meta", "mesa", "tema", "metro", "resto"];

/// A violated puzzle invariant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("puzzle needs 7 distinct letters, got \"{0}\"")]
    DuplicateLetters(String),
    #[error("solution \"{0}\" does not contain the required letter")]
    MissingRequiredLetter(String),
    #[error("solution \"{0}\" uses letters outside the puzzle")]
    ForeignLetter(String),
    #[error("solution \"{0}\" is not a normalized corpus word")]
    NotNormalized(String),
}

/// A playable puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    required: char,
    required_key: char,
    companions: [char; COMPANION_COUNT],
    alphabet: LetterSet,
    solutions: BTreeSet<String>,
    score_ceiling: u32,
    scoring: Scoring,
}

impl Puzzle {
    /// Build and validate a puzzle
    ///
    /// Letters are shown uppercase whatever case they are given in, but
    /// distinctness and spelling are checked on their lowercase forms, so
    /// letters that share an uppercase form (`σ` and `ς`) stay distinct.
    /// The score ceiling is computed from `solutions` with `scoring`.
    ///
    /// # Errors
    /// Returns `PuzzleError` if the seven letters are not distinct, or if any
    /// solution is not a normalized word, lacks the required letter, or uses
    /// a letter outside the puzzle.
    ///
    /// # Examples
    /// ```
    /// use paralogic::puzzle::{Puzzle, Scoring};
    ///
    /// let puzzle = Puzzle::new(
    ///     'a',
    ///     ['m', 'r', 'i', 'n', 'o', 's'],
    ///     ["mar".to_string(), "marinos".to_string()],
    ///     Scoring::default(),
    /// )
    /// .unwrap();
    /// assert_eq!(puzzle.required_letter(), 'A');
    /// assert_eq!(puzzle.score_ceiling(), 1 + 5);
    /// ```
    pub fn new<I>(
        required: char,
        companions: [char; COMPANION_COUNT],
        solutions: I,
        scoring: Scoring,
    ) -> Result<Self, PuzzleError>
    where
        I: IntoIterator<Item = String>,
    {
        let puzzle = Self::assemble(required, companions, solutions, scoring);
        puzzle.validate()?;
        Ok(puzzle)
    }

    /// Fixed puzzle returned when generation gives up
    ///
    /// Always the same letters and words so exhaustion is easy to spot.
    #[must_use]
    pub fn fallback() -> Self {
        Self::assemble(
            FALLBACK_REQUIRED,
            FALLBACK_COMPANIONS,
            FALLBACK_SOLUTIONS.iter().map(|&w| w.to_string()),
            Scoring::default(),
        )
    }

    fn assemble<I>(
        required: char,
        companions: [char; COMPANION_COUNT],
        solutions: I,
        scoring: Scoring,
    ) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let required_key = to_lower(required);
        let alphabet = std::iter::once(required)
            .chain(companions)
            .map(to_lower)
            .collect();
        let required = to_upper(required);
        let companions = companions.map(to_upper);
        let solutions: BTreeSet<String> = solutions.into_iter().collect();
        let score_ceiling = scoring.total(&solutions);

        Self {
            required,
            required_key,
            companions,
            alphabet,
            solutions,
            score_ceiling,
            scoring,
        }
    }

    /// Check every structural invariant
    ///
    /// # Errors
    /// See `Puzzle::new`.
    pub fn validate(&self) -> Result<(), PuzzleError> {
        if self.alphabet.len() != ALPHABET_SIZE {
            let letters: String = std::iter::once(self.required)
                .chain(self.companions)
                .collect();
            return Err(PuzzleError::DuplicateLetters(letters));
        }

        let required = self.required_key;
        for word in &self.solutions {
            if normalize_word(word).ok().as_deref() != Some(word.as_str()) {
                return Err(PuzzleError::NotNormalized(word.clone()));
            }
            if !word.contains(required) {
                return Err(PuzzleError::MissingRequiredLetter(word.clone()));
            }
            if !self.alphabet.spells(word) {
                return Err(PuzzleError::ForeignLetter(word.clone()));
            }
        }

        Ok(())
    }

    /// The mandatory letter, uppercase
    #[inline]
    #[must_use]
    pub const fn required_letter(&self) -> char {
        self.required
    }

    /// The six other letters, uppercase, in display order
    #[inline]
    #[must_use]
    pub const fn companion_letters(&self) -> &[char] {
        &self.companions
    }

    /// The mandatory letter as it appears in solution words
    #[inline]
    #[must_use]
    pub const fn required_key(&self) -> char {
        self.required_key
    }

    /// All seven letters, lowercase
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &LetterSet {
        &self.alphabet
    }

    /// Solution words in alphabetical order
    #[inline]
    #[must_use]
    pub const fn solutions(&self) -> &BTreeSet<String> {
        &self.solutions
    }

    #[inline]
    #[must_use]
    pub const fn score_ceiling(&self) -> u32 {
        self.score_ceiling
    }

    #[inline]
    #[must_use]
    pub const fn scoring(&self) -> Scoring {
        self.scoring
    }

    /// Whether `word` (any case, surrounding whitespace ignored) is a solution
    #[must_use]
    pub fn is_solution(&self, word: &str) -> bool {
        self.solutions.contains(word.trim().to_lowercase().as_str())
    }

    /// Points `word` is worth, or `None` if it is not a solution
    #[must_use]
    pub fn score_of(&self, word: &str) -> Option<u32> {
        let word = word.trim().to_lowercase();
        self.solutions
            .contains(&word)
            .then(|| self.scoring.score(&word))
    }

    /// Same puzzle with the companion letters in a new random order
    #[must_use]
    pub fn with_shuffled_companions<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut next = self.clone();
        next.companions.shuffle(rng);
        next
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.required)?;
        for letter in &self.companions {
            write!(f, " {letter}")?;
        }
        Ok(())
    }
}
