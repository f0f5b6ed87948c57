//! A player's run through a puzzle
//!
//! Tracks found words and accumulated score. Nothing here is persisted.

use crate::core::MAX_WORD_LEN;
use crate::corpus::Corpus;
use crate::generator::{Generation, Generator};
use crate::puzzle::{Puzzle, Rank};
use rand::Rng;

/// Result of submitting a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Accepted { word: String, points: u32 },
    AlreadyFound(String),
    NotASolution(String),
}

/// One row of the solution board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardEntry {
    /// Uppercase word, or one `•` per letter while hidden
    pub text: String,
    pub found: bool,
}

/// Play state for the current level
#[derive(Debug, Clone)]
pub struct Session {
    puzzle: Puzzle,
    level: u32,
    found: Vec<String>,
    score: u32,
}

impl Session {
    #[must_use]
    pub const fn new(puzzle: Puzzle, level: u32) -> Self {
        Self {
            puzzle,
            level,
            found: Vec::new(),
            score: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[inline]
    #[must_use]
    pub const fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        Rank::for_level(self.level)
    }

    /// Points accumulated across all levels played
    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Words found on this level, in discovery order
    #[must_use]
    pub fn found(&self) -> &[String] {
        &self.found
    }

    /// (found, total) solutions for this level
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        (self.found.len(), self.puzzle.solutions().len())
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.found.len() == self.puzzle.solutions().len()
    }

    /// Check a guess against the puzzle and score it
    pub fn submit(&mut self, guess: &str) -> Submission {
        let word = guess.trim().to_lowercase();

        if word.chars().count() > MAX_WORD_LEN {
            return Submission::NotASolution(word);
        }
        if self.found.contains(&word) {
            return Submission::AlreadyFound(word);
        }

        match self.puzzle.score_of(&word) {
            Some(points) => {
                self.score += points;
                self.found.push(word.clone());
                Submission::Accepted { word, points }
            }
            None => Submission::NotASolution(word),
        }
    }

    /// Every solution in alphabetical order, masked unless found or `reveal`
    #[must_use]
    pub fn board(&self, reveal: bool) -> Vec<BoardEntry> {
        self.puzzle
            .solutions()
            .iter()
            .map(|word| {
                let found = self.found.contains(word);
                let text = if found || reveal {
                    word.to_uppercase()
                } else {
                    "•".repeat(word.chars().count())
                };
                BoardEntry { text, found }
            })
            .collect()
    }

    /// Swap in the same puzzle with its companion letters reordered
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.puzzle = self.puzzle.with_shuffled_companions(rng);
    }

    /// Move to the next level with a freshly generated puzzle
    ///
    /// Found words reset; the score carries over.
    pub fn advance<R: Rng>(&mut self, generator: &mut Generator<R>, corpus: &Corpus) -> Generation {
        self.level += 1;
        let generation = generator.generate(corpus, self.level);
        self.puzzle = generation.puzzle().clone();
        self.found.clear();
        generation
    }
}
