//! Generator policy parameters

use crate::puzzle::Scoring;

/// Tunable generation policy
///
/// Defaults: at least 10 solutions, at most 100 attempts, length-minus-two
/// scoring, and "marinos" as the pangram used when a corpus has none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Smallest solution set accepted for a generated puzzle
    pub min_solutions: usize,
    /// Candidates tried before giving up and returning the fallback puzzle
    pub max_attempts: u32,
    pub scoring: Scoring,
    /// Pangram sampled when the corpus has none
    pub default_pangram: String,
}

impl GeneratorConfig {
    /// Default config with a different solution threshold
    #[must_use]
    pub fn with_min_solutions(min_solutions: usize) -> Self {
        Self {
            min_solutions,
            ..Self::default()
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_solutions: 10,
            max_attempts: 100,
            scoring: Scoring::default(),
            default_pangram: "marinos".to_string(),
        }
    }
}
