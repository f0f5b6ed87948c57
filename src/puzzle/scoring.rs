//! Per-word scoring policy

/// Word value policy: a word is worth its length minus `length_offset`
///
/// With the default offset of 2 a three-letter word scores 1 and every extra
/// letter adds 1. A valid word never scores below 1, whatever the offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scoring {
    pub length_offset: u32,
}

impl Scoring {
    #[must_use]
    pub const fn new(length_offset: u32) -> Self {
        Self { length_offset }
    }

    /// Points for a single word
    #[must_use]
    pub fn score(&self, word: &str) -> u32 {
        let len = word.chars().count() as u32;
        len.saturating_sub(self.length_offset).max(1)
    }

    /// Sum of `score` over `words`
    #[must_use]
    pub fn total<I, S>(&self, words: I) -> u32
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words.into_iter().map(|w| self.score(w.as_ref())).sum()
    }
}

impl Default for Scoring {
    fn default() -> Self {
        Self::new(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_length_minus_two() {
        let scoring = Scoring::default();
        assert_eq!(scoring.score("mar"), 1);
        assert_eq!(scoring.score("amor"), 2);
        assert_eq!(scoring.score("marinos"), 5);
        assert_eq!(scoring.score("marineros"), 7);
    }

    #[test]
    fn score_counts_characters() {
        assert_eq!(Scoring::default().score("año"), 1);
    }

    #[test]
    fn score_never_below_one() {
        let scoring = Scoring::new(5);
        assert_eq!(scoring.score("mar"), 1);
        assert_eq!(scoring.score("marinos"), 2);
    }

    #[test]
    fn total_sums_words() {
        let scoring = Scoring::default();
        assert_eq!(scoring.total(["mar", "amor", "marinos"]), 1 + 2 + 5);
        assert_eq!(scoring.total(Vec::<String>::new()), 0);
    }
}
