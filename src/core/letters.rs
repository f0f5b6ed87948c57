//! Distinct-letter sets
//!
//! A `LetterSet` is the set of characters a word is made of. Puzzles are
//! built from the letter set of a pangram, and a word is spellable from a
//! puzzle exactly when its letter set is a subset of the puzzle's.

use std::fmt;

/// Sorted, deduplicated set of characters
///
/// Words here are at most ten characters long, so a sorted vector with
/// binary search outperforms a hash set and keeps iteration deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct LetterSet {
    letters: Vec<char>,
}

impl LetterSet {
    /// Collect the distinct characters of `word`
    ///
    /// # Examples
    /// ```
    /// use paralogic::core::LetterSet;
    ///
    /// let set = LetterSet::of("tesoro");
    /// assert_eq!(set.len(), 5);
    /// assert!(set.contains('o'));
    /// ```
    #[must_use]
    pub fn of(word: &str) -> Self {
        word.chars().collect()
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Check if the set contains a specific letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.binary_search(&letter).is_ok()
    }

    /// Check whether every character of `word` belongs to this set
    ///
    /// This is the spellability rule: repeated letters are allowed, foreign
    /// letters are not.
    #[must_use]
    pub fn spells(&self, word: &str) -> bool {
        word.chars().all(|c| self.contains(c))
    }

    /// Check whether every letter of `other` belongs to this set
    #[must_use]
    pub fn is_superset_of(&self, other: &Self) -> bool {
        other.letters.iter().all(|&c| self.contains(c))
    }

    /// Letters in ascending order
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[char] {
        &self.letters
    }

    /// Owned copy of the letters, for shuffling
    #[must_use]
    pub fn to_vec(&self) -> Vec<char> {
        self.letters.clone()
    }
}

/// Single-character uppercase mapping
///
/// Letters whose uppercase form expands to several characters are returned
/// unchanged so a puzzle letter always stays one `char`.
#[must_use]
pub fn to_upper(letter: char) -> char {
    let mut upper = letter.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => letter,
    }
}

/// Single-character lowercase mapping, see `to_upper`
#[must_use]
pub fn to_lower(letter: char) -> char {
    let mut lower = letter.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => letter,
    }
}

impl FromIterator<char> for LetterSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut letters: Vec<char> = iter.into_iter().collect();
        letters.sort_unstable();
        letters.dedup();
        Self { letters }
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_set_deduplicates_and_sorts() {
        let set = LetterSet::of("tesoro");
        assert_eq!(set.as_slice(), &['e', 'o', 'r', 's', 't']);
        assert_eq!(set.len(), 5);
    }

    #[test]
    fn letter_set_of_pangram_has_seven() {
        let set = LetterSet::of("marinos");
        assert_eq!(set.len(), 7);
        assert_eq!(format!("{set}"), "aimnors");
    }

    #[test]
    fn letter_set_empty() {
        let set = LetterSet::of("");
        assert!(set.is_empty());
        assert!(set.spells(""));
    }

    #[test]
    fn spells_allows_repeats() {
        let set = LetterSet::of("marinos");
        assert!(set.spells("mar"));
        assert!(set.spells("ramos"));
        assert!(set.spells("mimos"));
    }

    #[test]
    fn spells_rejects_foreign_letters() {
        let set = LetterSet::of("marinos");
        assert!(!set.spells("tesoro"));
        assert!(!set.spells("arte"));
    }

    #[test]
    fn spells_handles_non_ascii() {
        let set = LetterSet::of("estaño");
        assert!(set.contains('ñ'));
        assert!(set.spells("año"));
        assert!(!set.spells("ano!"));
    }

    #[test]
    fn case_mapping_stays_single_char() {
        assert_eq!(to_upper('a'), 'A');
        assert_eq!(to_upper('ñ'), 'Ñ');
        assert_eq!(to_lower('Ñ'), 'ñ');
        assert_eq!(to_upper('ß'), 'ß');
    }

    #[test]
    fn superset_check() {
        let alphabet = LetterSet::of("marinos");
        assert!(alphabet.is_superset_of(&LetterSet::of("amor")));
        assert!(!alphabet.is_superset_of(&LetterSet::of("arte")));
    }
}
