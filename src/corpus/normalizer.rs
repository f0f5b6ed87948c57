//! Raw word list to `Corpus`

use super::Corpus;
use crate::core::{is_pangram, normalize_word};
use rustc_hash::FxHashSet;

/// Build a corpus from raw lines
///
/// Each line is trimmed and lowercased; lines outside the allowed length
/// range are dropped and duplicates collapse. A word is recorded as a
/// pangram the first time it is seen, so `pangrams` has no duplicates and
/// keeps encounter order.
///
/// # Examples
/// ```
/// use paralogic::corpus::normalize;
///
/// let corpus = normalize(["  Marinos", "MAR", "ya", "mar"]);
/// assert_eq!(corpus.len(), 2);
/// assert_eq!(corpus.pangrams(), &["marinos".to_string()]);
/// ```
pub fn normalize<I, S>(lines: I) -> Corpus
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut words: FxHashSet<String> = FxHashSet::default();
    let mut pangrams = Vec::new();

    for line in lines {
        let Ok(word) = normalize_word(line.as_ref()) else {
            continue;
        };

        if words.contains(&word) {
            continue;
        }

        if is_pangram(&word) {
            pangrams.push(word.clone());
        }
        words.insert(word);
    }

    Corpus::from_parts(words, pangrams)
}
