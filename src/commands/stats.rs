//! Corpus statistics command

use crate::corpus::{CorpusOrigin, LoadedCorpus};
use std::collections::BTreeMap;

/// Summary of a loaded corpus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusStats {
    pub origin: CorpusOrigin,
    pub words: usize,
    pub pangrams: usize,
    /// Word count per length in characters
    pub length_distribution: BTreeMap<usize, usize>,
}

/// Summarize a loaded corpus
#[must_use]
pub fn analyze_corpus(loaded: &LoadedCorpus) -> CorpusStats {
    let mut length_distribution = BTreeMap::new();
    for word in loaded.corpus.words() {
        *length_distribution.entry(word.chars().count()).or_insert(0) += 1;
    }

    CorpusStats {
        origin: loaded.origin,
        words: loaded.corpus.len(),
        pangrams: loaded.corpus.pangrams().len(),
        length_distribution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;

    #[test]
    fn stats_for_fallback_corpus() {
        let loaded = LoadedCorpus {
            corpus: Corpus::fallback(),
            origin: CorpusOrigin::Fallback,
        };
        let stats = analyze_corpus(&loaded);

        assert_eq!(stats.origin, CorpusOrigin::Fallback);
        assert_eq!(stats.words, 3);
        assert_eq!(stats.pangrams, 1);
        assert_eq!(
            stats.length_distribution,
            BTreeMap::from([(3, 1), (6, 1), (7, 1)])
        );
    }

    #[test]
    fn distribution_sums_to_word_count() {
        let loaded = LoadedCorpus {
            corpus: crate::corpus::RawSource::Embedded.load().unwrap(),
            origin: CorpusOrigin::Built { persisted: false },
        };
        let stats = analyze_corpus(&loaded);

        let total: usize = stats.length_distribution.values().sum();
        assert_eq!(total, stats.words);
        assert!(stats.length_distribution.keys().all(|&len| (3..=10).contains(&len)));
    }
}
