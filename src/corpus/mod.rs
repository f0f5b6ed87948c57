//! Word corpus: normalization, raw sources and the on-disk cache
//!
//! A `Corpus` is built once from a raw line-oriented word list, then cached
//! as JSON so later runs skip the parse.

mod cache;
mod normalizer;
mod source;

pub use cache::{CorpusCache, CorpusOrigin, LoadedCorpus, SCHEMA_VERSION, load_or_build};
pub use normalizer::normalize;
pub use source::RawSource;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading a raw source or the cache artifact
///
/// None of these escape `CorpusCache::load_or_build`; they are exposed so
/// each failure class can be inspected and tested on its own.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("corpus source {} is unreadable: {source}", path.display())]
    SourceUnreadable { path: PathBuf, source: io::Error },

    #[error("cache artifact {} is unreadable: {source}", path.display())]
    CacheUnreadable { path: PathBuf, source: io::Error },

    #[error("cache artifact {} is malformed: {source}", path.display())]
    CacheMalformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write cache artifact {}: {source}", path.display())]
    CacheWrite { path: PathBuf, source: io::Error },
}

/// Normalized word corpus
///
/// `words` holds every accepted word; `pangrams` lists the words with exactly
/// seven distinct letters in the order they were first encountered. Every
/// pangram is also a word.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Corpus {
    words: FxHashSet<String>,
    pangrams: Vec<String>,
}

impl Corpus {
    /// Assemble a corpus from already-normalized parts
    ///
    /// Pangrams missing from `words` are added to it so the subset relation
    /// always holds.
    #[must_use]
    pub fn from_parts<I, S>(words: I, pangrams: Vec<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut words: FxHashSet<String> = words.into_iter().map(Into::into).collect();
        words.extend(pangrams.iter().cloned());
        Self { words, pangrams }
    }

    /// Minimal corpus used when no raw source can be read
    #[must_use]
    pub fn fallback() -> Self {
        Self::from_parts(["mar", "tesoro", "marinos"], vec!["marinos".to_string()])
    }

    #[inline]
    #[must_use]
    pub const fn words(&self) -> &FxHashSet<String> {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn pangrams(&self) -> &[String] {
        &self.pangrams
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
