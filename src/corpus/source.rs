//! Raw corpus sources
//!
//! A raw source is a UTF-8 word list, one word per line. It is only ever
//! read, never modified.

use super::{Corpus, CorpusError, normalize};
use crate::wordlists::EMBEDDED_CORPUS;
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Where raw corpus lines come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawSource {
    /// Text file on disk
    File(PathBuf),
    /// Word list compiled into the binary
    Embedded,
}

impl RawSource {
    /// Read every line of the source
    ///
    /// # Errors
    /// Returns `CorpusError::SourceUnreadable` if the file is missing,
    /// unreadable, or not valid UTF-8.
    pub fn read_lines(&self) -> Result<Vec<String>, CorpusError> {
        match self {
            Self::File(path) => {
                let content =
                    fs::read_to_string(path).map_err(|source| CorpusError::SourceUnreadable {
                        path: path.clone(),
                        source,
                    })?;
                Ok(content.lines().map(str::to_string).collect())
            }
            Self::Embedded => Ok(EMBEDDED_CORPUS.iter().map(|&s| s.to_string()).collect()),
        }
    }

    /// Read and normalize the source into a fresh corpus
    ///
    /// # Errors
    /// Propagates `read_lines` failures; normalization itself cannot fail.
    pub fn load(&self) -> Result<Corpus, CorpusError> {
        Ok(normalize(self.read_lines()?))
    }
}

impl fmt::Display for RawSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Embedded => write!(f, "<embedded corpus>"),
        }
    }
}
