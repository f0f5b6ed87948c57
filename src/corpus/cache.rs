//! JSON cache for the normalized corpus
//!
//! The first run parses the raw source and writes the result next to a
//! versioned file name; later runs deserialize it directly. Corrupt
//! artifacts are deleted and rebuilt, and any failure to read the source
//! falls back to a tiny built-in corpus, so loading never fails.

use super::{Corpus, CorpusError, RawSource};
use log::{debug, info, warn};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Version of the serialized corpus shape
///
/// Bump this whenever `Corpus` changes shape so stale artifacts are bypassed
/// under their old file name instead of being misread.
pub const SCHEMA_VERSION: u32 = 1;

/// Where a loaded corpus came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusOrigin {
    /// Deserialized from the cache artifact
    Cache,
    /// Rebuilt from the raw source; `persisted` tells whether the cache write succeeded
    Built { persisted: bool },
    /// Source unreadable, built-in minimal corpus used
    Fallback,
}

/// A corpus together with how it was obtained
#[derive(Debug, Clone)]
pub struct LoadedCorpus {
    pub corpus: Corpus,
    pub origin: CorpusOrigin,
}

/// Cache artifact handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusCache {
    path: PathBuf,
}

impl CorpusCache {
    /// Use an explicit artifact path
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Use the versioned artifact name inside `dir`
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(Self::file_name()))
    }

    /// Versioned artifact file name, e.g. `corpus_cache_v1.json`
    #[must_use]
    pub fn file_name() -> String {
        format!("corpus_cache_v{SCHEMA_VERSION}.json")
    }

    /// Platform cache directory for this application, if one can be determined
    #[must_use]
    pub fn default_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "paralogic")
            .map(|dirs| dirs.cache_dir().to_path_buf())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Deserialize the artifact
    ///
    /// # Errors
    /// Returns `CacheUnreadable` if the file cannot be opened and
    /// `CacheMalformed` if its content is not a serialized corpus.
    pub fn read(&self) -> Result<Corpus, CorpusError> {
        let file = File::open(&self.path).map_err(|source| CorpusError::CacheUnreadable {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            CorpusError::CacheMalformed {
                path: self.path.clone(),
                source,
            }
        })
    }

    /// Serialize `corpus` to the artifact path
    ///
    /// The corpus is written to a temporary file in the same directory and
    /// renamed into place, so a concurrent reader sees either the previous
    /// artifact or the complete new one, never a partial write.
    ///
    /// # Errors
    /// Returns `CacheWrite` if the directory cannot be created or the file
    /// cannot be written or renamed.
    pub fn write(&self, corpus: &Corpus) -> Result<(), CorpusError> {
        let write_err = |source: std::io::Error| CorpusError::CacheWrite {
            path: self.path.clone(),
            source,
        };

        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir).map_err(write_err)?;

        let mut temp = NamedTempFile::new_in(dir).map_err(write_err)?;
        {
            let mut writer = BufWriter::new(temp.as_file_mut());
            serde_json::to_writer(&mut writer, corpus).map_err(|e| write_err(e.into()))?;
            writer.flush().map_err(write_err)?;
        }

        temp.persist(&self.path).map_err(|e| write_err(e.error))?;
        Ok(())
    }

    /// Delete the artifact
    ///
    /// Returns whether a file was actually removed.
    ///
    /// # Errors
    /// Returns `CacheWrite` if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<bool, CorpusError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(CorpusError::CacheWrite {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Load the cached corpus, rebuilding it from `source` when needed
    ///
    /// 1. A readable artifact is returned as-is.
    /// 2. A malformed artifact is deleted.
    /// 3. Otherwise the corpus is rebuilt from `source` and written back;
    ///    a failed write is logged and ignored.
    /// 4. If `source` cannot be read, `Corpus::fallback()` is returned.
    pub fn load_or_build(&self, source: &RawSource) -> LoadedCorpus {
        if self.exists() {
            match self.read() {
                Ok(corpus) => {
                    info!(
                        "Loaded {} words ({} pangrams) from cache {}",
                        corpus.len(),
                        corpus.pangrams().len(),
                        self.path.display()
                    );
                    return LoadedCorpus {
                        corpus,
                        origin: CorpusOrigin::Cache,
                    };
                }
                Err(err @ CorpusError::CacheMalformed { .. }) => {
                    warn!("{err}; deleting it");
                    if let Err(e) = self.clear() {
                        warn!("{e}");
                    }
                }
                Err(err) => warn!("{err}; rebuilding"),
            }
        } else {
            debug!("No cache artifact at {}", self.path.display());
        }

        match source.load() {
            Ok(corpus) => {
                info!(
                    "Built corpus from {source}: {} words, {} pangrams",
                    corpus.len(),
                    corpus.pangrams().len()
                );
                let persisted = match self.write(&corpus) {
                    Ok(()) => {
                        info!("Cached corpus at {}", self.path.display());
                        true
                    }
                    Err(err) => {
                        warn!("{err}; continuing without cache");
                        false
                    }
                };
                LoadedCorpus {
                    corpus,
                    origin: CorpusOrigin::Built { persisted },
                }
            }
            Err(err) => {
                warn!("{err}; using built-in fallback corpus");
                LoadedCorpus {
                    corpus: Corpus::fallback(),
                    origin: CorpusOrigin::Fallback,
                }
            }
        }
    }
}

/// Load a corpus through the cache at `cache_location`
///
/// Convenience wrapper around `CorpusCache::load_or_build` for callers that
/// don't care where the corpus came from.
pub fn load_or_build(cache_location: impl Into<PathBuf>, raw_source: &RawSource) -> Corpus {
    CorpusCache::new(cache_location)
        .load_or_build(raw_source)
        .corpus
}
