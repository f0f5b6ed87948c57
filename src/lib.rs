//! Paralogic
//!
//! Seven-letter word puzzle generator: pick a pangram from a word corpus,
//! make one of its letters mandatory, and collect every corpus word that can
//! be spelled from those seven letters.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use paralogic::corpus::{CorpusCache, RawSource};
//! use paralogic::generator::{Generator, GeneratorConfig};
//!
//! let loaded = CorpusCache::in_dir("cache").load_or_build(&RawSource::Embedded);
//! let mut generator = Generator::seeded(7, GeneratorConfig::default());
//! let generation = generator.generate(&loaded.corpus, 1);
//!
//! println!("{} ({} words)", generation.puzzle(), generation.puzzle().solutions().len());
//! ```

// Letter-level primitives
pub mod core;

// Corpus normalization and caching
pub mod corpus;

// Puzzle model
pub mod puzzle;

// Puzzle generation
pub mod generator;

// Play sessions
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
