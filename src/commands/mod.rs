//! Command implementations

pub mod benchmark;
pub mod play;
pub mod stats;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use play::{run_play, start_session};
pub use stats::{CorpusStats, analyze_corpus};
