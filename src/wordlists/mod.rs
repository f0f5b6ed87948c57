//! Word lists shipped with the binary
//!
//! Provides the raw corpus embedded at build time, used when no corpus file
//! is given on the command line.

mod embedded;

pub use embedded::{EMBEDDED_CORPUS, EMBEDDED_CORPUS_COUNT};
