//! In-memory play over generated puzzles

mod session;

pub use session::{BoardEntry, Session, Submission};
