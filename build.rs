//! Build script embedding the default word corpus
//!
//! Turns `data/corpus.txt` into a const slice of raw lines. Lines are kept
//! exactly as written, only blank lines are skipped; normalization is done
//! at runtime the same way as for a corpus file passed on the command line.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const CORPUS_PATH: &str = "data/corpus.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let raw = fs::read_to_string(CORPUS_PATH)
        .unwrap_or_else(|e| panic!("Failed to read {CORPUS_PATH}: {e}"));

    let lines: Vec<&str> = raw
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();

    let mut source = String::new();
    writeln!(source, "// Generated from {CORPUS_PATH}").unwrap();
    writeln!(source).unwrap();
    writeln!(source, "/// Raw word corpus shipped with the binary").unwrap();
    writeln!(source, "pub const EMBEDDED_CORPUS: &[&str] = &[").unwrap();
    for line in &lines {
        writeln!(source, "    {line:?},").unwrap();
    }
    writeln!(source, "];").unwrap();
    writeln!(source).unwrap();
    writeln!(source, "/// Number of lines in `EMBEDDED_CORPUS`").unwrap();
    writeln!(source, "pub const EMBEDDED_CORPUS_COUNT: usize = {};", lines.len()).unwrap();

    let target = Path::new(&out_dir).join("corpus.rs");
    fs::write(&target, source)
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", target.display()));

    println!("cargo:rerun-if-changed={CORPUS_PATH}");
}
