//! Benchmark command
//!
//! Generates many puzzles from one corpus and reports how often generation
//! falls back and what the accepted puzzles look like.

use crate::corpus::Corpus;
use crate::generator::{Generator, GeneratorConfig};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_puzzles: usize,
    pub fallbacks: usize,
    pub average_attempts: f64,
    pub average_solutions: f64,
    pub average_ceiling: f64,
    pub min_solutions: usize,
    pub max_solutions: usize,
    pub duration: Duration,
    pub puzzles_per_second: f64,
}

impl BenchmarkResult {
    /// Share of runs that ended on the fallback puzzle, 0.0-1.0
    #[must_use]
    pub fn fallback_rate(&self) -> f64 {
        if self.total_puzzles == 0 {
            0.0
        } else {
            self.fallbacks as f64 / self.total_puzzles as f64
        }
    }
}

/// Generate `count` puzzles in parallel
///
/// Run `i` uses a generator seeded with `base_seed + i`, so a benchmark is
/// reproducible for a given base seed. Fallback puzzles count towards
/// attempts but not towards the solution and ceiling averages.
pub fn run_benchmark(
    corpus: &Corpus,
    config: &GeneratorConfig,
    count: usize,
    base_seed: u64,
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        progress_bar(count as u64)
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let outcomes: Vec<(u32, Option<(usize, u32)>)> = (0..count as u64)
        .into_par_iter()
        .map(|i| {
            let mut generator = Generator::seeded(base_seed.wrapping_add(i), config.clone());
            let generation = generator.generate(corpus, 1);
            pb.inc(1);

            let accepted = (!generation.is_fallback()).then(|| {
                let puzzle = generation.puzzle();
                (puzzle.solutions().len(), puzzle.score_ceiling())
            });
            (generation.attempts(), accepted)
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let accepted: Vec<(usize, u32)> = outcomes.iter().filter_map(|&(_, a)| a).collect();
    let total_attempts: u64 = outcomes.iter().map(|&(a, _)| u64::from(a)).sum();

    let mean = |sum: f64, n: usize| if n == 0 { 0.0 } else { sum / n as f64 };

    BenchmarkResult {
        total_puzzles: count,
        fallbacks: count - accepted.len(),
        average_attempts: mean(total_attempts as f64, count),
        average_solutions: mean(accepted.iter().map(|&(s, _)| s as f64).sum(), accepted.len()),
        average_ceiling: mean(
            accepted.iter().map(|&(_, c)| f64::from(c)).sum(),
            accepted.len(),
        ),
        min_solutions: accepted.iter().map(|&(s, _)| s).min().unwrap_or(0),
        max_solutions: accepted.iter().map(|&(s, _)| s).max().unwrap_or(0),
        duration,
        puzzles_per_second: count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

fn progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::RawSource;

    #[test]
    fn benchmark_runs() {
        let corpus = RawSource::Embedded.load().unwrap();
        let result = run_benchmark(&corpus, &GeneratorConfig::default(), 20, 0, false);

        assert_eq!(result.total_puzzles, 20);
        assert_eq!(result.fallbacks, 0);
        assert!(result.average_attempts >= 1.0);
        assert!(result.min_solutions >= 10);
        assert!(result.max_solutions >= result.min_solutions);
        assert!(result.average_solutions >= result.min_solutions as f64);
        assert!(result.average_solutions <= result.max_solutions as f64);
        assert!(result.average_ceiling >= result.average_solutions);
    }

    #[test]
    fn benchmark_is_reproducible() {
        let corpus = RawSource::Embedded.load().unwrap();
        let a = run_benchmark(&corpus, &GeneratorConfig::default(), 10, 77, false);
        let b = run_benchmark(&corpus, &GeneratorConfig::default(), 10, 77, false);

        assert!((a.average_attempts - b.average_attempts).abs() < f64::EPSILON);
        assert!((a.average_ceiling - b.average_ceiling).abs() < f64::EPSILON);
    }

    #[test]
    fn benchmark_counts_fallbacks() {
        let corpus = Corpus::fallback();
        let result = run_benchmark(&corpus, &GeneratorConfig::default(), 5, 0, false);

        assert_eq!(result.fallbacks, 5);
        assert!((result.fallback_rate() - 1.0).abs() < f64::EPSILON);
        assert!((result.average_attempts - 100.0).abs() < f64::EPSILON);
        assert_eq!(result.min_solutions, 0);
    }

    #[test]
    fn benchmark_empty_run() {
        let corpus = Corpus::fallback();
        let result = run_benchmark(&corpus, &GeneratorConfig::default(), 0, 0, false);

        assert_eq!(result.total_puzzles, 0);
        assert_eq!(result.fallbacks, 0);
        assert!(result.fallback_rate().abs() < f64::EPSILON);
    }
}
