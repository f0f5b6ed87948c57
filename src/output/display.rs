//! Display functions for command results

use super::formatters::{create_progress_bar, letter_wheel};
use crate::commands::{BenchmarkResult, CorpusStats};
use crate::corpus::CorpusOrigin;
use crate::generator::Generation;
use crate::puzzle::Rank;
use colored::Colorize;

/// Print a generated puzzle
pub fn print_generation(generation: &Generation, level: u32, show_solutions: bool) {
    let puzzle = generation.puzzle();

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ({}) ",
        "PUZZLE".bright_cyan().bold(),
        format!("level {level}").bright_yellow().bold(),
        Rank::for_level(level)
    );
    println!("{}", "═".repeat(60).cyan());

    println!();
    for line in letter_wheel(puzzle) {
        println!("{}", line.bright_yellow().bold());
    }

    println!("\n   Required letter:  {}", puzzle.required_letter());
    println!("   Solutions:        {}", puzzle.solutions().len());
    println!("   Score ceiling:    {}", puzzle.score_ceiling());

    if generation.is_fallback() {
        println!(
            "\n{}",
            format!(
                "⚠ Fallback puzzle: no candidate qualified in {} attempts",
                generation.attempts()
            )
            .yellow()
            .bold()
        );
    } else {
        println!("   Attempts:         {}", generation.attempts());
    }

    if show_solutions {
        println!("\n📜 {}", "Solutions:".bright_cyan().bold());
        for word in puzzle.solutions() {
            println!(
                "   {:<12} {}",
                word.to_uppercase(),
                format!("+{}", puzzle.scoring().score(word)).bright_black()
            );
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Generation:".bright_cyan().bold());
    println!("   Puzzles:          {}", result.total_puzzles);
    println!(
        "   Fallbacks:        {}",
        format!(
            "{} ({:.1}%)",
            result.fallbacks,
            result.fallback_rate() * 100.0
        )
        .yellow()
    );
    println!(
        "   Average attempts: {}",
        format!("{:.2}", result.average_attempts)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Puzzles/second:   {:.1}", result.puzzles_per_second);

    println!("\n📈 {}", "Accepted puzzles:".bright_cyan().bold());
    println!(
        "   Solutions:        {:.1} avg ({} min, {} max)",
        result.average_solutions, result.min_solutions, result.max_solutions
    );
    println!("   Score ceiling:    {:.1} avg", result.average_ceiling);
}

/// Print corpus statistics
pub fn print_corpus_stats(stats: &CorpusStats, cache_path: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "CORPUS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let origin = match stats.origin {
        CorpusOrigin::Cache => "cache".green().to_string(),
        CorpusOrigin::Built { persisted: true } => {
            "rebuilt from source (cached)".green().to_string()
        }
        CorpusOrigin::Built { persisted: false } => {
            "rebuilt from source (not cached)".yellow().to_string()
        }
        CorpusOrigin::Fallback => "built-in fallback".red().bold().to_string(),
    };

    println!("\n   Origin:     {origin}");
    println!("   Cache file: {cache_path}");
    println!("   Words:      {}", stats.words);
    println!("   Pangrams:   {}", stats.pangrams);

    println!("\n📏 {}", "Word lengths:".bright_cyan().bold());
    let max = stats.length_distribution.values().copied().max().unwrap_or(0);
    for (len, &count) in &stats.length_distribution {
        let bar = create_progress_bar(count as f64, max as f64, 40);
        println!("   {len:2}: {} {count:5}", bar.green());
    }
}
