//! Paralogic - CLI
//!
//! Generates and plays seven-letter word puzzles from a cached word corpus.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use paralogic::{
    commands::{analyze_corpus, run_benchmark, run_play, start_session},
    corpus::{CorpusCache, LoadedCorpus, RawSource},
    generator::{Generator, GeneratorConfig},
    output::{print_benchmark_result, print_corpus_stats, print_generation},
};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "paralogic",
    about = "Seven-letter word puzzles generated from a cached word corpus",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list, one word per line (default: embedded Spanish corpus)
    #[arg(short, long, global = true)]
    corpus: Option<PathBuf>,

    /// Directory holding the corpus cache (default: platform cache dir)
    #[arg(long, global = true)]
    cache_dir: Option<PathBuf>,

    /// Seed for reproducible puzzles
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Minimum number of solutions for a generated puzzle
    #[arg(short, long, global = true, default_value = "10")]
    min_solutions: usize,

    /// Log level: error, warn, info, debug, trace (RUST_LOG also works)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play {
        /// Starting level
        #[arg(short, long, default_value = "1")]
        level: u32,
    },

    /// Generate a single puzzle
    Generate {
        /// Level number
        #[arg(short, long, default_value = "1")]
        level: u32,

        /// List every solution with its points
        #[arg(long)]
        show_solutions: bool,
    },

    /// Generate many puzzles and report fallback rate and puzzle size
    Benchmark {
        /// Number of puzzles to generate
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,
    },

    /// Show where the corpus came from and what it contains
    Stats,

    /// Manage the corpus cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

#[derive(Subcommand)]
enum CacheAction {
    /// Print the cache artifact path
    Path,
    /// Delete the cache artifact
    Clear,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .parse_default_env()
        .init();

    let cache = corpus_cache(cli.cache_dir.as_deref())?;
    let source = cli.corpus.clone().map_or(RawSource::Embedded, RawSource::File);
    let config = GeneratorConfig::with_min_solutions(cli.min_solutions);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { level: 1 });

    match command {
        Commands::Cache { action } => run_cache_command(&cache, &action),
        Commands::Stats => {
            let loaded = cache.load_or_build(&source);
            print_corpus_stats(&analyze_corpus(&loaded), &cache.path().display().to_string());
            Ok(())
        }
        Commands::Generate {
            level,
            show_solutions,
        } => {
            let loaded = cache.load_or_build(&source);
            let mut generator = generator(cli.seed, config);
            let generation = generator.generate(&loaded.corpus, level);
            print_generation(&generation, level, show_solutions);
            Ok(())
        }
        Commands::Benchmark { count } => {
            let loaded = cache.load_or_build(&source);
            let base_seed = cli.seed.unwrap_or_else(rand::random);
            println!("Generating {count} puzzles (base seed {base_seed})...");
            let result = run_benchmark(&loaded.corpus, &config, count, base_seed, true);
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::Play { level } => {
            let loaded = cache.load_or_build(&source);
            run_play_command(&loaded, generator(cli.seed, config), level)
        }
    }
}

fn corpus_cache(dir: Option<&std::path::Path>) -> Result<CorpusCache> {
    let dir = match dir {
        Some(dir) => dir.to_path_buf(),
        None => CorpusCache::default_dir()
            .context("could not determine a cache directory; pass --cache-dir")?,
    };
    Ok(CorpusCache::in_dir(dir))
}

fn generator(seed: Option<u64>, config: GeneratorConfig) -> Generator {
    match seed {
        Some(seed) => Generator::seeded(seed, config),
        None => Generator::from_os_rng(config),
    }
}

fn run_cache_command(cache: &CorpusCache, action: &CacheAction) -> Result<()> {
    match action {
        CacheAction::Path => println!("{}", cache.path().display()),
        CacheAction::Clear => {
            if cache.clear()? {
                println!("Removed {}", cache.path().display());
            } else {
                println!("No cache at {}", cache.path().display());
            }
        }
    }
    Ok(())
}

fn run_play_command(loaded: &LoadedCorpus, mut generator: Generator, level: u32) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = start_session(&mut generator, &loaded.corpus, level, &mut stdout)?;
    run_play(
        &mut session,
        &mut generator,
        &loaded.corpus,
        stdin.lock(),
        &mut stdout,
    )?;
    Ok(())
}
