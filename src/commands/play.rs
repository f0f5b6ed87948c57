//! Interactive play mode
//!
//! Line-based game loop: type words to score them, or a command.

use crate::corpus::Corpus;
use crate::game::{Session, Submission};
use crate::generator::{Generation, Generator};
use crate::output::formatters::{create_progress_bar, format_board, letter_wheel};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

const HELP: &str = "Commands: 'shuffle' reorders letters, 'board' shows found words, \
'reveal' shows every solution, 'next' skips to a new puzzle, 'quit' exits";

/// Generate the first puzzle and open a session on it
///
/// # Errors
///
/// Returns an error if writing the fallback notice to `output` fails.
pub fn start_session<R, O>(
    generator: &mut Generator<R>,
    corpus: &Corpus,
    level: u32,
    output: &mut O,
) -> io::Result<Session>
where
    R: Rng,
    O: Write,
{
    let generation = generator.generate(corpus, level);
    warn_if_fallback(&generation, output)?;
    Ok(Session::new(generation.into_puzzle(), level))
}

fn warn_if_fallback<O: Write>(generation: &Generation, output: &mut O) -> io::Result<()> {
    if generation.is_fallback() {
        writeln!(
            output,
            "{}",
            "⚠ Could not generate a fresh puzzle; using the backup one.".yellow()
        )?;
    }
    Ok(())
}

/// Run the interactive loop until `quit` or end of input
///
/// # Errors
///
/// Returns an error if reading `input` or writing `output` fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_play<R, I, O>(
    session: &mut Session,
    generator: &mut Generator<R>,
    corpus: &Corpus,
    input: I,
    output: &mut O,
) -> io::Result<()>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                  Paralogic - Find the Words                  ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        output,
        "Spell words of 3-10 letters using only the letters on the wheel."
    )?;
    writeln!(output, "Every word must contain the letter in the hub.\n")?;
    writeln!(output, "{HELP}\n")?;

    print_status(session, output)?;

    let mut lines = input.lines();
    loop {
        write!(output, "Word or command: ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            return Ok(());
        };
        let line = line?;
        let command = line.trim().to_lowercase();

        match command.as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                writeln!(
                    output,
                    "\n👋 Final score: {} points. Fair winds!\n",
                    session.score()
                )?;
                return Ok(());
            }
            "help" | "h" | "?" => writeln!(output, "{HELP}\n")?,
            "shuffle" | "s" => {
                session.shuffle(generator.rng_mut());
                print_status(session, output)?;
            }
            "board" | "b" => print_board(session, false, output)?,
            "reveal" | "r" => print_board(session, true, output)?,
            "next" | "n" => {
                let generation = session.advance(generator, corpus);
                warn_if_fallback(&generation, output)?;
                writeln!(output, "\n🔄 Level {}!\n", session.level())?;
                print_status(session, output)?;
            }
            _ => {
                match session.submit(&command) {
                    Submission::Accepted { word, points } => {
                        writeln!(
                            output,
                            "{} {} (+{points})",
                            "✓ Great find:".green().bold(),
                            word.to_uppercase().bright_white().bold()
                        )?;
                    }
                    Submission::AlreadyFound(word) => {
                        writeln!(output, "Already found {}", word.to_uppercase())?;
                    }
                    Submission::NotASolution(word) => {
                        writeln!(
                            output,
                            "{} {}",
                            "✗ Not a solution:".red(),
                            word.to_uppercase()
                        )?;
                    }
                }

                if session.is_complete() {
                    writeln!(
                        output,
                        "\n{}",
                        "🎉 All words found! Type 'next' for a new puzzle."
                            .bright_green()
                            .bold()
                    )?;
                }
                writeln!(output)?;
            }
        }
    }
}

fn print_status<O: Write>(session: &Session, output: &mut O) -> io::Result<()> {
    let puzzle = session.puzzle();
    let (found, total) = session.progress();

    writeln!(output, "{}", "─".repeat(60).cyan())?;
    writeln!(
        output,
        "Level {} ({}) - score {}",
        session.level(),
        session.rank(),
        session.score()
    )?;
    writeln!(output, "{}", "─".repeat(60).cyan())?;

    for line in letter_wheel(puzzle) {
        writeln!(output, "{}", line.bright_yellow().bold())?;
    }

    let level_points = session
        .found()
        .iter()
        .map(|w| puzzle.scoring().score(w))
        .sum::<u32>();
    writeln!(
        output,
        "\nWords: {found}/{total}  [{}] {level_points}/{} points\n",
        create_progress_bar(f64::from(level_points), f64::from(puzzle.score_ceiling()), 20),
        puzzle.score_ceiling()
    )
}

fn print_board<O: Write>(session: &Session, reveal: bool, output: &mut O) -> io::Result<()> {
    writeln!(output)?;
    for row in format_board(&session.board(reveal), 4) {
        writeln!(output, "  {row}")?;
    }
    writeln!(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::GeneratorConfig;
    use crate::puzzle::Puzzle;
    use std::io::Cursor;

    fn play(script: &str) -> (Session, String) {
        let corpus = crate::corpus::RawSource::Embedded.load().unwrap();
        let mut generator = Generator::seeded(1, GeneratorConfig::default());
        let mut session = Session::new(Puzzle::fallback(), 1);
        let mut output = Vec::new();

        run_play(
            &mut session,
            &mut generator,
            &corpus,
            Cursor::new(script.to_string()),
            &mut output,
        )
        .unwrap();

        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn scores_submitted_words() {
        let (session, output) = play("tesoro\nmeta\nxyz\nquit\n");
        assert_eq!(session.score(), 4 + 2);
        assert!(output.contains("TESORO"));
        assert!(output.contains("Final score: 6 points"));
    }

    #[test]
    fn duplicate_submission_reported() {
        let (session, output) = play("mesa\nMESA\n");
        assert_eq!(session.score(), 2);
        assert!(output.contains("Already found MESA"));
    }

    #[test]
    fn end_of_input_stops_loop() {
        let (session, _) = play("tema\n");
        assert_eq!(session.found(), &["tema".to_string()]);
    }

    #[test]
    fn reveal_lists_all_solutions() {
        let (_, output) = play("reveal\nq\n");
        for word in Puzzle::fallback().solutions() {
            assert!(output.contains(&word.to_uppercase()), "{word} missing");
        }
    }

    #[test]
    fn next_advances_level() {
        let (session, output) = play("tesoro\nnext\nq\n");
        assert_eq!(session.level(), 2);
        assert_eq!(session.score(), 4);
        assert!(session.found().is_empty());
        assert!(output.contains("Level 2"));
    }

    #[test]
    fn first_puzzle_fallback_is_reported() {
        let mut generator = Generator::seeded(1, GeneratorConfig::default());
        let mut output = Vec::new();

        let session =
            start_session(&mut generator, &Corpus::fallback(), 3, &mut output).unwrap();

        assert_eq!(session.puzzle(), &Puzzle::fallback());
        assert_eq!(session.level(), 3);
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("using the backup one"));
    }

    #[test]
    fn first_puzzle_generated_quietly() {
        let corpus = crate::corpus::RawSource::Embedded.load().unwrap();
        let mut generator = Generator::seeded(1, GeneratorConfig::default());
        let mut output = Vec::new();

        let session = start_session(&mut generator, &corpus, 1, &mut output).unwrap();

        assert!(session.puzzle().solutions().len() >= 10);
        assert!(output.is_empty());
    }

    #[test]
    fn completing_puzzle_announced() {
        let script = "tesoro\nmeta\nmesa\ntema\nmetro\nresto\nq\n";
        let (session, output) = play(script);
        assert!(session.is_complete());
        assert!(output.contains("All words found!"));
    }
}
