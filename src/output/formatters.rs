//! Formatting utilities for terminal output

use crate::core::MAX_WORD_LEN;
use crate::game::BoardEntry;
use crate::puzzle::Puzzle;

/// Lay the seven letters out as a wheel, required letter in the hub
///
/// Companions go clockwise from the top.
#[must_use]
pub fn letter_wheel(puzzle: &Puzzle) -> Vec<String> {
    let c = puzzle.companion_letters();
    let hub = puzzle.required_letter();

    vec![
        format!("     {}", c[0]),
        format!(" {}       {}", c[5], c[1]),
        format!("    [{hub}]"),
        format!(" {}       {}", c[4], c[2]),
        format!("     {}", c[3]),
    ]
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Arrange board entries in rows of `columns` cells
#[must_use]
pub fn format_board(entries: &[BoardEntry], columns: usize) -> Vec<String> {
    let width = MAX_WORD_LEN + 2;

    entries
        .chunks(columns.max(1))
        .map(|row| {
            row.iter()
                .map(|entry| {
                    let mark = if entry.found { "✓" } else { " " };
                    format!("{mark} {:<width$}", entry.text)
                })
                .collect::<Vec<_>>()
                .join(" ")
                .trim_end()
                .to_string()
        })
        .collect()
}
