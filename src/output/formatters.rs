//! Formatting utilities for terminal output

use crate::core::{BLANK, LetterSet, Pattern};
use colored::Colorize;

/// Pattern with spaces between positions, blanks shown as underscores
#[must_use]
pub fn spaced_pattern(pattern: &Pattern) -> String {
    pattern
        .as_bytes()
        .iter()
        .map(|&b| if b == BLANK { '_' } else { char::from(b.to_ascii_uppercase()) })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// One filled block per remaining guess, capped at `width`
#[must_use]
pub fn guess_meter(remaining: usize, width: usize) -> String {
    let filled = remaining.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// The board shown before each guess
#[must_use]
pub fn render_board(pattern: &Pattern, guessed: LetterSet, remaining: usize, max: usize) -> String {
    let guessed = if guessed.is_empty() {
        "(none)".to_string()
    } else {
        guessed.to_string()
    };

    format!(
        "  Word:      {} ({} hidden)\n  Guessed:   {}\n  Remaining: [{}] {}",
        spaced_pattern(pattern).bright_white().bold(),
        pattern.blanks(),
        guessed.bright_black(),
        guess_meter(remaining, max).red(),
        remaining.to_string().bright_yellow()
    )
}
