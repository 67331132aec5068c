//! Interactive console game
//!
//! A human guesses letters against a chooser. Input and output are generic
//! so the loop can be driven from tests.

use crate::chooser::{GameStatus, HangmanChooser};
use crate::core::Word;
use crate::guesser::HangmanGuesser;
use crate::output::formatters::render_board;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// How an interactive game finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    pub word: Word,
    pub status: GameStatus,
    /// The player quit (or input ended) before the game was decided
    pub quit: bool,
}

/// Run the interactive game loop
///
/// Single letters are guesses, `hint` (or `?`) asks `guesser` for a
/// suggestion, `quit` gives up. Rejected guesses are reported and play
/// continues.
///
/// # Errors
///
/// Returns an error only if reading input or writing output fails.
pub fn run_play<C, G, R, W>(
    chooser: &mut C,
    guesser: &G,
    max_guesses: usize,
    mut input: R,
    mut output: W,
) -> io::Result<PlayOutcome>
where
    C: HangmanChooser + ?Sized,
    G: HangmanGuesser + ?Sized,
    R: BufRead,
    W: Write,
{
    writeln!(output, "\n╔════════════════════════════════════════╗")?;
    writeln!(output, "║               H A N G M A N            ║")?;
    writeln!(output, "╚════════════════════════════════════════╝")?;
    writeln!(
        output,
        "Guess one letter per turn. Type 'hint' for a suggestion, 'quit' to give up."
    )?;

    let mut quit = false;

    while !chooser.is_game_over() {
        writeln!(
            output,
            "\n{}",
            render_board(
                &chooser.pattern(),
                chooser.guesses(),
                chooser.guesses_remaining(),
                max_guesses
            )
        )?;
        write!(output, "Your guess: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            quit = true;
            break;
        }

        match line.trim().to_lowercase().as_str() {
            "" => {}
            "quit" | "exit" => {
                quit = true;
                break;
            }
            "hint" | "?" => match guesser.get_guess(&chooser.pattern(), chooser.guesses()) {
                Ok(letter) => {
                    writeln!(output, "💡 Try '{}'", letter.to_string().bright_yellow())?;
                }
                Err(e) => writeln!(output, "❌ {e}")?,
            },
            text => {
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(letter), None) => {
                        let reply = match chooser.make_guess(letter) {
                            Ok(0) => format!("No '{letter}' in the word.").red(),
                            Ok(1) => format!("Yes, there is one '{letter}'.").green(),
                            Ok(n) => format!("Yes, there are {n} '{letter}'s.").green(),
                            Err(e) => format!("❌ {e}").normal(),
                        };
                        writeln!(output, "{reply}")?;
                    }
                    _ => writeln!(output, "❌ Enter a single letter, 'hint' or 'quit'.")?,
                }
            }
        }
    }

    let status = chooser.status();
    let word = chooser.reveal_word();
    let shown = word.text().to_uppercase();

    match status {
        GameStatus::Won => writeln!(
            output,
            "\n{}",
            format!("🎉 You got it: {shown}").bright_green().bold()
        )?,
        GameStatus::Lost => writeln!(
            output,
            "\n{}",
            format!("💀 Out of guesses! The word was {shown}").red().bold()
        )?,
        GameStatus::Active => writeln!(output, "\nThe word was {shown}.")?,
    }

    Ok(PlayOutcome { word, status, quit })
}
