//! Core domain types for hangman
//!
//! Words, letter sets and the masked patterns built from them.
//! All types here are pure and have no I/O.

mod letters;
mod pattern;
mod word;

pub use letters::{LetterSet, parse_letter};
pub use pattern::{BLANK, Pattern};
pub use word::{Word, WordError};
