//! Masked word patterns
//!
//! A pattern shows a word with every letter that has not been guessed yet
//! replaced by [`BLANK`]. Patterns always have the length of the word they
//! were derived from.

use super::{LetterSet, Word};
use crate::error::{HangmanError, Result};
use std::fmt;

/// Marker for an unrevealed position
///
/// Sorts before every letter, so a less revealing pattern compares smaller.
pub const BLANK: u8 = b'-';

/// A masked word such as `-a-`
///
/// Ordering is lexicographic on the bytes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern(Vec<u8>);

impl Pattern {
    /// An all-blank pattern of the given length
    #[must_use]
    pub fn blank(len: usize) -> Self {
        Self(vec![BLANK; len])
    }

    /// The pattern `word` shows once `guessed` letters are revealed
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::{LetterSet, Pattern, Word};
    ///
    /// let word = Word::new("banana").unwrap();
    /// let guessed: LetterSet = b"an".iter().copied().collect();
    ///
    /// assert_eq!(Pattern::of(&word, guessed).to_string(), "-anana");
    /// ```
    #[must_use]
    pub fn of(word: &Word, guessed: LetterSet) -> Self {
        let mut mask = vec![BLANK; word.len()];
        for (slot, &letter) in mask.iter_mut().zip(word.bytes()) {
            if guessed.contains(letter) {
                *slot = letter;
            }
        }
        Self(mask)
    }

    /// Parse a pattern typed by a user or caller
    ///
    /// Accepts letters (case-insensitive) and `-` or `_` for blanks.
    ///
    /// # Errors
    /// Returns `HangmanError::Input` for an empty pattern or any other character.
    pub fn parse(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(HangmanError::Input("pattern is empty".to_string()));
        }

        text.chars()
            .map(|ch| match ch.to_ascii_lowercase() {
                '-' | '_' => Ok(BLANK),
                c if c.is_ascii_lowercase() => Ok(c as u8),
                _ => Err(HangmanError::Input(format!(
                    "pattern '{text}' contains '{ch}'"
                ))),
            })
            .collect::<Result<Vec<u8>>>()
            .map(Self)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of unrevealed positions
    #[must_use]
    pub fn blanks(&self) -> usize {
        self.occurrences(BLANK)
    }

    /// True once every position is revealed
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.contains(&BLANK)
    }

    /// How many positions show `letter`
    #[must_use]
    pub fn occurrences(&self, letter: u8) -> usize {
        self.0.iter().filter(|&&b| b == letter).count()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{}", char::from(b))?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = HangmanError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
