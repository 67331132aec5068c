//! Sets of guessed letters
//!
//! Letters are stored as a 26-bit mask, so iteration is always alphabetical
//! regardless of insertion order.

use crate::error::{HangmanError, Result};
use std::fmt;

/// A set of lowercase letters a-z
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Every letter a-z
    pub const ALPHABET: Self = Self((1 << 26) - 1);

    #[inline]
    const fn bit(letter: u8) -> Option<u32> {
        if letter.is_ascii_lowercase() {
            Some(1 << (letter - b'a'))
        } else {
            None
        }
    }

    /// Add a letter, returning true if it was not already present
    ///
    /// Bytes outside a-z are ignored and return false.
    pub fn insert(&mut self, letter: u8) -> bool {
        match Self::bit(letter) {
            Some(bit) if self.0 & bit == 0 => {
                self.0 |= bit;
                true
            }
            _ => false,
        }
    }

    /// A copy of this set with one more letter
    #[must_use]
    pub fn with(mut self, letter: u8) -> Self {
        self.insert(letter);
        self
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        match Self::bit(letter) {
            Some(bit) => self.0 & bit != 0,
            None => false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }

    /// Letters a-z that are not in this set, alphabetically
    pub fn untried(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| !self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, letter) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}

/// Validate a guessed character
///
/// # Errors
/// Returns `HangmanError::Input` unless `letter` is in a-z.
///
/// # Examples
/// ```
/// use evil_hangman::core::parse_letter;
///
/// assert_eq!(parse_letter('e').unwrap(), b'e');
/// assert!(parse_letter('E').is_err());
/// assert!(parse_letter('3').is_err());
/// ```
pub fn parse_letter(letter: char) -> Result<u8> {
    if letter.is_ascii_lowercase() {
        Ok(letter as u8)
    } else {
        Err(HangmanError::Input(format!(
            "'{letter}' is not a lowercase letter a-z"
        )))
    }
}
