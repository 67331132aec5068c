//! Game configuration
//!
//! Word length and guess budget, validated once and shared by every chooser.

use crate::error::{HangmanError, Result};

/// Validated settings for a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    word_length: usize,
    max_guesses: usize,
}

impl GameConfig {
    /// Create a configuration
    ///
    /// # Errors
    /// Returns `HangmanError::Configuration` if either value is below 1.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::GameConfig;
    ///
    /// let config = GameConfig::new(5, 7).unwrap();
    /// assert_eq!(config.word_length(), 5);
    ///
    /// assert!(GameConfig::new(0, 7).is_err());
    /// assert!(GameConfig::new(5, 0).is_err());
    /// ```
    pub fn new(word_length: usize, max_guesses: usize) -> Result<Self> {
        if word_length < 1 || max_guesses < 1 {
            return Err(HangmanError::Configuration(format!(
                "word length and max guesses must both be at least 1 \
                 (got length {word_length}, guesses {max_guesses})"
            )));
        }

        Ok(Self {
            word_length,
            max_guesses,
        })
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: 5,
            max_guesses: 7,
        }
    }
}
