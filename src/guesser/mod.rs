//! Automated guessers
//!
//! The player side of hangman: given the board, suggest the next letter.

mod frequency;

pub use frequency::{Coverage, best_letter, letter_coverage, matching_candidates};

use crate::core::{LetterSet, Pattern};
use crate::dictionary::{DictionaryProvider, words_of_length};
use crate::error::{HangmanError, Result};

/// Picks the next letter to guess
pub trait HangmanGuesser {
    /// Suggest a letter for the board `pattern` after `guessed` letters
    ///
    /// # Errors
    /// - `HangmanError::Resource` if the guesser's dictionary is unavailable
    /// - `HangmanError::Input` if every letter has already been guessed
    fn get_guess(&self, pattern: &Pattern, guessed: LetterSet) -> Result<char>;
}

/// Guesses the letter found in the most words that still fit the board
///
/// The dictionary is loaded through the provider on every call, so a provider
/// backed by a changing source is always read fresh.
#[derive(Debug, Clone)]
pub struct FrequencyGuesser<P: DictionaryProvider> {
    provider: P,
}

impl<P: DictionaryProvider> FrequencyGuesser<P> {
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }

    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }
}

impl<P: DictionaryProvider> HangmanGuesser for FrequencyGuesser<P> {
    /// # Examples
    /// ```
    /// use evil_hangman::core::{LetterSet, Pattern};
    /// use evil_hangman::dictionary::InMemoryDictionary;
    /// use evil_hangman::guesser::{FrequencyGuesser, HangmanGuesser};
    ///
    /// let guesser = FrequencyGuesser::new(InMemoryDictionary::new(["bat", "cat", "car", "bar"]));
    /// let pattern = Pattern::parse("-a-").unwrap();
    /// let guessed: LetterSet = b"at".iter().copied().collect();
    ///
    /// assert_eq!(guesser.get_guess(&pattern, guessed).unwrap(), 'r');
    /// ```
    fn get_guess(&self, pattern: &Pattern, guessed: LetterSet) -> Result<char> {
        let words = words_of_length(self.provider.load()?, pattern.len());
        let candidates = matching_candidates(&words, pattern, guessed);
        let coverage = letter_coverage(&candidates, guessed);

        let letter = best_letter(&coverage, guessed).ok_or_else(|| {
            HangmanError::Input("every letter has already been guessed".to_string())
        })?;

        log::debug!(
            "pattern {pattern}: {} candidates, guessing '{}' (in {} of them)",
            candidates.len(),
            char::from(letter),
            coverage[usize::from(letter - b'a')]
        );

        Ok(char::from(letter))
    }
}
