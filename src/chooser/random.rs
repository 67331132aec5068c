//! Random chooser
//!
//! Picks one secret word up front and answers honestly.

use super::{GameStatus, HangmanChooser, check_dictionary, check_guess};
use crate::config::GameConfig;
use crate::core::{LetterSet, Pattern, Word};
use crate::dictionary::{CandidateDictionary, DictionaryProvider};
use crate::error::Result;
use crate::random::RandomSource;

/// A chooser with a fixed, uniformly drawn secret word
pub struct RandomChooser {
    secret: Word,
    guessed: LetterSet,
    remaining: usize,
}

impl RandomChooser {
    /// Draw the secret word from `dictionary`
    ///
    /// # Errors
    /// Returns `HangmanError::Configuration` if the dictionary was built for a
    /// different word length than `config` asks for.
    pub fn new<R: RandomSource>(
        config: &GameConfig,
        dictionary: &CandidateDictionary,
        mut rng: R,
    ) -> Result<Self> {
        check_dictionary(config, dictionary)?;

        let words = dictionary.words();
        let secret = words[rng.index(words.len())].clone();
        log::debug!("random chooser drew a {}-letter word", secret.len());

        Ok(Self {
            secret,
            guessed: LetterSet::EMPTY,
            remaining: config.max_guesses(),
        })
    }

    /// Load `provider` and draw from its words of the configured length
    ///
    /// # Errors
    /// Returns `HangmanError::Resource` if the provider fails or has no word
    /// of the configured length.
    pub fn from_provider<P: DictionaryProvider + ?Sized, R: RandomSource>(
        config: &GameConfig,
        provider: &P,
        rng: R,
    ) -> Result<Self> {
        let dictionary = CandidateDictionary::build(provider, config.word_length())?;
        Self::new(config, &dictionary, rng)
    }
}

impl HangmanChooser for RandomChooser {
    fn make_guess(&mut self, letter: char) -> Result<usize> {
        let letter = check_guess(letter, self.guessed, self.is_game_over())?;

        self.guessed.insert(letter);
        let occurrences = self.secret.count_of(letter);
        if occurrences == 0 {
            self.remaining -= 1;
        }

        if self.status() != GameStatus::Active {
            log::info!("game ended: {:?}", self.status());
        }

        Ok(occurrences)
    }

    fn pattern(&self) -> Pattern {
        Pattern::of(&self.secret, self.guessed)
    }

    fn guesses(&self) -> LetterSet {
        self.guessed
    }

    fn guesses_remaining(&self) -> usize {
        self.remaining
    }

    fn reveal_word(&mut self) -> Word {
        self.remaining = 0;
        self.secret.clone()
    }
}
