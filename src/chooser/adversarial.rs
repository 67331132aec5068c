//! Adversarial ("evil") chooser
//!
//! Never commits to a secret word. After every guess it keeps whichever
//! family of still-consistent words is largest, so the player is always
//! facing the worst case the dictionary allows.

use super::{GameStatus, HangmanChooser, check_dictionary, check_guess, partition};
use crate::config::GameConfig;
use crate::core::{LetterSet, Pattern, Word};
use crate::dictionary::{CandidateDictionary, DictionaryProvider};
use crate::error::{HangmanError, Result};
use crate::random::RandomSource;

/// A chooser that defers picking a word for as long as it can
///
/// Invariants: `family` is never empty, every word in it shows `pattern`
/// under `guessed`, and it only ever shrinks.
pub struct AdversarialChooser<R: RandomSource> {
    family: Vec<Word>,
    guessed: LetterSet,
    pattern: Pattern,
    remaining: usize,
    rng: R,
}

impl<R: RandomSource> AdversarialChooser<R> {
    /// Start a game over every word in `dictionary`
    ///
    /// # Errors
    /// Returns `HangmanError::Configuration` if the dictionary was built for a
    /// different word length than `config` asks for.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::GameConfig;
    /// use evil_hangman::chooser::{AdversarialChooser, HangmanChooser};
    /// use evil_hangman::dictionary::CandidateDictionary;
    /// use evil_hangman::random::seeded;
    ///
    /// let dictionary = CandidateDictionary::from_words(["bat", "cat", "car", "bar"], 3).unwrap();
    /// let config = GameConfig::new(3, 5).unwrap();
    /// let mut chooser = AdversarialChooser::new(&config, &dictionary, seeded(0)).unwrap();
    ///
    /// assert_eq!(chooser.make_guess('a').unwrap(), 1);
    /// assert_eq!(chooser.make_guess('t').unwrap(), 0);
    /// assert_eq!(chooser.pattern().to_string(), "-a-");
    /// assert_eq!(chooser.guesses_remaining(), 4);
    /// ```
    pub fn new(config: &GameConfig, dictionary: &CandidateDictionary, rng: R) -> Result<Self> {
        check_dictionary(config, dictionary)?;

        Ok(Self {
            family: dictionary.words().to_vec(),
            guessed: LetterSet::EMPTY,
            pattern: Pattern::blank(config.word_length()),
            remaining: config.max_guesses(),
            rng,
        })
    }

    /// Load `provider` and start a game over its words of the configured length
    ///
    /// # Errors
    /// Returns `HangmanError::Resource` if the provider fails or has no word
    /// of the configured length.
    pub fn from_provider<P: DictionaryProvider + ?Sized>(
        config: &GameConfig,
        provider: &P,
        rng: R,
    ) -> Result<Self> {
        let dictionary = CandidateDictionary::build(provider, config.word_length())?;
        Self::new(config, &dictionary, rng)
    }

    /// Number of words still consistent with the board
    #[must_use]
    pub fn family_size(&self) -> usize {
        self.family.len()
    }

    /// Words still consistent with the board, sorted
    #[must_use]
    pub fn family(&self) -> &[Word] {
        &self.family
    }
}

impl<R: RandomSource> HangmanChooser for AdversarialChooser<R> {
    fn make_guess(&mut self, letter: char) -> Result<usize> {
        let letter = check_guess(letter, self.guessed, self.is_game_over())?;

        let (pattern, words) = partition(&self.family, self.guessed, letter)
            .into_largest()
            .ok_or_else(|| HangmanError::State("no candidate words remain".to_string()))?;
        let mut family: Vec<Word> = words.into_iter().cloned().collect();
        family.sort_unstable();

        log::debug!(
            "guess '{}': kept family {pattern} ({} -> {} words)",
            char::from(letter),
            self.family.len(),
            family.len()
        );

        let occurrences = pattern.occurrences(letter);
        self.guessed.insert(letter);
        self.family = family;
        self.pattern = pattern;
        if occurrences == 0 {
            self.remaining -= 1;
        }

        match self.status() {
            GameStatus::Active => {}
            status => log::info!("game ended: {status:?} with pattern {}", self.pattern),
        }

        Ok(occurrences)
    }

    fn pattern(&self) -> Pattern {
        self.pattern.clone()
    }

    fn guesses(&self) -> LetterSet {
        self.guessed
    }

    fn guesses_remaining(&self) -> usize {
        self.remaining
    }

    fn reveal_word(&mut self) -> Word {
        self.remaining = 0;
        let index = self.rng.index(self.family.len());
        let word = self.family[index].clone();
        log::info!("revealed '{word}' from a family of {}", self.family.len());
        word
    }
}
