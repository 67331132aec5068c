//! Word choosers
//!
//! A chooser plays the hangman host: it holds (or pretends to hold) the
//! secret word and answers letter guesses.

mod adversarial;
mod partition;
mod random;

pub use adversarial::AdversarialChooser;
pub use partition::{Families, partition};
pub use random::RandomChooser;

use crate::config::GameConfig;
use crate::core::{LetterSet, Pattern, Word, parse_letter};
use crate::dictionary::CandidateDictionary;
use crate::error::{HangmanError, Result};
use crate::random::RandomSource;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Blanks remain and so do guesses
    Active,
    /// Every position is revealed
    Won,
    /// No guesses remain while blanks do
    Lost,
}

impl GameStatus {
    /// Status implied by a pattern and a guess budget
    #[must_use]
    pub fn of(pattern: &Pattern, guesses_remaining: usize) -> Self {
        if pattern.is_solved() {
            Self::Won
        } else if guesses_remaining == 0 {
            Self::Lost
        } else {
            Self::Active
        }
    }
}

/// The host side of a hangman game
pub trait HangmanChooser {
    /// Guess a letter, returning how many positions it fills
    ///
    /// A miss costs one guess. A failed call changes nothing.
    ///
    /// # Errors
    /// - `HangmanError::Input` if `letter` is not a-z or was already guessed
    /// - `HangmanError::State` if the game is over
    fn make_guess(&mut self, letter: char) -> Result<usize>;

    /// The board as the player sees it
    fn pattern(&self) -> Pattern;

    /// Letters guessed so far, alphabetical when iterated
    fn guesses(&self) -> LetterSet;

    fn guesses_remaining(&self) -> usize;

    /// Reveal a secret word and end the game
    ///
    /// Remaining guesses drop to zero even if the game was still active.
    fn reveal_word(&mut self) -> Word;

    fn status(&self) -> GameStatus {
        GameStatus::of(&self.pattern(), self.guesses_remaining())
    }

    fn is_game_over(&self) -> bool {
        self.status() != GameStatus::Active
    }
}

impl<C: HangmanChooser + ?Sized> HangmanChooser for Box<C> {
    fn make_guess(&mut self, letter: char) -> Result<usize> {
        (**self).make_guess(letter)
    }

    fn pattern(&self) -> Pattern {
        (**self).pattern()
    }

    fn guesses(&self) -> LetterSet {
        (**self).guesses()
    }

    fn guesses_remaining(&self) -> usize {
        (**self).guesses_remaining()
    }

    fn reveal_word(&mut self) -> Word {
        (**self).reveal_word()
    }

    fn status(&self) -> GameStatus {
        (**self).status()
    }
}

/// Validate a guess before any state changes
///
/// Checks run in order: letter range, game over, repeated letter.
pub(crate) fn check_guess(letter: char, guessed: LetterSet, game_over: bool) -> Result<u8> {
    let letter = parse_letter(letter)?;

    if game_over {
        return Err(HangmanError::State("no more guesses are allowed".to_string()));
    }

    if guessed.contains(letter) {
        return Err(HangmanError::Input(format!(
            "'{}' has already been guessed",
            char::from(letter)
        )));
    }

    Ok(letter)
}

/// Runtime selection of a chooser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChooserKind {
    /// Dodges every guess it can (default)
    Adversarial,
    /// Commits to one random word up front
    Random,
}

impl ChooserKind {
    /// Create chooser kind from name string
    ///
    /// Supported names: "evil", "adversarial", "random".
    /// Defaults to adversarial if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random,
            "evil" | "adversarial" => Self::Adversarial,
            other => {
                log::warn!("unknown chooser '{other}', using the adversarial one");
                Self::Adversarial
            }
        }
    }

    /// Build a boxed chooser of this kind
    ///
    /// # Errors
    /// Propagates the chooser constructor's errors.
    pub fn build<R: RandomSource + 'static>(
        self,
        config: &GameConfig,
        dictionary: &CandidateDictionary,
        rng: R,
    ) -> Result<Box<dyn HangmanChooser>> {
        let chooser: Box<dyn HangmanChooser> = match self {
            Self::Adversarial => Box::new(AdversarialChooser::new(config, dictionary, rng)?),
            Self::Random => Box::new(RandomChooser::new(config, dictionary, rng)?),
        };
        Ok(chooser)
    }
}

/// Reject a dictionary built for a different word length
fn check_dictionary(config: &GameConfig, dictionary: &CandidateDictionary) -> Result<()> {
    if dictionary.word_length() == config.word_length() {
        Ok(())
    } else {
        Err(HangmanError::Configuration(format!(
            "dictionary holds {}-letter words but the game needs {}",
            dictionary.word_length(),
            config.word_length()
        )))
    }
}
