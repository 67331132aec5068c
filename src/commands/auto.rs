//! Automated game command
//!
//! Lets a guesser play a chooser to the end and records every turn.

use crate::chooser::{GameStatus, HangmanChooser};
use crate::core::{Pattern, Word};
use crate::error::Result;
use crate::guesser::HangmanGuesser;

/// A single guess in a finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    pub letter: char,
    pub occurrences: usize,
    pub pattern: Pattern,
    pub guesses_remaining: usize,
}

/// Result of playing one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub word: Word,
    pub status: GameStatus,
    pub turns: Vec<TurnRecord>,
}

impl GameRecord {
    #[must_use]
    pub fn won(&self) -> bool {
        self.status == GameStatus::Won
    }

    /// Guesses that revealed nothing
    #[must_use]
    pub fn misses(&self) -> usize {
        self.turns.iter().filter(|t| t.occurrences == 0).count()
    }
}

/// Play `chooser` with `guesser` until the game ends, then reveal the word
///
/// # Errors
///
/// Returns the first error raised by the guesser or the chooser, for example
/// a dictionary that cannot be loaded or a guesser repeating a letter.
pub fn run_auto_game<C, G>(chooser: &mut C, guesser: &G) -> Result<GameRecord>
where
    C: HangmanChooser + ?Sized,
    G: HangmanGuesser + ?Sized,
{
    let mut turns = Vec::new();

    while !chooser.is_game_over() {
        let letter = guesser.get_guess(&chooser.pattern(), chooser.guesses())?;
        let occurrences = chooser.make_guess(letter)?;

        turns.push(TurnRecord {
            letter,
            occurrences,
            pattern: chooser.pattern(),
            guesses_remaining: chooser.guesses_remaining(),
        });
    }

    let status = chooser.status();
    let word = chooser.reveal_word();

    Ok(GameRecord {
        word,
        status,
        turns,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chooser::{AdversarialChooser, RandomChooser};
    use crate::config::GameConfig;
    use crate::dictionary::{CandidateDictionary, EmbeddedDictionary, InMemoryDictionary};
    use crate::error::HangmanError;
    use crate::guesser::FrequencyGuesser;
    use crate::random::seeded;

    const FOUR: [&str; 4] = ["bat", "cat", "car", "bar"];

    #[test]
    fn guesser_against_adversary_on_four_words() {
        let config = GameConfig::new(3, 5).unwrap();
        let dictionary = CandidateDictionary::from_words(FOUR, 3).unwrap();
        let mut chooser = AdversarialChooser::new(&config, &dictionary, seeded(0)).unwrap();
        let guesser = FrequencyGuesser::new(&dictionary);

        let record = run_auto_game(&mut chooser, &guesser).unwrap();

        let letters: String = record.turns.iter().map(|t| t.letter).collect();
        assert_eq!(letters, "abcrt");
        assert_eq!(record.misses(), 2);
        assert!(record.won());
        assert_eq!(record.word.text(), "cat");
        assert_eq!(record.turns.last().unwrap().pattern.to_string(), "cat");
        assert_eq!(record.turns.last().unwrap().guesses_remaining, 3);
    }

    #[test]
    fn turn_log_tracks_budget() {
        let config = GameConfig::new(5, 7).unwrap();
        let dictionary = CandidateDictionary::build(&EmbeddedDictionary, 5).unwrap();
        let mut chooser = AdversarialChooser::new(&config, &dictionary, seeded(5)).unwrap();
        let guesser = FrequencyGuesser::new(&dictionary);

        let record = run_auto_game(&mut chooser, &guesser).unwrap();

        let mut remaining = 7;
        for turn in &record.turns {
            if turn.occurrences == 0 {
                remaining -= 1;
            }
            assert_eq!(turn.guesses_remaining, remaining);
            assert_eq!(turn.pattern.len(), 5);
        }
        assert!(record.won() || remaining == 0);
        assert!(dictionary.contains(&record.word));
    }

    #[test]
    fn honest_chooser_game_reveals_consistent_word() {
        let config = GameConfig::new(4, 10).unwrap();
        let dictionary = CandidateDictionary::build(&EmbeddedDictionary, 4).unwrap();
        let mut chooser = RandomChooser::new(&config, &dictionary, seeded(21)).unwrap();
        let guesser = FrequencyGuesser::new(&dictionary);

        let record = run_auto_game(&mut chooser, &guesser).unwrap();
        let last = record.turns.last().unwrap();
        let guessed = record.turns.iter().map(|t| t.letter as u8).collect();

        assert_eq!(Pattern::of(&record.word, guessed), last.pattern);
    }

    #[test]
    fn guesser_errors_propagate() {
        let config = GameConfig::new(3, 5).unwrap();
        let dictionary = CandidateDictionary::from_words(FOUR, 3).unwrap();
        let mut chooser = RandomChooser::new(&config, &dictionary, seeded(0)).unwrap();
        let guesser = FrequencyGuesser::new(crate::dictionary::FileDictionary::new("/nope"));

        assert!(matches!(
            run_auto_game(&mut chooser, &guesser),
            Err(HangmanError::Resource(_))
        ));
        assert_eq!(chooser.guesses_remaining(), 5);
    }

    #[test]
    fn boxed_chooser_plays_too() {
        let config = GameConfig::new(3, 5).unwrap();
        let dictionary = CandidateDictionary::from_words(FOUR, 3).unwrap();
        let mut chooser = crate::chooser::ChooserKind::Adversarial
            .build(&config, &dictionary, seeded(0))
            .unwrap();
        let guesser = FrequencyGuesser::new(InMemoryDictionary::new(FOUR));

        let record = run_auto_game(&mut chooser, &guesser).unwrap();
        assert!(record.won());
    }
}
