//! Error taxonomy shared by choosers, guessers and dictionaries
//!
//! Every failure is reported synchronously to the caller and leaves the
//! failing component untouched.

use thiserror::Error;

/// Errors raised by hangman components
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HangmanError {
    /// Invalid constructor arguments (word length or guess budget below 1)
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Dictionary unreadable, or no word of the requested length
    #[error("dictionary unavailable: {0}")]
    Resource(String),

    /// Operation invoked after the game has ended
    #[error("game over: {0}")]
    State(String),

    /// Guess outside a-z, a repeated letter, or a malformed pattern
    #[error("invalid input: {0}")]
    Input(String),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, HangmanError>;
