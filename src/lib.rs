//! Evil Hangman
//!
//! Hangman hosts and players: a chooser that commits to a random word, an
//! adversarial chooser that keeps dodging by retreating to the largest family
//! of still-possible words, and a guesser that picks the letter found in the
//! most remaining candidates.
//!
//! # Quick Start
//!
//! ```rust
//! use evil_hangman::GameConfig;
//! use evil_hangman::chooser::{AdversarialChooser, HangmanChooser};
//! use evil_hangman::dictionary::InMemoryDictionary;
//! use evil_hangman::random::seeded;
//!
//! let words = InMemoryDictionary::new(["bat", "cat", "car", "bar"]);
//! let config = GameConfig::new(3, 5).unwrap();
//! let mut chooser = AdversarialChooser::from_provider(&config, &words, seeded(1)).unwrap();
//!
//! chooser.make_guess('a').unwrap();
//! println!("Board: {}", chooser.pattern());
//! ```

// Core domain types
pub mod core;

// Error taxonomy
pub mod error;

// Game configuration
pub mod config;

// Randomness sources
pub mod random;

// Word lists
pub mod dictionary;

// Host strategies
pub mod chooser;

// Player strategies
pub mod guesser;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use config::GameConfig;
pub use error::{HangmanError, Result};
