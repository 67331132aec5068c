//! Dictionaries for hangman
//!
//! Providers load raw word lists; the candidate dictionary narrows one down
//! to the words a game can use.

mod candidates;
mod embedded;
mod provider;

pub use candidates::CandidateDictionary;
pub(crate) use candidates::words_of_length;
pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
pub use provider::{DictionaryProvider, EmbeddedDictionary, FileDictionary, InMemoryDictionary};

/// Pick a provider from a CLI-style name
///
/// `"embedded"` selects the compiled-in list; anything else is a file path.
#[must_use]
pub fn provider_from_name(name: &str) -> Box<dyn DictionaryProvider + Send + Sync> {
    match name {
        "embedded" => Box::new(EmbeddedDictionary),
        path => Box::new(FileDictionary::new(path)),
    }
}
