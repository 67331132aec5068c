//! Dictionary providers
//!
//! A provider hands back the raw word list. Where the words live (binary,
//! file, memory) is its business; callers only see `load`.

use super::DICTIONARY;
use crate::error::{HangmanError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Source of raw dictionary words
///
/// Returned words may contain duplicates and blank lines; the candidate
/// dictionary cleans them up.
pub trait DictionaryProvider {
    /// Load every word in the dictionary
    ///
    /// # Errors
    /// Returns `HangmanError::Resource` if the underlying source is unavailable.
    fn load(&self) -> Result<Vec<String>>;
}

/// The word list compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedDictionary;

impl DictionaryProvider for EmbeddedDictionary {
    fn load(&self) -> Result<Vec<String>> {
        Ok(DICTIONARY.iter().map(|&w| w.to_string()).collect())
    }
}

/// A word list read from disk, one word per line
#[derive(Debug, Clone)]
pub struct FileDictionary {
    path: PathBuf,
}

impl FileDictionary {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl DictionaryProvider for FileDictionary {
    /// Re-reads the file on every call
    ///
    /// # Examples
    /// ```no_run
    /// use evil_hangman::dictionary::{DictionaryProvider, FileDictionary};
    ///
    /// let words = FileDictionary::new("data/dictionary.txt").load().unwrap();
    /// println!("Loaded {} words", words.len());
    /// ```
    fn load(&self) -> Result<Vec<String>> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            HangmanError::Resource(format!("cannot read {}: {e}", self.path.display()))
        })?;

        let words: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        log::debug!("read {} words from {}", words.len(), self.path.display());
        Ok(words)
    }
}

/// An owned, in-memory word list
#[derive(Debug, Clone, Default)]
pub struct InMemoryDictionary {
    words: Vec<String>,
}

impl InMemoryDictionary {
    /// # Examples
    /// ```
    /// use evil_hangman::dictionary::{DictionaryProvider, InMemoryDictionary};
    ///
    /// let dictionary = InMemoryDictionary::new(["bat", "cat", "car", "bar"]);
    /// assert_eq!(dictionary.load().unwrap().len(), 4);
    /// ```
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

impl DictionaryProvider for InMemoryDictionary {
    fn load(&self) -> Result<Vec<String>> {
        Ok(self.words.clone())
    }
}

impl<P: DictionaryProvider + ?Sized> DictionaryProvider for &P {
    fn load(&self) -> Result<Vec<String>> {
        (**self).load()
    }
}

impl<P: DictionaryProvider + ?Sized> DictionaryProvider for Box<P> {
    fn load(&self) -> Result<Vec<String>> {
        (**self).load()
    }
}
