//! Candidate dictionary
//!
//! The provider's words, cleaned up, de-duplicated and filtered to a single
//! word length. Built once and read-only afterwards.

use super::DictionaryProvider;
use crate::core::Word;
use crate::error::{HangmanError, Result};
use std::collections::BTreeSet;

/// Unique dictionary words of one length, in sorted order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateDictionary {
    word_length: usize,
    words: Vec<Word>,
}

impl CandidateDictionary {
    /// Load words from `provider` and keep those of `word_length` letters
    ///
    /// # Errors
    /// Returns `HangmanError::Resource` if the provider fails or no word has
    /// the requested length.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::dictionary::{CandidateDictionary, InMemoryDictionary};
    ///
    /// let provider = InMemoryDictionary::new(["bat", "cat", "cat", "goat"]);
    /// let candidates = CandidateDictionary::build(&provider, 3).unwrap();
    ///
    /// assert_eq!(candidates.len(), 2);
    /// assert!(CandidateDictionary::build(&provider, 9).is_err());
    /// ```
    pub fn build<P: DictionaryProvider + ?Sized>(provider: &P, word_length: usize) -> Result<Self> {
        let raw = provider.load()?;
        Self::from_words(raw, word_length)
    }

    /// Same as [`build`](Self::build) over an already-loaded list
    ///
    /// # Errors
    /// Returns `HangmanError::Resource` if no word has the requested length.
    pub fn from_words<I, S>(raw: I, word_length: usize) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words_of_length(raw, word_length);

        if words.is_empty() {
            return Err(HangmanError::Resource(format!(
                "no dictionary word has length {word_length}"
            )));
        }

        log::debug!(
            "candidate dictionary: {} words of length {word_length}",
            words.len()
        );

        Ok(Self { word_length, words })
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: construction fails on an empty dictionary
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in lexicographic order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.binary_search(word).is_ok()
    }
}

impl DictionaryProvider for CandidateDictionary {
    fn load(&self) -> Result<Vec<String>> {
        Ok(self.words.iter().map(|w| w.text().to_string()).collect())
    }
}

/// Valid, unique words of exactly `word_length` letters, sorted
///
/// Lines that are not plain words (digits, spaces, punctuation) are skipped.
pub(crate) fn words_of_length<I, S>(raw: I, word_length: usize) -> Vec<Word>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .filter_map(|line| {
            let trimmed = line.as_ref().trim();
            if trimmed.len() == word_length {
                Word::new(trimmed).ok()
            } else {
                None
            }
        })
        .collect::<BTreeSet<Word>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{EmbeddedDictionary, InMemoryDictionary};

    #[test]
    fn filters_by_length_and_deduplicates() {
        let provider = InMemoryDictionary::new(["cat", "bat", "cat", "goat", "ox", "bar"]);
        let candidates = CandidateDictionary::build(&provider, 3).unwrap();

        let texts: Vec<&str> = candidates.iter().map(Word::text).collect();
        assert_eq!(texts, ["bar", "bat", "cat"]);
        assert_eq!(candidates.word_length(), 3);
        assert!(!candidates.is_empty());
    }

    #[test]
    fn skips_invalid_lines() {
        let candidates =
            CandidateDictionary::from_words(["abc", "a-c", "a c", "ab1", " dog "], 3).unwrap();

        let texts: Vec<&str> = candidates.iter().map(Word::text).collect();
        assert_eq!(texts, ["abc", "dog"]);
    }

    #[test]
    fn empty_after_filter_is_resource_error() {
        let provider = InMemoryDictionary::new(["cat", "dog"]);
        assert!(matches!(
            CandidateDictionary::build(&provider, 7),
            Err(HangmanError::Resource(_))
        ));
        assert!(matches!(
            CandidateDictionary::build(&InMemoryDictionary::default(), 3),
            Err(HangmanError::Resource(_))
        ));
    }

    #[test]
    fn contains_uses_sorted_lookup() {
        let candidates = CandidateDictionary::from_words(["cat", "bat", "car"], 3).unwrap();
        assert!(candidates.contains(&Word::new("car").unwrap()));
        assert!(!candidates.contains(&Word::new("cab").unwrap()));
    }

    #[test]
    fn acts_as_provider_for_its_words() {
        let candidates = CandidateDictionary::from_words(["cat", "bat"], 3).unwrap();
        assert_eq!(candidates.load().unwrap(), ["bat", "cat"]);
    }

    #[test]
    fn embedded_dictionary_has_common_lengths() {
        for length in 3..=8 {
            let candidates = CandidateDictionary::build(&EmbeddedDictionary, length).unwrap();
            assert!(candidates.len() > 100, "too few words of length {length}");
        }
    }
}
