//! Letter-frequency scoring
//!
//! Scores each untried letter by how many candidate words contain it.
//! Presence counts once per word; repeated letters add nothing.

use crate::core::{LetterSet, Pattern, Word};
use rayon::prelude::*;

/// Letter coverage counts indexed by `letter - b'a'`
pub type Coverage = [usize; 26];

/// Words that show exactly `pattern` under `guessed`
///
/// Order of `words` is preserved.
#[must_use]
pub fn matching_candidates<'a>(
    words: &'a [Word],
    pattern: &Pattern,
    guessed: LetterSet,
) -> Vec<&'a Word> {
    words
        .par_iter()
        .filter(|word| word.len() == pattern.len() && Pattern::of(word, guessed) == *pattern)
        .collect()
}

/// For each letter not in `guessed`, how many candidates contain it
///
/// Guessed letters score 0.
#[must_use]
pub fn letter_coverage(candidates: &[&Word], guessed: LetterSet) -> Coverage {
    candidates
        .par_iter()
        .fold(
            || [0usize; 26],
            |mut counts, word| {
                for letter in word.letters().iter().filter(|&l| !guessed.contains(l)) {
                    counts[usize::from(letter - b'a')] += 1;
                }
                counts
            },
        )
        .reduce(
            || [0usize; 26],
            |mut total, part| {
                for (t, p) in total.iter_mut().zip(part) {
                    *t += p;
                }
                total
            },
        )
}

/// The untried letter with the highest coverage
///
/// Scans a-z in order and only moves on for a strictly higher count, so ties
/// go to the earlier letter. With all counts at zero this is the first untried
/// letter. `None` once every letter has been guessed.
///
/// # Examples
/// ```
/// use evil_hangman::core::LetterSet;
/// use evil_hangman::guesser::best_letter;
///
/// let mut coverage = [0usize; 26];
/// coverage[usize::from(b'r' - b'a')] = 2;
/// coverage[usize::from(b'b' - b'a')] = 1;
///
/// assert_eq!(best_letter(&coverage, LetterSet::EMPTY), Some(b'r'));
/// assert_eq!(best_letter(&[0; 26], LetterSet::EMPTY), Some(b'a'));
/// assert_eq!(best_letter(&[0; 26], LetterSet::ALPHABET), None);
/// ```
#[must_use]
pub fn best_letter(coverage: &Coverage, guessed: LetterSet) -> Option<u8> {
    let mut best: Option<(u8, usize)> = None;

    for letter in guessed.untried() {
        let count = coverage[usize::from(letter - b'a')];
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((letter, count));
        }
    }

    best.map(|(letter, _)| letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn letters(s: &str) -> LetterSet {
        s.bytes().collect()
    }

    fn count(coverage: &Coverage, letter: u8) -> usize {
        coverage[usize::from(letter - b'a')]
    }

    #[test]
    fn matching_keeps_only_consistent_words() {
        let dictionary = words(&["bat", "cat", "car", "bar", "goat", "ax"]);
        let pattern = Pattern::parse("-a-").unwrap();

        let found: Vec<&str> = matching_candidates(&dictionary, &pattern, letters("at"))
            .iter()
            .map(|w| w.text())
            .collect();
        assert_eq!(found, ["car", "bar"]);
    }

    #[test]
    fn matching_rejects_other_lengths() {
        let dictionary = words(&["a", "an", "ant"]);
        let pattern = Pattern::blank(2);
        let found = matching_candidates(&dictionary, &pattern, LetterSet::EMPTY);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text(), "an");
    }

    #[test]
    fn coverage_counts_presence_not_occurrences() {
        let dictionary = words(&["banana", "bandit"]);
        let refs: Vec<&Word> = dictionary.iter().collect();
        let coverage = letter_coverage(&refs, LetterSet::EMPTY);

        assert_eq!(count(&coverage, b'a'), 2);
        assert_eq!(count(&coverage, b'n'), 2);
        assert_eq!(count(&coverage, b'd'), 1);
        assert_eq!(count(&coverage, b'z'), 0);
    }

    #[test]
    fn coverage_ignores_guessed_letters() {
        let dictionary = words(&["car", "bar"]);
        let refs: Vec<&Word> = dictionary.iter().collect();
        let coverage = letter_coverage(&refs, letters("at"));

        assert_eq!(count(&coverage, b'a'), 0);
        assert_eq!(count(&coverage, b'r'), 2);
        assert_eq!(count(&coverage, b'c'), 1);
        assert_eq!(count(&coverage, b'b'), 1);
    }

    #[test]
    fn coverage_of_many_words_matches_serial_count() {
        let dictionary = crate::dictionary::CandidateDictionary::build(
            &crate::dictionary::EmbeddedDictionary,
            6,
        )
        .unwrap();
        let refs: Vec<&Word> = dictionary.iter().collect();
        let coverage = letter_coverage(&refs, LetterSet::EMPTY);

        for letter in b'a'..=b'z' {
            let serial = dictionary.iter().filter(|w| w.contains_letter(letter)).count();
            assert_eq!(count(&coverage, letter), serial);
        }
    }

    #[test]
    fn best_letter_prefers_earliest_on_tie() {
        let mut coverage = [0usize; 26];
        coverage[usize::from(b'c' - b'a')] = 1;
        coverage[usize::from(b'b' - b'a')] = 1;
        assert_eq!(best_letter(&coverage, LetterSet::EMPTY), Some(b'b'));
    }

    #[test]
    fn best_letter_later_letter_must_be_strictly_higher() {
        let mut coverage = [0usize; 26];
        coverage[usize::from(b'e' - b'a')] = 3;
        coverage[usize::from(b's' - b'a')] = 3;
        coverage[usize::from(b'y' - b'a')] = 4;
        assert_eq!(best_letter(&coverage, LetterSet::EMPTY), Some(b'y'));
    }

    #[test]
    fn best_letter_skips_guessed() {
        let coverage = [0usize; 26];
        assert_eq!(best_letter(&coverage, letters("abc")), Some(b'd'));

        let mut coverage = [0usize; 26];
        coverage[0] = 9;
        assert_eq!(best_letter(&coverage, letters("a")), Some(b'b'));
    }
}
