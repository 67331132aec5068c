//! Family partitioning
//!
//! Splits a family of candidate words by the pattern each one would show
//! once one more letter is guessed.

use crate::core::{LetterSet, Pattern, Word};
use rustc_hash::FxHashMap;

/// Words grouped by the pattern they produce
///
/// Groups are disjoint and together cover the partitioned family.
#[derive(Debug, Clone, Default)]
pub struct Families<'a> {
    groups: FxHashMap<Pattern, Vec<&'a Word>>,
}

impl<'a> Families<'a> {
    /// Number of distinct patterns
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Words across every group
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// The group for one pattern, if any word produced it
    #[must_use]
    pub fn get(&self, pattern: &Pattern) -> Option<&[&'a Word]> {
        self.groups.get(pattern).map(Vec::as_slice)
    }

    /// Groups in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&Pattern, &[&'a Word])> {
        self.groups.iter().map(|(p, words)| (p, words.as_slice()))
    }

    /// The most populous group
    ///
    /// Ties go to the lexicographically smallest pattern, so the result does
    /// not depend on map iteration order. `None` only for an empty partition.
    #[must_use]
    pub fn into_largest(self) -> Option<(Pattern, Vec<&'a Word>)> {
        self.groups.into_iter().max_by(|(pa, a), (pb, b)| {
            a.len().cmp(&b.len()).then_with(|| pb.cmp(pa))
        })
    }
}

/// Group `family` by each word's pattern under `guessed` plus `letter`
///
/// # Examples
/// ```
/// use evil_hangman::chooser::partition;
/// use evil_hangman::core::{LetterSet, Pattern, Word};
///
/// let family: Vec<Word> = ["bat", "cat", "car", "bar"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let guessed: LetterSet = [b'a'].into_iter().collect();
///
/// let families = partition(&family, guessed, b't');
/// assert_eq!(families.len(), 2);
///
/// let (pattern, words) = families.into_largest().unwrap();
/// assert_eq!(pattern, Pattern::parse("-a-").unwrap());
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn partition<'a>(family: &'a [Word], guessed: LetterSet, letter: u8) -> Families<'a> {
    let guessed = guessed.with(letter);
    let mut groups: FxHashMap<Pattern, Vec<&'a Word>> = FxHashMap::default();

    for word in family {
        groups
            .entry(Pattern::of(word, guessed))
            .or_default()
            .push(word);
    }

    log::trace!(
        "partitioned {} words on '{}' into {} families",
        family.len(),
        char::from(letter),
        groups.len()
    );

    Families { groups }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn letters(s: &str) -> LetterSet {
        s.bytes().collect()
    }

    fn pattern(s: &str) -> Pattern {
        Pattern::parse(s).unwrap()
    }

    #[test]
    fn groups_cover_family_exactly_once() {
        let family = words(&[
            "ally", "beta", "cool", "deal", "else", "flew", "good", "hope", "ibex", "jolt",
        ]);

        for letter in b'a'..=b'z' {
            let families = partition(&family, LetterSet::EMPTY, letter);
            assert_eq!(families.total_words(), family.len());

            let mut seen = BTreeSet::new();
            for (_, group) in families.iter() {
                for &word in group {
                    assert!(seen.insert(word.text()), "{word} in two groups");
                }
            }
            assert_eq!(seen.len(), family.len());
        }
    }

    #[test]
    fn words_land_under_their_own_pattern() {
        let family = words(&["bat", "cat", "car", "bar"]);
        let guessed = letters("a");
        let families = partition(&family, guessed, b't');

        for (key, group) in families.iter() {
            for &word in group {
                assert_eq!(&Pattern::of(word, guessed.with(b't')), key);
            }
        }
        assert_eq!(families.get(&pattern("-at")).map(<[_]>::len), Some(2));
        assert_eq!(families.get(&pattern("-a-")).map(<[_]>::len), Some(2));
        assert!(families.get(&pattern("--t")).is_none());
    }

    #[test]
    fn missing_letter_keeps_single_group() {
        let family = words(&["bat", "cat", "car", "bar"]);
        let families = partition(&family, LetterSet::EMPTY, b'z');
        assert_eq!(families.len(), 1);
        assert_eq!(families.get(&pattern("---")).map(<[_]>::len), Some(4));
    }

    #[test]
    fn largest_group_wins() {
        let family = words(&["ally", "beta", "cool", "deal", "else", "flew", "good", "hope"]);
        let families = partition(&family, LetterSet::EMPTY, b'e');
        let sizes: Vec<usize> = families.iter().map(|(_, g)| g.len()).collect();

        let (_, chosen) = families.into_largest().unwrap();
        assert!(sizes.iter().all(|&size| chosen.len() >= size));
    }

    #[test]
    fn tie_goes_to_smallest_pattern() {
        let family = words(&["bat", "cat", "car", "bar"]);

        // Repeat to make sure map ordering never leaks into the choice
        for _ in 0..20 {
            let (chosen, group) = partition(&family, letters("a"), b't')
                .into_largest()
                .unwrap();
            assert_eq!(chosen, pattern("-a-"));

            let texts: BTreeSet<&str> = group.iter().map(|w| w.text()).collect();
            assert_eq!(texts, BTreeSet::from(["bar", "car"]));
        }
    }

    #[test]
    fn three_way_tie_picks_most_blanks_first() {
        // e-- , -e- , --e all hold one word; "--e" sorts first
        let family = words(&["eon", "hem", "the"]);
        let (chosen, group) = partition(&family, LetterSet::EMPTY, b'e')
            .into_largest()
            .unwrap();
        assert_eq!(chosen, pattern("--e"));
        assert_eq!(group[0].text(), "the");
    }

    #[test]
    fn empty_family_has_no_largest() {
        let families = partition(&[], LetterSet::EMPTY, b'a');
        assert!(families.is_empty());
        assert!(families.into_largest().is_none());
    }
}
