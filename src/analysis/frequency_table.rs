//! Aggregation of word lengths into per-length counts
//!
//! A [`FrequencyTable`] maps each observed word length to the number of unique
//! words of that length. Keys are kept sorted so every consumer (reports,
//! charts, tables) sees lengths in ascending order without re-sorting.

use crate::api::word_set::WordSet;
use std::collections::btree_map::{self, BTreeMap};

/// Number of unique words per word length, ordered by length
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<usize, usize>,
}

impl FrequencyTable {
    /// Builds the table from a set of unique words.
    ///
    /// Each word increments the bucket for its length exactly once, so
    /// [`FrequencyTable::total`] always equals [`WordSet::len`].
    pub fn from_words(words: &WordSet) -> Self {
        let table: Self = words.lengths().map(|(_, length)| length).collect();
        log::debug!(
            "Aggregated {} words into {} length buckets",
            table.total(),
            table.len()
        );
        table
    }

    /// Number of unique words with the given length; zero if none.
    pub fn count(&self, length: usize) -> usize {
        self.counts.get(&length).copied().unwrap_or(0)
    }

    /// Iterates over `(length, count)` pairs in ascending order of length.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.counts.iter(),
        }
    }

    /// Number of distinct lengths (buckets) present.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all bucket counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Shortest length present.
    pub fn min_length(&self) -> Option<usize> {
        self.counts.keys().next().copied()
    }

    /// Longest length present.
    pub fn max_length(&self) -> Option<usize> {
        self.counts.keys().next_back().copied()
    }

    /// Largest count held by any bucket.
    pub fn max_count(&self) -> Option<usize> {
        self.counts.values().max().copied()
    }

    /// The `(length, count)` pair with the highest count.
    ///
    /// When several lengths share the highest count the smallest length wins.
    pub fn most_common(&self) -> Option<(usize, usize)> {
        // Ascending iteration + strict comparison keeps the first (smallest) maximum.
        self.iter().fold(None, |best, (length, count)| match best {
            Some((_, best_count)) if count <= best_count => best,
            _ => Some((length, count)),
        })
    }
}

impl FromIterator<usize> for FrequencyTable {
    /// Builds a table from raw lengths, one increment per item.
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut counts = BTreeMap::new();
        for length in iter {
            *counts.entry(length).or_insert(0) += 1;
        }
        Self { counts }
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = (usize, usize);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the `(length, count)` pairs of a [`FrequencyTable`]
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, usize, usize>,
}

impl Iterator for Iter<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&length, &count)| (length, count))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(&length, &count)| (length, count))
    }
}

impl ExactSizeIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn aggregates_example_words() {
        let words = WordSet::from_text("a bb cc ddd");
        let table = FrequencyTable::from_words(&words);

        assert_eq!(table.iter().collect::<Vec<_>>(), vec![(1, 1), (2, 2), (3, 1)]);
        assert_eq!(table.max_length(), Some(3));
        assert_eq!(table.min_length(), Some(1));
        assert_eq!(table.most_common(), Some((2, 2)));
        assert_eq!(table.max_count(), Some(2));
    }

    #[test]
    fn single_word() {
        let table = FrequencyTable::from_words(&WordSet::from_text("x"));

        assert_eq!(table.iter().collect::<Vec<_>>(), vec![(1, 1)]);
        assert_eq!(table.min_length(), Some(1));
        assert_eq!(table.max_length(), Some(1));
        assert_eq!(table.most_common(), Some((1, 1)));
    }

    #[test]
    fn empty_table_has_no_statistics() {
        let table = FrequencyTable::from_words(&WordSet::default());

        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
        assert_eq!(table.min_length(), None);
        assert_eq!(table.max_length(), None);
        assert_eq!(table.most_common(), None);
        assert_eq!(table.max_count(), None);
    }

    #[rstest]
    #[case::two_way_tie(vec![5, 5, 3, 3], (3, 2))]
    #[case::three_way_tie(vec![9, 1, 4], (1, 1))]
    #[case::tie_after_larger(vec![7, 7, 7, 2, 2, 2, 4], (2, 3))]
    #[case::clear_winner(vec![1, 6, 6, 6, 2, 2], (6, 3))]
    fn most_common_prefers_smallest_length(
        #[case] lengths: Vec<usize>,
        #[case] expected: (usize, usize),
    ) {
        let table: FrequencyTable = lengths.into_iter().collect();
        assert_eq!(table.most_common(), Some(expected));
    }

    #[test]
    fn total_matches_unique_word_count() {
        let text = "the quick brown fox jumps over the lazy dog the end";
        let words = WordSet::from_text(text);
        let table = FrequencyTable::from_words(&words);

        assert_eq!(table.total(), words.len());
        assert_eq!(words.len(), 9);
        assert_eq!(table.count(3), 4); // the, fox, dog, end
        assert_eq!(table.count(42), 0);
    }

    #[test]
    fn iterates_in_ascending_length_order() {
        let table: FrequencyTable = [10, 2, 7, 2, 1].into_iter().collect();
        let lengths: Vec<usize> = table.iter().map(|(length, _)| length).collect();

        assert_eq!(lengths, vec![1, 2, 7, 10]);
        assert_eq!(table.iter().len(), 4);
        assert_eq!(table.iter().next_back(), Some((10, 1)));
    }
}
