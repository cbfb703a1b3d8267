//! Token frequency analysis.

use core::fmt;
use core::num::NonZeroUsize;

use rustc_hash::FxHashMap;

/// A token and how often it occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyEntry<'a> {
    /// The token.
    pub token: &'a str,
    /// Number of occurrences.
    pub count: usize,
}

impl fmt::Display for FrequencyEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.token, self.count)
    }
}

/// Occurrence counts over a token sequence.
///
/// Entries are kept in first-seen order, which is what makes ranking stable:
/// tokens with equal counts keep the order in which they first appeared.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable<'a> {
    slots: FxHashMap<&'a str, usize>,
    entries: Vec<FrequencyEntry<'a>>,
    total: usize,
}

impl<'a> FrequencyTable<'a> {
    /// Counts every token in `words`.
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut table = Self::default();
        for word in words {
            table.add(word);
        }
        table
    }

    /// Records one occurrence of `token`.
    pub fn add(&mut self, token: &'a str) {
        self.total += 1;
        match self.slots.get(token) {
            Some(&slot) => self.entries[slot].count += 1,
            None => {
                self.slots.insert(token, self.entries.len());
                self.entries.push(FrequencyEntry { token, count: 1 });
            }
        }
    }

    /// Count for `token`, zero if never seen.
    pub fn count(&self, token: &str) -> usize {
        self.slots
            .get(token)
            .map_or(0, |&slot| self.entries[slot].count)
    }

    /// Number of distinct tokens.
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    /// Number of tokens counted, duplicates included.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Entries in first-seen order.
    pub fn entries(&self) -> &[FrequencyEntry<'a>] {
        &self.entries
    }

    /// The `k` most frequent tokens, highest count first.
    ///
    /// Ties keep first-seen order. Returns every entry if fewer than `k` exist.
    pub fn top_k(&self, k: NonZeroUsize) -> Vec<FrequencyEntry<'a>> {
        let mut ranked = self.entries.clone();
        // `sort_by` is stable, so equal counts stay in first-seen order.
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(k.get());
        ranked
    }
}

/// Counts `words` and returns the `k` most frequent tokens.
///
/// # Examples
///
/// ```
/// use core::num::NonZeroUsize;
/// use tokbench_core::analyzer::frequency::top_k;
///
/// let words = ["hello", "hello", "world", "quick", "fox"];
/// let top = top_k(&words, NonZeroUsize::new(2).unwrap());
/// assert_eq!(top[0].token, "hello");
/// assert_eq!(top[0].count, 2);
/// assert_eq!(top[1].token, "world");
/// ```
pub fn top_k<'a>(words: &[&'a str], k: NonZeroUsize) -> Vec<FrequencyEntry<'a>> {
    FrequencyTable::from_words(words.iter().copied()).top_k(k)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn k(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn pairs<'a>(entries: &[FrequencyEntry<'a>]) -> Vec<(&'a str, usize)> {
        entries.iter().map(|e| (e.token, e.count)).collect()
    }

    #[test]
    fn scenario_ties_in_first_seen_order() {
        let words = ["hello", "hello", "world", "quick", "fox"];
        assert_eq!(
            pairs(&top_k(&words, k(10))),
            vec![("hello", 2), ("world", 1), ("quick", 1), ("fox", 1)]
        );
    }

    #[test]
    fn empty_input() {
        assert!(top_k(&[], k(10)).is_empty());
    }

    #[test]
    fn truncates_to_k() {
        let words = ["a", "b", "c", "a", "d", "b", "a"];
        let top = top_k(&words, k(2));
        assert_eq!(pairs(&top), vec![("a", 3), ("b", 2)]);
    }

    #[test]
    fn exact_k_with_non_increasing_counts() {
        let words: Vec<&str> = "x y z x y x w v v v v".split(' ').collect();
        let distinct = FrequencyTable::from_words(words.iter().copied()).distinct();

        for n in 1..=distinct {
            let top = top_k(&words, k(n));
            assert_eq!(top.len(), n);
            assert!(top.windows(2).all(|w| w[0].count >= w[1].count));
        }
    }

    #[test]
    fn later_higher_count_overtakes() {
        let words = ["first", "second", "second"];
        assert_eq!(
            pairs(&top_k(&words, k(3))),
            vec![("second", 2), ("first", 1)]
        );
    }

    #[test]
    fn idempotent() {
        let words = ["rabbit", "alice", "queen", "alice", "rabbit", "hatter"];
        let once = top_k(&words, k(3));
        let twice = top_k(&words, k(3));
        assert_eq!(once, twice);
    }

    #[test]
    fn input_not_mutated() {
        let words = vec!["b", "a", "a"];
        let before = words.clone();
        let _ = top_k(&words, k(1));
        assert_eq!(words, before);
    }

    #[test]
    fn table_counts() {
        let table = FrequencyTable::from_words(["a", "b", "a"]);
        assert_eq!(table.count("a"), 2);
        assert_eq!(table.count("b"), 1);
        assert_eq!(table.count("zzz"), 0);
        assert_eq!(table.distinct(), 2);
        assert_eq!(table.total(), 3);
        assert_eq!(table.entries()[0].token, "a");
    }

    #[test]
    fn entry_display() {
        let e = FrequencyEntry {
            token: "alice",
            count: 7,
        };
        assert_eq!(e.to_string(), "alice 7");
    }
}
