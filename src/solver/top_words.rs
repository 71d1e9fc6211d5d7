//! Ranked list of the best words for a rack
//!
//! Entries are ranked by score (highest first), ties broken alphabetically.
//! While a search is running the list is kept unsorted and the worst entry is
//! evicted when something better turns up; [`TopWords::finish`] sorts it.

use std::cmp::Ordering;

/// Number of words kept for each rack
pub const TOP_WORDS: usize = 10;

/// One ranked word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopWord {
    pub word: String,
    pub score: u32,
    /// Whether the player has found (or been shown) this word
    pub found: bool,
}

impl TopWord {
    /// Ranking order: `Less` means `self` ranks above `other`
    fn rank(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| self.word.cmp(&other.word))
    }
}

/// The best words discoverable from a rack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopWords {
    entries: Vec<TopWord>,
    capacity: usize,
}

impl Default for TopWords {
    fn default() -> Self {
        Self::new()
    }
}

impl TopWords {
    /// Empty list holding up to [`TOP_WORDS`] entries
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(TOP_WORDS)
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Offer a candidate word
    ///
    /// Fills free slots first. Once full, the candidate replaces the worst
    /// entry (lowest score, then alphabetically last) if it ranks above it.
    /// Words already in the list are ignored. Returns whether the word was
    /// kept.
    pub fn offer(&mut self, word: &str, score: u32) -> bool {
        if self.capacity == 0 || self.contains(word) {
            return false;
        }

        let candidate = TopWord {
            word: word.to_string(),
            score,
            found: false,
        };

        if self.entries.len() < self.capacity {
            self.entries.push(candidate);
            return true;
        }

        let worst = self
            .entries
            .iter_mut()
            .max_by(|a, b| a.rank(b))
            .filter(|worst| candidate.rank(worst) == Ordering::Less);

        match worst {
            Some(slot) => {
                *slot = candidate;
                true
            }
            None => false,
        }
    }

    /// Sort into final ranking order
    #[must_use]
    pub fn finish(mut self) -> Self {
        self.entries.sort_by(TopWord::rank);
        self
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.entries.iter().any(|entry| entry.word == word)
    }

    /// Mark `word` as found, returning whether it is in the list
    pub fn mark_found(&mut self, word: &str) -> bool {
        match self.entries.iter_mut().find(|entry| entry.word == word) {
            Some(entry) => {
                entry.found = true;
                true
            }
            None => false,
        }
    }

    /// Mark every entry as found
    pub fn reveal(&mut self) {
        for entry in &mut self.entries {
            entry.found = true;
        }
    }

    #[must_use]
    pub fn found_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.found).count()
    }

    /// Whether every entry has been found (false for an empty list)
    #[must_use]
    pub fn all_found(&self) -> bool {
        !self.entries.is_empty() && self.entries.iter().all(|entry| entry.found)
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[TopWord] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TopWord> {
        self.entries.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest-ranked entry (only meaningful after [`TopWords::finish`])
    #[must_use]
    pub fn best(&self) -> Option<&TopWord> {
        self.entries.first()
    }
}

impl<'a> IntoIterator for &'a TopWords {
    type Item = &'a TopWord;
    type IntoIter = std::slice::Iter<'a, TopWord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &TopWords) -> Vec<(&str, u32)> {
        list.iter().map(|e| (e.word.as_str(), e.score)).collect()
    }

    #[test]
    fn fills_then_sorts() {
        let mut list = TopWords::new();
        assert!(list.offer("ut", 2));
        assert!(list.offer("quit", 13));
        assert!(list.offer("it", 2));
        assert!(list.offer("qi", 11));

        let list = list.finish();
        assert_eq!(
            words(&list),
            [("quit", 13), ("qi", 11), ("it", 2), ("ut", 2)]
        );
        assert_eq!(list.best().map(|e| e.word.as_str()), Some("quit"));
    }

    #[test]
    fn ignores_duplicates() {
        let mut list = TopWords::new();
        assert!(list.offer("qi", 11));
        assert!(!list.offer("qi", 11));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn evicts_lowest_score() {
        let mut list = TopWords::with_capacity(2);
        list.offer("aa", 2);
        list.offer("bb", 6);

        assert!(list.offer("cc", 4));
        assert!(!list.offer("dd", 1));

        assert_eq!(words(&list.finish()), [("bb", 6), ("cc", 4)]);
    }

    #[test]
    fn ties_evict_alphabetically_last() {
        let mut list = TopWords::with_capacity(2);
        list.offer("ti", 2);
        list.offer("ut", 2);

        // "it" beats "ut", the alphabetically last of the tied entries
        assert!(list.offer("it", 2));
        // "zz" sorts after everything left, so it is rejected
        assert!(!list.offer("zz", 2));

        assert_eq!(words(&list.finish()), [("it", 2), ("ti", 2)]);
    }

    #[test]
    fn result_independent_of_offer_order() {
        let candidates = [
            ("quit", 13),
            ("qi", 11),
            ("tui", 3),
            ("it", 2),
            ("ti", 2),
            ("ut", 2),
            ("ab", 4),
            ("ba", 4),
        ];

        let mut forward = TopWords::with_capacity(5);
        for (word, score) in candidates {
            forward.offer(word, score);
        }
        let mut backward = TopWords::with_capacity(5);
        for (word, score) in candidates.iter().rev() {
            backward.offer(word, *score);
        }

        let forward = forward.finish();
        assert_eq!(forward, backward.finish());
        assert_eq!(
            words(&forward),
            [("quit", 13), ("qi", 11), ("ab", 4), ("ba", 4), ("tui", 3)]
        );
    }

    #[test]
    fn zero_capacity_keeps_nothing() {
        let mut list = TopWords::with_capacity(0);
        assert!(!list.offer("qi", 11));
        assert!(list.is_empty());
    }

    #[test]
    fn found_flags() {
        let mut list = TopWords::new();
        list.offer("qi", 11);
        list.offer("it", 2);
        let mut list = list.finish();

        assert_eq!(list.found_count(), 0);
        assert!(!list.all_found());

        assert!(list.mark_found("it"));
        assert!(!list.mark_found("zz"));
        assert_eq!(list.found_count(), 1);

        list.reveal();
        assert!(list.all_found());
        assert_eq!(list.found_count(), 2);
    }

    #[test]
    fn empty_list_is_never_all_found() {
        let mut list = TopWords::new();
        list.reveal();
        assert!(!list.all_found());
    }
}
