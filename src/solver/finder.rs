//! Best-word search
//!
//! Depth-first backtracking over the rack, guided by the dictionary trie.
//! Every unused tile is tried as the next letter (a blank tries all 26), and a
//! branch is abandoned as soon as the spelled prefix leaves the trie.

use super::top_words::{TOP_WORDS, TopWords};
use crate::core::{RACK_SIZE, Rack, Tile, score_word};
use crate::dictionary::{Dictionary, NodeId, Trie};
use log::debug;
use rustc_hash::FxHashSet;
use std::time::{Duration, Instant};

/// Counters from one search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Trie nodes entered
    pub nodes_visited: usize,
    /// Distinct dictionary words that can be played from the rack
    pub words_found: usize,
    pub elapsed: Duration,
}

/// Finds the highest-scoring dictionary words for a rack
pub struct BestWordFinder<'d> {
    dictionary: &'d Dictionary,
    capacity: usize,
}

impl<'d> BestWordFinder<'d> {
    /// Finder keeping the top [`TOP_WORDS`] words
    #[must_use]
    pub const fn new(dictionary: &'d Dictionary) -> Self {
        Self {
            dictionary,
            capacity: TOP_WORDS,
        }
    }

    /// Finder keeping the top `capacity` words
    #[must_use]
    pub const fn with_capacity(dictionary: &'d Dictionary, capacity: usize) -> Self {
        Self {
            dictionary,
            capacity,
        }
    }

    /// Ranked list of the best words playable from `rack`
    ///
    /// Scores come from [`score_word`], so they match what a player would get
    /// by submitting the same word.
    ///
    /// # Examples
    /// ```
    /// use tileset::core::Rack;
    /// use tileset::dictionary::Dictionary;
    /// use tileset::solver::BestWordFinder;
    ///
    /// let dictionary = Dictionary::from_words(["quit", "qi", "it", "zebra"]).unwrap();
    /// let rack: Rack = "quitqqq".parse().unwrap();
    ///
    /// let top = BestWordFinder::new(&dictionary).find(&rack);
    /// let words: Vec<_> = top.iter().map(|e| (e.word.as_str(), e.score)).collect();
    /// assert_eq!(words, [("quit", 13), ("qi", 11), ("it", 2)]);
    /// ```
    #[must_use]
    pub fn find(&self, rack: &Rack) -> TopWords {
        self.find_with_stats(rack).0
    }

    /// Like [`BestWordFinder::find`], also reporting search counters
    #[must_use]
    pub fn find_with_stats(&self, rack: &Rack) -> (TopWords, SearchStats) {
        let start = Instant::now();

        let mut search = Search {
            trie: self.dictionary.trie(),
            rack,
            used: [false; RACK_SIZE],
            prefix: String::with_capacity(RACK_SIZE),
            seen: FxHashSet::default(),
            top: TopWords::with_capacity(self.capacity),
            nodes_visited: 0,
        };
        search.extend(Trie::ROOT);

        let stats = SearchStats {
            nodes_visited: search.nodes_visited,
            words_found: search.seen.len(),
            elapsed: start.elapsed(),
        };

        debug!(
            "Searched rack {rack}: {} words from {} nodes in {:.2?}",
            stats.words_found, stats.nodes_visited, stats.elapsed
        );

        (search.top.finish(), stats)
    }
}

struct Search<'a> {
    trie: &'a Trie,
    rack: &'a Rack,
    used: [bool; RACK_SIZE],
    prefix: String,
    seen: FxHashSet<String>,
    top: TopWords,
    nodes_visited: usize,
}

impl Search<'_> {
    /// Try every unused tile as the letter after `node`
    fn extend(&mut self, node: NodeId) {
        let tiles = *self.rack.tiles();

        for i in 0..RACK_SIZE {
            if self.used[i] {
                continue;
            }
            // Identical tiles lead to identical subtrees; only the first unused one is tried
            if (0..i).any(|j| !self.used[j] && tiles[j] == tiles[i]) {
                continue;
            }

            self.used[i] = true;
            match tiles[i] {
                Tile::Letter(letter) => self.step(node, letter),
                Tile::Blank => {
                    for letter in b'a'..=b'z' {
                        self.step(node, letter);
                    }
                }
            }
            self.used[i] = false;
        }
    }

    fn step(&mut self, node: NodeId, letter: u8) {
        // Neither a word nor a prefix of one
        let Some(child) = self.trie.child(node, letter) else {
            return;
        };

        self.nodes_visited += 1;
        self.prefix.push(char::from(letter));

        if self.trie.is_terminal(child) {
            self.record();
        }
        if self.trie.has_children(child) {
            self.extend(child);
        }

        self.prefix.pop();
    }

    fn record(&mut self) {
        if self.seen.contains(&self.prefix) {
            return;
        }
        self.seen.insert(self.prefix.clone());

        let score = score_word(self.rack, &self.prefix);
        self.top.offer(&self.prefix, score);
    }
}
