//! Game session state
//!
//! A session owns the current rack, the precomputed top-word list and the
//! player's best submission. Interfaces only read its fields and call the
//! commands below; they never touch the search or scoring directly.

use crate::core::{Rack, Seed, SeedError, find_blanks, score_word};
use crate::dictionary::Dictionary;
use crate::solver::{BestWordFinder, TopWords};
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// The player's best submission so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestWord {
    pub word: String,
    pub score: u32,
}

/// A single-player game over one shared dictionary
pub struct Session<'d> {
    dictionary: &'d Dictionary,
    rng: StdRng,
    rack: Rack,
    seed: Option<Seed>,
    best: Option<BestWord>,
    top_words: TopWords,
}

impl<'d> Session<'d> {
    /// Start a session on a random rack
    ///
    /// The top-word list starts empty; call [`Session::reset`] or
    /// [`Session::compute_top_words`] to fill it.
    #[must_use]
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self::with_rng(dictionary, StdRng::from_os_rng())
    }

    /// Start a session driven by a specific random generator
    #[must_use]
    pub fn with_rng(dictionary: &'d Dictionary, mut rng: StdRng) -> Self {
        let seed = Seed::random(&mut rng);

        Self {
            dictionary,
            rng,
            rack: seed.rack(),
            seed: Some(seed),
            best: None,
            top_words: TopWords::new(),
        }
    }

    /// Start a new game
    ///
    /// Clears the best submission and found flags, then deals a rack from
    /// `seed` (or at random). With `compute_top` the top-word list is searched
    /// for the new rack; otherwise it is left empty.
    ///
    /// # Errors
    /// Returns the `SeedError` for a malformed seed, leaving the session
    /// untouched.
    ///
    /// # Examples
    /// ```
    /// use tileset::dictionary::Dictionary;
    /// use tileset::game::Session;
    ///
    /// let dictionary = Dictionary::from_words(["bed", "bead", "abed"]).unwrap();
    /// let mut session = Session::new(&dictionary);
    ///
    /// session.reset(Some("00091122243563"), true).unwrap();
    /// assert_eq!(session.rack().to_string(), "abehin_");
    /// assert!(session.reset(Some("not a seed"), true).is_err());
    /// assert_eq!(session.rack().to_string(), "abehin_");
    /// ```
    pub fn reset(&mut self, seed: Option<&str>, compute_top: bool) -> Result<(), SeedError> {
        let seed = match seed {
            Some(text) => text.parse::<Seed>().inspect_err(|e| {
                warn!("Rejected seed '{text}': {e}");
            })?,
            None => Seed::random(&mut self.rng),
        };

        self.start(seed.rack(), Some(seed), compute_top);
        Ok(())
    }

    /// Start a new game on an explicit rack
    ///
    /// The session seed is set when the letter bag could have dealt this rack.
    pub fn load_rack(&mut self, rack: Rack, compute_top: bool) {
        self.start(rack, Seed::from_rack(&rack), compute_top);
    }

    fn start(&mut self, rack: Rack, seed: Option<Seed>, compute_top: bool) {
        self.rack = rack;
        self.seed = seed;
        self.best = None;
        self.top_words = TopWords::new();

        match seed {
            Some(seed) => info!("New rack {rack} (seed {seed})"),
            None => info!("New rack {rack} (no seed)"),
        }

        if compute_top {
            self.compute_top_words();
        }
    }

    /// Search the dictionary for the best words on the current rack
    ///
    /// This is the only expensive session operation.
    pub fn compute_top_words(&mut self) {
        self.top_words = BestWordFinder::new(self.dictionary).find(&self.rack);
    }

    /// Reorder the rack tiles
    ///
    /// The tile multiset is unchanged, so the top-word list stays valid.
    pub fn shuffle(&mut self) {
        self.rack.shuffle(&mut self.rng);
        debug!("Shuffled rack to {}", self.rack);
    }

    /// Play a word, returning its score
    ///
    /// Words missing from the dictionary or unplayable from the rack score 0
    /// and change nothing. A scoring word becomes the best submission if it
    /// beats the current best, and is marked found in the top-word list.
    pub fn submit(&mut self, word: &str) -> u32 {
        if !self.dictionary.contains(word) {
            debug!("Submitted '{word}': not in dictionary");
            return 0;
        }

        let score = score_word(&self.rack, word);
        debug!("Submitted '{word}': {score} points");

        if score > 0 {
            if score > self.best_score() {
                self.best = Some(BestWord {
                    word: word.to_string(),
                    score,
                });
            }
            self.top_words.mark_found(word);
        }

        score
    }

    /// Give up: mark every top word as found
    pub fn reveal(&mut self) {
        self.top_words.reveal();
    }

    /// Which letters of `word` would be played with a blank
    #[must_use]
    pub fn blanks_for(&self, word: &str) -> Vec<bool> {
        find_blanks(&self.rack, word)
    }

    #[inline]
    #[must_use]
    pub const fn rack(&self) -> &Rack {
        &self.rack
    }

    /// Seed reproducing the current rack, if it has one
    #[inline]
    #[must_use]
    pub const fn seed(&self) -> Option<Seed> {
        self.seed
    }

    #[inline]
    #[must_use]
    pub const fn best(&self) -> Option<&BestWord> {
        self.best.as_ref()
    }

    /// Score of the best submission (0 before any scoring word)
    #[must_use]
    pub fn best_score(&self) -> u32 {
        self.best.as_ref().map_or(0, |best| best.score)
    }

    #[inline]
    #[must_use]
    pub const fn top_words(&self) -> &TopWords {
        &self.top_words
    }

    /// Number of top words found so far
    #[must_use]
    pub fn found_count(&self) -> usize {
        self.top_words.found_count()
    }

    /// Whether every top word has been found
    #[must_use]
    pub fn all_found(&self) -> bool {
        self.top_words.all_found()
    }

    #[inline]
    #[must_use]
    pub const fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }
}
