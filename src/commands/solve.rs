//! Rack solving command
//!
//! Deals a rack from a seed or parses one from letters, then lists the best
//! words it can make.

use crate::core::{Rack, Seed};
use crate::dictionary::Dictionary;
use crate::solver::{BestWordFinder, SearchStats, TopWords};

/// Where the rack to solve comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RackSource {
    /// A hex seed, decoded through the letter bag
    Seed(String),
    /// Seven letters, with `_`, `?` or space for a blank
    Letters(String),
}

/// Result of solving a rack
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub rack: Rack,
    /// Seed that deals this rack, if the letter bag can supply it
    pub seed: Option<Seed>,
    pub top_words: TopWords,
    pub stats: SearchStats,
}

/// Find the top words for a rack
///
/// # Errors
///
/// Returns an error if the seed or the rack letters are malformed.
///
/// # Examples
/// ```
/// use tileset::commands::{RackSource, solve_rack};
/// use tileset::dictionary::Dictionary;
///
/// let dictionary = Dictionary::from_words(["quit", "qi", "it"]).unwrap();
/// let result = solve_rack(&RackSource::Letters("quitqqq".into()), &dictionary).unwrap();
///
/// assert_eq!(result.top_words.best().unwrap().word, "quit");
/// assert!(result.seed.is_none());
/// ```
pub fn solve_rack(source: &RackSource, dictionary: &Dictionary) -> Result<SolveResult, String> {
    let (rack, seed) = match source {
        RackSource::Seed(text) => {
            let seed: Seed = text
                .parse()
                .map_err(|e| format!("Invalid seed '{text}': {e}"))?;
            (seed.rack(), Some(seed))
        }
        RackSource::Letters(text) => {
            let rack: Rack = text
                .parse()
                .map_err(|e| format!("Invalid rack '{text}': {e}"))?;
            (rack, Seed::from_rack(&rack))
        }
    };

    let (top_words, stats) = BestWordFinder::new(dictionary).find_with_stats(&rack);

    Ok(SolveResult {
        rack,
        seed,
        top_words,
        stats,
    })
}
