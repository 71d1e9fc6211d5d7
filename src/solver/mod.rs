//! Best-word solving
//!
//! Finds the highest-scoring dictionary words that can be played from a rack.

mod finder;
mod top_words;

pub use finder::{BestWordFinder, SearchStats};
pub use top_words::{TOP_WORDS, TopWord, TopWords};
