//! Word lists for the game dictionary
//!
//! Provides the embedded default list compiled into the binary, and loaders
//! for external word lists.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn words_are_lowercase_letters() {
        for &word in DICTIONARY {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_are_distinct() {
        let unique: std::collections::HashSet<_> = DICTIONARY.iter().collect();
        assert_eq!(unique.len(), DICTIONARY.len());
    }

    #[test]
    fn contains_common_words() {
        for word in ["bed", "beg", "gaze", "quad", "quit", "qi"] {
            assert!(DICTIONARY.contains(&word), "missing '{word}'");
        }
    }
}
