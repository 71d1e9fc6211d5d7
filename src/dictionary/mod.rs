//! Word dictionary
//!
//! An immutable set of lowercase words indexed by a [`Trie`]. Built once from
//! a word list and then only read, so one dictionary can back any number of
//! game sessions.

mod trie;

pub use trie::{NodeId, Trie};

use log::info;
use std::fmt;

/// Error type for dictionary construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// The trie arena could not grow
    AllocationFailure,
    /// A word was empty or had characters outside `a..=z`
    InvalidWord(String),
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailure => write!(f, "Out of memory while building the dictionary"),
            Self::InvalidWord(word) => {
                write!(f, "Invalid dictionary word '{word}' (lowercase a-z only)")
            }
        }
    }
}

impl std::error::Error for DictionaryError {}

/// Read-only word dictionary
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    trie: Trie,
}

impl Dictionary {
    /// Build a dictionary from a list of words
    ///
    /// Construction is all-or-nothing: on error the partial trie is dropped.
    ///
    /// # Errors
    /// Returns `InvalidWord` for the first word that is not lowercase ASCII
    /// letters, or `AllocationFailure` if memory runs out.
    ///
    /// # Examples
    /// ```
    /// use tileset::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["bed", "beg", "gaze"]).unwrap();
    /// assert!(dictionary.contains("bed"));
    /// assert!(!dictionary.contains("be"));
    /// assert!(dictionary.is_prefix("be"));
    ///
    /// assert!(Dictionary::from_words(["Bed"]).is_err());
    /// ```
    pub fn from_words<I, S>(words: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Trie::new();
        for word in words {
            trie.insert(word.as_ref())?;
        }

        info!(
            "Dictionary built: {} words, {} trie nodes",
            trie.len(),
            trie.node_count()
        );

        Ok(Self { trie })
    }

    /// Whether `word` is a complete dictionary word
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.trie.contains(word, false)
    }

    /// Whether some dictionary word starts with `prefix`
    #[must_use]
    pub fn is_prefix(&self, prefix: &str) -> bool {
        self.trie.contains(prefix, true)
    }

    /// The underlying trie, for prefix-guided searches
    #[inline]
    #[must_use]
    pub const fn trie(&self) -> &Trie {
        &self.trie
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.trie.len()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_from_words() {
        let dictionary = Dictionary::from_words(["a", "aa", "ab", "bc"]).unwrap();
        assert_eq!(dictionary.len(), 4);
        assert!(!dictionary.is_empty());

        assert!(dictionary.contains("aa"));
        assert!(!dictionary.contains("b"));
        assert!(dictionary.is_prefix("b"));
        assert!(!dictionary.contains("z"));
        assert!(!dictionary.is_prefix("z"));
    }

    #[test]
    fn build_from_owned_strings() {
        let words = vec!["quit".to_string(), "qi".to_string()];
        let dictionary = Dictionary::from_words(&words).unwrap();
        assert!(dictionary.contains("qi"));
        assert!(dictionary.is_prefix("qu"));
    }

    #[test]
    fn build_fails_on_invalid_word() {
        let result = Dictionary::from_words(["bed", "b3d", "beg"]);
        assert_eq!(
            result.unwrap_err(),
            DictionaryError::InvalidWord("b3d".to_string())
        );
    }

    #[test]
    fn empty_dictionary() {
        let dictionary = Dictionary::from_words(Vec::<String>::new()).unwrap();
        assert!(dictionary.is_empty());
        assert!(!dictionary.contains("a"));
    }

    #[test]
    fn dictionary_is_shareable() {
        fn assert_sync<T: Send + Sync>() {}
        assert_sync::<Dictionary>();
    }
}
