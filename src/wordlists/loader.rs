//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded list.

use crate::dictionary::{Dictionary, DictionaryError};
use super::DICTIONARY;
use std::fs;
use std::io;
use std::path::Path;

/// Normalise one line of a word list
///
/// Trims and lowercases the entry; returns `None` for blank lines and for
/// entries containing anything other than ASCII letters.
#[must_use]
pub fn normalize_word(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(trimmed.to_ascii_lowercase())
}

/// Load words from a file, one per line
///
/// Invalid entries are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use tileset::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines()))
}

/// Normalise a sequence of lines, skipping invalid entries
pub fn words_from_lines<'a, I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    lines.into_iter().filter_map(normalize_word).collect()
}

/// Build a dictionary from the embedded word list
///
/// # Errors
///
/// Returns `AllocationFailure` if the trie cannot be allocated.
///
/// # Examples
/// ```
/// use tileset::wordlists::loader::embedded_dictionary;
///
/// let dictionary = embedded_dictionary().unwrap();
/// assert!(dictionary.contains("quit"));
/// ```
pub fn embedded_dictionary() -> Result<Dictionary, DictionaryError> {
    Dictionary::from_words(DICTIONARY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_valid_words() {
        assert_eq!(normalize_word("quit"), Some("quit".to_string()));
        assert_eq!(normalize_word("  Quit \r"), Some("quit".to_string()));
    }

    #[test]
    fn normalize_skips_invalid() {
        assert_eq!(normalize_word(""), None);
        assert_eq!(normalize_word("   "), None);
        assert_eq!(normalize_word("don't"), None);
        assert_eq!(normalize_word("two words"), None);
        assert_eq!(normalize_word("café"), None);
    }

    #[test]
    fn lines_to_words() {
        let words = words_from_lines(["bed", "", "Beg", "b3d", "gaze"]);
        assert_eq!(words, ["bed", "beg", "gaze"]);
    }

    #[test]
    fn load_from_missing_file() {
        assert!(load_from_file("does/not/exist.txt").is_err());
    }

    #[test]
    fn load_from_temp_file() {
        let path = std::env::temp_dir().join(format!("tileset-words-{}.txt", std::process::id()));
        fs::write(&path, "quit\nQI\n\nit's\ntui\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words, ["quit", "qi", "tui"]);
    }

    #[test]
    fn embedded_dictionary_builds() {
        let dictionary = embedded_dictionary().unwrap();
        assert_eq!(dictionary.len(), DICTIONARY.len());
        assert!(dictionary.contains("bed"));
        assert!(!dictionary.contains("abd"));
    }
}
