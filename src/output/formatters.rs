//! Formatting utilities for terminal output
//!
//! Plain strings only; colour is applied by the callers.

use crate::core::{Rack, Tile, score_tile};
use crate::solver::TopWords;

/// Rack as spaced uppercase letters, `_` for a blank
#[must_use]
pub fn format_rack(rack: &Rack) -> String {
    rack.tiles()
        .iter()
        .map(|tile| tile.to_char().to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Tile with its point value, e.g. `Q10` or `_0`
#[must_use]
pub fn format_tile(tile: Tile) -> String {
    format!("{}{}", tile.to_char().to_ascii_uppercase(), score_tile(tile))
}

/// Hide a word, keeping only its length
#[must_use]
pub fn mask_word(word: &str) -> String {
    "-".repeat(word.len())
}

/// Word with the letters played from blanks lowercased
///
/// `blanks` comes from [`crate::core::find_blanks`]; positions past its end are
/// treated as real tiles.
#[must_use]
pub fn mark_blanks(word: &str, blanks: &[bool]) -> String {
    word.chars()
        .enumerate()
        .map(|(i, ch)| {
            if blanks.get(i).copied().unwrap_or(false) {
                ch.to_ascii_lowercase()
            } else {
                ch.to_ascii_uppercase()
            }
        })
        .collect()
}

/// Numbered top-word list; words not yet found are masked
#[must_use]
pub fn format_top_words(top: &TopWords) -> String {
    if top.is_empty() {
        return "No top words\n".to_string();
    }

    let mut out = format!("Top words ({}/{} found):\n", top.found_count(), top.len());
    for (i, entry) in top.iter().enumerate() {
        let shown = if entry.found {
            entry.word.clone()
        } else {
            mask_word(&entry.word)
        };
        out.push_str(&format!("{:>4}. {shown:<7} {:>3}\n", i + 1, entry.score));
    }
    out
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
