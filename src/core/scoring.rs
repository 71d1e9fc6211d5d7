//! Word scoring against a rack
//!
//! Letters are matched to tiles greedily: each character of the word takes the
//! leftmost unused tile with the same letter, falling back to the leftmost
//! unused blank. There is no backtracking, so the assignment is not always the
//! cheapest one; both the search and player scores depend on this exact rule.

use super::tile::{RACK_SIZE, Rack, Tile};

/// Points per letter, `a` through `z`
#[rustfmt::skip]
const LETTER_SCORES: [u32; 26] = [
//  a  b  c  d  e  f  g  h  i  j  k  l  m  n  o  p   q  r  s  t  u  v  w  x  y   z
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
];

/// Points for a single letter
///
/// Returns 0 for anything outside `a..=z`.
#[inline]
#[must_use]
pub fn score_letter(letter: u8) -> u32 {
    if letter.is_ascii_lowercase() {
        LETTER_SCORES[usize::from(letter - b'a')]
    } else {
        0
    }
}

/// Points for a tile (blanks are always worth 0)
#[inline]
#[must_use]
pub fn score_tile(tile: Tile) -> u32 {
    tile.letter().map_or(0, score_letter)
}

/// Which rack position each character of `word` is played from
///
/// `None` marks a character no remaining tile can supply.
fn assign_tiles(rack: &Rack, word: &str) -> Vec<Option<usize>> {
    let tiles = rack.tiles();
    let mut used = [false; RACK_SIZE];

    word.bytes()
        .map(|ch| {
            let literal = (0..RACK_SIZE).find(|&i| !used[i] && tiles[i] == Tile::Letter(ch));
            let slot = literal.or_else(|| {
                if ch.is_ascii_lowercase() {
                    (0..RACK_SIZE).find(|&i| !used[i] && tiles[i].is_blank())
                } else {
                    None
                }
            });
            if let Some(i) = slot {
                used[i] = true;
            }
            slot
        })
        .collect()
}

/// Score `word` as played from `rack`
///
/// Returns 0 if any character cannot be supplied by the rack: a single
/// unplayable letter invalidates the whole word.
///
/// # Examples
/// ```
/// use tileset::core::{Rack, score_word};
///
/// let rack: Rack = "abcdef_".parse().unwrap();
/// assert_eq!(score_word(&rack, "bed"), 6);
/// assert_eq!(score_word(&rack, "bez"), 4); // z is played with the blank
/// assert_eq!(score_word(&rack, "bqz"), 0); // only one blank
/// ```
#[must_use]
pub fn score_word(rack: &Rack, word: &str) -> u32 {
    let tiles = rack.tiles();
    let mut total = 0;

    for slot in assign_tiles(rack, word) {
        match slot {
            Some(i) => total += score_tile(tiles[i]),
            None => return 0,
        }
    }

    total
}

/// Whether every character of `word` can be played from `rack`
#[must_use]
pub fn can_play(rack: &Rack, word: &str) -> bool {
    assign_tiles(rack, word).iter().all(Option::is_some)
}

/// Mark the positions of `word` that are played with a blank
///
/// Uses the same greedy assignment as [`score_word`]. Characters the rack
/// cannot supply are reported as `false`.
#[must_use]
pub fn find_blanks(rack: &Rack, word: &str) -> Vec<bool> {
    let tiles = rack.tiles();

    assign_tiles(rack, word)
        .into_iter()
        .map(|slot| slot.is_some_and(|i| tiles[i].is_blank()))
        .collect()
}
