//! Weighted letter pool
//!
//! Racks are drawn from a fixed 100-tile bag with Scrabble-like letter
//! frequencies. Draws pick distinct *positions* in the bag, so a rack can hold
//! repeated letters but never more copies than the bag contains.

use super::tile::{Rack, Tile};
use super::seed::Seed;

/// Number of tiles in the bag
pub const POOL_SIZE: usize = 100;

const fn l(ch: u8) -> Tile {
    Tile::Letter(ch)
}

const B: Tile = Tile::Blank;

/// The bag: 98 letter tiles followed by two blanks
#[rustfmt::skip]
pub const LETTER_POOL: [Tile; POOL_SIZE] = [
    l(b'a'), l(b'a'), l(b'a'), l(b'a'), l(b'a'), l(b'a'), l(b'a'), l(b'a'), l(b'a'),
    l(b'b'), l(b'b'),
    l(b'c'), l(b'c'),
    l(b'd'), l(b'd'), l(b'd'), l(b'd'),
    l(b'e'), l(b'e'), l(b'e'), l(b'e'), l(b'e'), l(b'e'), l(b'e'), l(b'e'), l(b'e'), l(b'e'), l(b'e'), l(b'e'),
    l(b'f'), l(b'f'),
    l(b'g'), l(b'g'), l(b'g'),
    l(b'h'), l(b'h'),
    l(b'i'), l(b'i'), l(b'i'), l(b'i'), l(b'i'), l(b'i'), l(b'i'), l(b'i'), l(b'i'),
    l(b'j'),
    l(b'k'),
    l(b'l'), l(b'l'), l(b'l'), l(b'l'),
    l(b'm'), l(b'm'),
    l(b'n'), l(b'n'), l(b'n'), l(b'n'), l(b'n'), l(b'n'),
    l(b'o'), l(b'o'), l(b'o'), l(b'o'), l(b'o'), l(b'o'), l(b'o'), l(b'o'),
    l(b'p'), l(b'p'),
    l(b'q'),
    l(b'r'), l(b'r'), l(b'r'), l(b'r'), l(b'r'), l(b'r'),
    l(b's'), l(b's'), l(b's'), l(b's'),
    l(b't'), l(b't'), l(b't'), l(b't'), l(b't'), l(b't'),
    l(b'u'), l(b'u'), l(b'u'), l(b'u'),
    l(b'v'), l(b'v'),
    l(b'w'), l(b'w'),
    l(b'x'),
    l(b'y'), l(b'y'),
    l(b'z'),
    B, B,
];

/// Tile at a bag position
///
/// # Panics
/// Panics if `index >= POOL_SIZE`
#[inline]
#[must_use]
pub const fn pool_tile(index: u8) -> Tile {
    LETTER_POOL[index as usize]
}

/// Draw a random rack
///
/// Equivalent to drawing a random [`Seed`] and decoding it, so every random
/// rack can be reproduced from its seed.
pub fn draw_rack<R: rand::Rng + ?Sized>(rng: &mut R) -> Rack {
    Seed::random(rng).rack()
}
