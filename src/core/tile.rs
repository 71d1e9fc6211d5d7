//! Rack tiles
//!
//! A rack holds exactly [`RACK_SIZE`] tiles, each either a lowercase letter or
//! a blank. Blanks are a distinct variant rather than a reserved character.

use std::fmt;
use std::str::FromStr;

/// Number of tiles on a rack
pub const RACK_SIZE: usize = 7;

/// A single tile on the rack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    /// A lowercase ASCII letter (`b'a'..=b'z'`)
    Letter(u8),
    /// Wildcard tile that stands for any letter and scores nothing
    Blank,
}

impl Tile {
    /// Parse a tile from a character
    ///
    /// Letters are case-insensitive; `' '`, `'_'` and `'?'` all mean a blank.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'a'..='z' => Some(Self::Letter(ch as u8)),
            'A'..='Z' => Some(Self::Letter(ch.to_ascii_lowercase() as u8)),
            ' ' | '_' | '?' => Some(Self::Blank),
            _ => None,
        }
    }

    /// The letter on this tile, or `None` for a blank
    #[inline]
    #[must_use]
    pub const fn letter(self) -> Option<u8> {
        match self {
            Self::Letter(letter) => Some(letter),
            Self::Blank => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_blank(self) -> bool {
        matches!(self, Self::Blank)
    }

    /// Character used when printing the tile (`_` for a blank)
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Letter(letter) => letter as char,
            Self::Blank => '_',
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Error type for racks parsed from text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileError {
    BadLength(usize),
    InvalidCharacter(char),
}

impl fmt::Display for TileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadLength(len) => {
                write!(f, "Rack must have exactly {RACK_SIZE} tiles, got {len}")
            }
            Self::InvalidCharacter(ch) => {
                write!(f, "Invalid tile '{ch}' (use letters, or '_' for a blank)")
            }
        }
    }
}

impl std::error::Error for TileError {}

/// The player's tiles
///
/// Tile order only matters for display: scoring and searching treat the rack
/// as a multiset, which [`Rack::shuffle`] preserves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rack {
    tiles: [Tile; RACK_SIZE],
}

impl Rack {
    #[must_use]
    pub const fn new(tiles: [Tile; RACK_SIZE]) -> Self {
        Self { tiles }
    }

    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &[Tile; RACK_SIZE] {
        &self.tiles
    }

    /// Number of blanks on the rack
    #[must_use]
    pub fn blank_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_blank()).count()
    }

    /// Randomly reorder the tiles in place (Fisher-Yates)
    pub fn shuffle<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        use rand::seq::SliceRandom;

        self.tiles.shuffle(rng);
    }

    /// Tiles sorted into a canonical order, for multiset comparisons
    #[must_use]
    pub fn sorted_tiles(&self) -> [Tile; RACK_SIZE] {
        let mut tiles = self.tiles;
        tiles.sort_by_key(|tile| tile.letter().unwrap_or(u8::MAX));
        tiles
    }
}

impl FromStr for Rack {
    type Err = TileError;

    /// Parse a rack such as `"abcdef_"`
    ///
    /// # Examples
    /// ```
    /// use tileset::core::{Rack, Tile};
    ///
    /// let rack: Rack = "quit  q".parse().unwrap();
    /// assert_eq!(rack.tiles()[0], Tile::Letter(b'q'));
    /// assert_eq!(rack.blank_count(), 2);
    ///
    /// assert!("abc".parse::<Rack>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let count = s.chars().count();
        if count != RACK_SIZE {
            return Err(TileError::BadLength(count));
        }

        let mut tiles = [Tile::Blank; RACK_SIZE];
        for (slot, ch) in tiles.iter_mut().zip(s.chars()) {
            *slot = Tile::from_char(ch).ok_or(TileError::InvalidCharacter(ch))?;
        }

        Ok(Self { tiles })
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in &self.tiles {
            write!(f, "{tile}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn tile_from_char() {
        assert_eq!(Tile::from_char('q'), Some(Tile::Letter(b'q')));
        assert_eq!(Tile::from_char('Q'), Some(Tile::Letter(b'q')));
        assert_eq!(Tile::from_char(' '), Some(Tile::Blank));
        assert_eq!(Tile::from_char('_'), Some(Tile::Blank));
        assert_eq!(Tile::from_char('?'), Some(Tile::Blank));
        assert_eq!(Tile::from_char('3'), None);
        assert_eq!(Tile::from_char('é'), None);
    }

    #[test]
    fn rack_parse_valid() {
        let rack: Rack = "abcdef ".parse().unwrap();
        assert_eq!(rack.tiles()[0], Tile::Letter(b'a'));
        assert_eq!(rack.tiles()[6], Tile::Blank);
        assert_eq!(rack.blank_count(), 1);
        assert_eq!(rack.to_string(), "abcdef_");
    }

    #[test]
    fn rack_parse_invalid() {
        assert_eq!("abcdef".parse::<Rack>(), Err(TileError::BadLength(6)));
        assert_eq!("abcdefgh".parse::<Rack>(), Err(TileError::BadLength(8)));
        assert_eq!(
            "abc1efg".parse::<Rack>(),
            Err(TileError::InvalidCharacter('1'))
        );
    }

    #[test]
    fn shuffle_preserves_multiset() {
        let original: Rack = "aab_zq_".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let mut rack = original;
            rack.shuffle(&mut rng);
            assert_eq!(rack.sorted_tiles(), original.sorted_tiles());
        }
    }

    #[test]
    fn repeated_shuffles_preserve_multiset() {
        let original: Rack = "quit  q".parse().unwrap();
        let mut rack = original;
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..200 {
            rack.shuffle(&mut rng);
        }
        assert_eq!(rack.sorted_tiles(), original.sorted_tiles());
    }
}
