//! Rack seeds
//!
//! A seed is seven distinct bag positions (each `0..100`), written as 14 hex
//! digits, one byte per tile. A `0x` prefix with a `00` padding byte
//! (16 digits) is also accepted.
//!
//! Decoding goes through the same bag table as random draws, so a seed always
//! reproduces exactly the rack it was taken from.

use super::pool::{LETTER_POOL, POOL_SIZE, pool_tile};
use super::tile::{RACK_SIZE, Rack, Tile};
use std::fmt;
use std::str::FromStr;

/// Error type for invalid seeds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedError {
    /// Not 14 hex digits, nor `0x` plus 16 hex digits
    BadLength(usize),
    /// Contains a character that is not a hex digit
    BadHexDigits,
    /// A byte does not name a bag position
    OutOfRange { position: usize, value: u8 },
    /// Two tiles name the same bag position
    RepeatedIndex { position: usize, value: u8 },
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadLength(len) => write!(
                f,
                "Seed must be 14 hex digits (or 0x followed by 16), got {len} characters"
            ),
            Self::BadHexDigits => write!(f, "Seed contains non-hexadecimal characters"),
            Self::OutOfRange { position, value } => write!(
                f,
                "Seed byte {position} is {value}, must be below {POOL_SIZE}"
            ),
            Self::RepeatedIndex { position, value } => {
                write!(f, "Seed byte {position} repeats bag position {value}")
            }
        }
    }
}

impl std::error::Error for SeedError {}

/// Seven distinct bag positions that reproduce a rack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seed([u8; RACK_SIZE]);

impl Seed {
    /// Build a seed from bag positions, validating range and uniqueness
    ///
    /// # Errors
    /// Returns `OutOfRange` or `RepeatedIndex` for the first offending byte.
    pub fn from_indices(indices: [u8; RACK_SIZE]) -> Result<Self, SeedError> {
        for (position, &value) in indices.iter().enumerate() {
            if usize::from(value) >= POOL_SIZE {
                return Err(SeedError::OutOfRange { position, value });
            }
            if indices[..position].contains(&value) {
                return Err(SeedError::RepeatedIndex { position, value });
            }
        }

        Ok(Self(indices))
    }

    /// Draw seven distinct bag positions
    ///
    /// Positions that were already drawn are re-sampled.
    pub fn random<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        let mut indices = [0u8; RACK_SIZE];

        for i in 0..RACK_SIZE {
            indices[i] = loop {
                let candidate = rng.random_range(0..POOL_SIZE as u8);
                if !indices[..i].contains(&candidate) {
                    break candidate;
                }
            };
        }

        Self(indices)
    }

    /// Find a seed that decodes to `rack`
    ///
    /// Each tile takes the first bag position holding it that is not already
    /// taken. Returns `None` if the bag cannot supply the rack.
    #[must_use]
    pub fn from_rack(rack: &Rack) -> Option<Self> {
        let mut taken = [false; POOL_SIZE];
        let mut indices = [0u8; RACK_SIZE];

        for (slot, &tile) in indices.iter_mut().zip(rack.tiles()) {
            let index = LETTER_POOL
                .iter()
                .enumerate()
                .position(|(i, &t)| t == tile && !taken[i])?;
            taken[index] = true;
            *slot = index as u8;
        }

        Some(Self(indices))
    }

    #[inline]
    #[must_use]
    pub const fn indices(&self) -> &[u8; RACK_SIZE] {
        &self.0
    }

    /// Decode to the rack this seed describes
    #[must_use]
    pub fn rack(&self) -> Rack {
        let mut tiles = [Tile::Blank; RACK_SIZE];
        for (tile, &index) in tiles.iter_mut().zip(&self.0) {
            *tile = pool_tile(index);
        }
        Rack::new(tiles)
    }
}

/// Decode seed text into the rack it describes
///
/// # Errors
/// Returns a `SeedError` describing the first problem found: length, then hex
/// digits, then each byte from left to right.
///
/// # Examples
/// ```
/// use tileset::core::{decode_seed, SeedError};
///
/// let rack = decode_seed("00091122243563").unwrap();
/// assert_eq!(rack.to_string(), "abehin_");
///
/// assert_eq!(decode_seed("0x00091122243563"), Ok(rack));
/// assert_eq!(decode_seed("0x0000091122243563"), Ok(rack));
/// assert_eq!(decode_seed("abc"), Err(SeedError::BadLength(3)));
/// ```
pub fn decode_seed(text: &str) -> Result<Rack, SeedError> {
    text.parse::<Seed>().map(|seed| seed.rack())
}

fn parse_hex_bytes(digits: &str) -> Result<Vec<u8>, SeedError> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(SeedError::BadHexDigits);
    }

    digits
        .as_bytes()
        .chunks(2)
        .map(|pair| {
            std::str::from_utf8(pair)
                .ok()
                .and_then(|s| u8::from_str_radix(s, 16).ok())
                .ok_or(SeedError::BadHexDigits)
        })
        .collect()
}

impl FromStr for Seed {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = match (s.len(), s.strip_prefix("0x")) {
            (14, _) => parse_hex_bytes(s)?,
            (16, Some(digits)) => parse_hex_bytes(digits)?,
            (18, Some(digits)) => {
                let bytes = parse_hex_bytes(digits)?;
                // A non-zero padding byte would make this an eight-byte seed
                if bytes[0] != 0 {
                    return Err(SeedError::BadLength(s.len()));
                }
                bytes[1..].to_vec()
            }
            (len, _) => return Err(SeedError::BadLength(len)),
        };

        let mut indices = [0u8; RACK_SIZE];
        indices.copy_from_slice(&bytes);
        Self::from_indices(indices)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
