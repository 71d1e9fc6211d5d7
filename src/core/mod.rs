//! Core domain types for the tile game
//!
//! Tiles, racks, the letter bag, seeds and scoring. Everything here is pure:
//! randomness is always supplied by the caller.

mod pool;
mod scoring;
mod seed;
mod tile;

pub use pool::{LETTER_POOL, POOL_SIZE, draw_rack, pool_tile};
pub use scoring::{can_play, find_blanks, score_letter, score_tile, score_word};
pub use seed::{Seed, SeedError, decode_seed};
pub use tile::{RACK_SIZE, Rack, Tile, TileError};
