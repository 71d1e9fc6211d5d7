//! Tileset
//!
//! A tile-rack word game: draw seven letter tiles (blanks included), spell
//! dictionary words from them, and chase the best-scoring words, which are
//! found ahead of time by a trie-guided backtracking search.
//!
//! # Quick Start
//!
//! ```rust
//! use tileset::core::{Rack, score_word};
//! use tileset::dictionary::Dictionary;
//! use tileset::solver::BestWordFinder;
//!
//! let dictionary = Dictionary::from_words(["bed", "beg", "bead", "cab"]).unwrap();
//! let rack: Rack = "abcdef_".parse().unwrap();
//!
//! assert_eq!(score_word(&rack, "beg"), 4); // g is played with the blank
//!
//! let top = BestWordFinder::new(&dictionary).find(&rack);
//! // "bead" and "cab" both score 7; ties rank alphabetically
//! assert_eq!(top.best().map(|e| e.word.as_str()), Some("bead"));
//! ```

// Core domain types
pub mod core;

// Word storage
pub mod dictionary;

// Best-word search
pub mod solver;

// Game session
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod logging;
