//! Game orchestration
//!
//! Ties the rack, dictionary, scoring and best-word search together into a
//! playable session.

mod session;

pub use session::{BestWord, Session};
