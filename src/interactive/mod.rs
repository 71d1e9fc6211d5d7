//! Full-screen terminal interface

mod app;
mod rendering;

pub use app::{App, InputBuffer, Message, MessageStyle, run_tui};
