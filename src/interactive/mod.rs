//! Interactive review TUI
//!
//! Walks through the word list one entry at a time for scoring, cueing,
//! spelling selection and notes.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, run_tui};
