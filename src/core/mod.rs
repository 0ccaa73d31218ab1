//! Core domain types for pseudo-word generation
//!
//! Sounds, word patterns, restriction tables and scoring vocabularies. All
//! types here are plain data with serde support and no I/O.

mod pattern;
mod restrictions;
mod score;
mod sound;
mod word;

pub use pattern::{Pattern, PatternError, Slot};
pub use restrictions::RestrictionTable;
pub use score::{CueScore, WordScore};
pub use sound::{SoundCategory, SoundError, SoundUnit};
pub use word::Word;
