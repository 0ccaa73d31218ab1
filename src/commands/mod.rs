//! Command implementations
//!
//! Each command works on explicitly passed state and returns a result value
//! for the output layer to print.

pub mod form;
pub mod generate;
pub mod stats;
pub mod words;

pub use form::{
    SelectionChange, SoundListing, SoundsOverview, deselect_sounds, list_sounds, replace_sounds,
    select_sounds,
};
pub use generate::{GenerateConfig, GenerateResult, run_generate};
pub use stats::{StatsResult, session_stats};
pub use words::{EntryUpdate, add_word, apply_update};
