//! Word list session
//!
//! Holds the accepted batch of generated words with per-word scores, cueing
//! levels, notes and spelling choices, plus derived metrics.

mod entry;
mod metrics;
mod state;

pub use entry::WordListEntry;
pub use metrics::{ScoreCounts, ScoreSummary, accuracy, completion, count_by_score};
pub use state::{SessionError, SessionState};
