//! Session statistics command

use crate::session::{ScoreCounts, ScoreSummary, SessionState, accuracy, completion};

/// Score totals and derived ratios for a session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsResult {
    pub counts: ScoreCounts,
    pub accuracy: ScoreSummary,
    pub completion: ScoreSummary,
}

#[must_use]
pub fn session_stats(words: &SessionState) -> StatsResult {
    StatsResult {
        counts: ScoreCounts::of(words),
        accuracy: accuracy(words),
        completion: completion(words),
    }
}
