//! Formatting utilities for terminal output

use crate::core::WordScore;
use crate::session::ScoreSummary;

/// One-character marker for a word score
#[must_use]
pub const fn score_marker(score: WordScore) -> char {
    match score {
        WordScore::Correct => '✓',
        WordScore::Incorrect => '✗',
        WordScore::Skipped => '»',
        WordScore::NotScored => '·',
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Progress bar for a score ratio
#[must_use]
pub fn summary_bar(summary: &ScoreSummary, width: usize) -> String {
    create_progress_bar(summary.ratio, 1.0, width)
}

/// Shorten `text` to at most `max_chars` characters, marking the cut with `…`
#[must_use]
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut short: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    short.push('…');
    short
}
