//! Derived session metrics
//!
//! Pure projections of a `SessionState`: counts per score, accuracy over
//! attempted words, and completion over the whole list.

use super::SessionState;
use crate::core::WordScore;
use std::fmt;

/// Number of entries per score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreCounts {
    pub correct: usize,
    pub incorrect: usize,
    pub skipped: usize,
    pub not_scored: usize,
}

impl ScoreCounts {
    #[must_use]
    pub fn of(state: &SessionState) -> Self {
        let mut counts = Self::default();
        for entry in state.entries() {
            match entry.score {
                WordScore::Correct => counts.correct += 1,
                WordScore::Incorrect => counts.incorrect += 1,
                WordScore::Skipped => counts.skipped += 1,
                WordScore::NotScored => counts.not_scored += 1,
            }
        }
        counts
    }

    #[must_use]
    pub const fn get(&self, score: WordScore) -> usize {
        match score {
            WordScore::Correct => self.correct,
            WordScore::Incorrect => self.incorrect,
            WordScore::Skipped => self.skipped,
            WordScore::NotScored => self.not_scored,
        }
    }

    /// Correct plus incorrect
    #[must_use]
    pub const fn attempted(&self) -> usize {
        self.correct + self.incorrect
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.correct + self.incorrect + self.skipped + self.not_scored
    }
}

/// A ratio with its fraction parts, rounded to two decimals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreSummary {
    pub ratio: f64,
    pub numerator: usize,
    pub denominator: usize,
}

impl ScoreSummary {
    /// `numerator / denominator` rounded to 2 decimals, or 0 when the
    /// denominator is 0
    #[must_use]
    pub fn new(numerator: usize, denominator: usize) -> Self {
        let ratio = if denominator == 0 {
            0.0
        } else {
            round2(numerator as f64 / denominator as f64)
        };
        Self {
            ratio,
            numerator,
            denominator,
        }
    }

    /// Fraction text such as `"3/4"`
    #[must_use]
    pub fn fraction(&self) -> String {
        format!("{}/{}", self.numerator, self.denominator)
    }

    /// Whole percentage, e.g. 75 for a ratio of 0.75
    #[must_use]
    pub fn percent(&self) -> u16 {
        (self.ratio * 100.0).round() as u16
    }
}

impl fmt::Display for ScoreSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}% ({})", self.percent(), self.fraction())
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Number of entries with the given score
#[must_use]
pub fn count_by_score(state: &SessionState, score: WordScore) -> usize {
    state.entries().iter().filter(|e| e.score == score).count()
}

/// Correct over attempted (correct + incorrect)
///
/// # Examples
/// ```
/// use pseudoword::session::{SessionState, accuracy};
///
/// assert_eq!(accuracy(&SessionState::default()).ratio, 0.0);
/// ```
#[must_use]
pub fn accuracy(state: &SessionState) -> ScoreSummary {
    let counts = ScoreCounts::of(state);
    ScoreSummary::new(counts.correct, counts.attempted())
}

/// Attempted over all entries
#[must_use]
pub fn completion(state: &SessionState) -> ScoreSummary {
    let counts = ScoreCounts::of(state);
    ScoreSummary::new(counts.attempted(), state.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SoundCategory, SoundUnit, Word};

    fn session(scores: &[WordScore]) -> SessionState {
        let mut state = SessionState::new();
        let p = SoundUnit::new("p", ["p"], SoundCategory::Consonant).unwrap();
        state.initialize_entries(scores.iter().map(|_| Word::new(vec![p.clone()])));
        for (i, &score) in scores.iter().enumerate() {
            state.set_score(i, score).unwrap();
        }
        state
    }

    #[test]
    fn empty_session_metrics_are_zero() {
        let state = SessionState::new();
        assert_eq!(accuracy(&state).ratio, 0.0);
        assert_eq!(completion(&state).ratio, 0.0);
        assert_eq!(ScoreCounts::of(&state), ScoreCounts::default());
    }

    #[test]
    fn unscored_session_metrics_are_zero() {
        let state = session(&[WordScore::NotScored, WordScore::Skipped]);
        assert_eq!(accuracy(&state).ratio, 0.0);
        assert_eq!(completion(&state).ratio, 0.0);
        assert_eq!(accuracy(&state).fraction(), "0/0");
        assert_eq!(completion(&state).fraction(), "0/2");
    }

    #[test]
    fn accuracy_and_completion_rounded() {
        use WordScore::{Correct, Incorrect, NotScored, Skipped};
        let state = session(&[Correct, Correct, Correct, Incorrect, Skipped, NotScored]);

        let acc = accuracy(&state);
        assert!((acc.ratio - 0.75).abs() < f64::EPSILON);
        assert_eq!(acc.fraction(), "3/4");
        assert_eq!(acc.percent(), 75);

        let comp = completion(&state);
        assert!((comp.ratio - 0.67).abs() < f64::EPSILON);
        assert_eq!(comp.fraction(), "4/6");
        assert_eq!(comp.to_string(), "67% (4/6)");
    }

    #[test]
    fn counts_by_score() {
        use WordScore::{Correct, Incorrect, NotScored, Skipped};
        let state = session(&[Correct, Skipped, Skipped, NotScored, Incorrect]);
        let counts = ScoreCounts::of(&state);

        assert_eq!(counts.correct, 1);
        assert_eq!(counts.incorrect, 1);
        assert_eq!(counts.skipped, 2);
        assert_eq!(counts.not_scored, 1);
        assert_eq!(counts.attempted(), 2);
        assert_eq!(counts.total(), state.len());

        for score in WordScore::ALL {
            assert_eq!(counts.get(score), count_by_score(&state, score));
        }
    }
}
