//! Scoring vocabularies for word list entries

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Outcome recorded for a presented word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WordScore {
    Correct,
    Incorrect,
    Skipped,
    #[default]
    NotScored,
}

impl WordScore {
    pub const ALL: [Self; 4] = [Self::Correct, Self::Incorrect, Self::Skipped, Self::NotScored];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Correct => "Correct",
            Self::Incorrect => "Incorrect",
            Self::Skipped => "Skipped",
            Self::NotScored => "Not Scored",
        }
    }
}

impl FromStr for WordScore {
    type Err = String;

    /// Accepts `correct`, `incorrect`, `skipped`, `not-scored` and their
    /// single-letter shorthands `c`, `i`, `s`, `n`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "correct" | "c" => Ok(Self::Correct),
            "incorrect" | "i" => Ok(Self::Incorrect),
            "skipped" | "skip" | "s" => Ok(Self::Skipped),
            "not-scored" | "notscored" | "none" | "n" => Ok(Self::NotScored),
            _ => Err(format!("Invalid score: {s}")),
        }
    }
}

impl fmt::Display for WordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Level of cueing the client needed to produce the word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CueScore {
    Independent,
    Minimal,
    Moderate,
    Maximum,
    #[default]
    NotScored,
}

impl CueScore {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Independent => "Independent",
            Self::Minimal => "Minimal",
            Self::Moderate => "Moderate",
            Self::Maximum => "Maximum",
            Self::NotScored => "Not Scored",
        }
    }
}

impl FromStr for CueScore {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "independent" | "ind" => Ok(Self::Independent),
            "minimal" | "min" => Ok(Self::Minimal),
            "moderate" | "mod" => Ok(Self::Moderate),
            "maximum" | "max" => Ok(Self::Maximum),
            "not-scored" | "notscored" | "none" => Ok(Self::NotScored),
            _ => Err(format!("Invalid cue score: {s}")),
        }
    }
}

impl fmt::Display for CueScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
