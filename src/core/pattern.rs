//! Consonant/vowel word patterns
//!
//! A pattern such as `CVC` describes the shape of a generated word: one slot
//! per sound, each slot either a consonant (`C`) or a vowel (`V`). Diphthongs
//! fill vowel slots.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A single position in a word pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    #[serde(rename = "C")]
    Consonant,
    #[serde(rename = "V")]
    Vowel,
}

impl Slot {
    /// Parse a slot from its letter (`C`/`c` or `V`/`v`)
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'C' | 'c' => Some(Self::Consonant),
            'V' | 'v' => Some(Self::Vowel),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Consonant => 'C',
            Self::Vowel => 'V',
        }
    }
}

/// Error type for pattern strings that cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("invalid pattern character '{ch}' at position {position} (expected C or V)")]
    InvalidSlot { ch: char, position: usize },
}

/// Ordered sequence of consonant/vowel slots
///
/// Serializes as an array of `"C"`/`"V"` strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pattern(Vec<Slot>);

impl Pattern {
    #[must_use]
    pub const fn new(slots: Vec<Slot>) -> Self {
        Self(slots)
    }

    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of slots of the given kind
    ///
    /// # Examples
    /// ```
    /// use pseudoword::core::{Pattern, Slot};
    ///
    /// let p: Pattern = "CVCC".parse().unwrap();
    /// assert_eq!(p.count(Slot::Consonant), 3);
    /// assert_eq!(p.count(Slot::Vowel), 1);
    /// ```
    #[must_use]
    pub fn count(&self, slot: Slot) -> usize {
        self.0.iter().filter(|&&s| s == slot).count()
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    /// Parse a pattern like `"CVC"`, `"cv-cv"` or `"C V C"`
    ///
    /// Whitespace and `-` separators are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .filter(|(_, ch)| !ch.is_whitespace() && *ch != '-')
            .map(|(position, ch)| Slot::from_char(ch).ok_or(PatternError::InvalidSlot { ch, position }))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl FromIterator<Slot> for Pattern {
    fn from_iter<T: IntoIterator<Item = Slot>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.0 {
            write!(f, "{}", slot.as_char())?;
        }
        Ok(())
    }
}
