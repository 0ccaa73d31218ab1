//! Generated word representation
//!
//! A `Word` is an ordered sequence of sound units. Its identity for
//! deduplication is the concatenation of its symbols.

use super::{Pattern, SoundUnit};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A pseudo-word made of sound units
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Word {
    sounds: Vec<SoundUnit>,
}

impl Word {
    #[must_use]
    pub const fn new(sounds: Vec<SoundUnit>) -> Self {
        Self { sounds }
    }

    #[inline]
    #[must_use]
    pub fn sounds(&self) -> &[SoundUnit] {
        &self.sounds
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.sounds.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sounds.is_empty()
    }

    /// Concatenated symbols, e.g. `"pæt"`
    ///
    /// Two words with the same key are duplicates.
    ///
    /// # Examples
    /// ```
    /// use pseudoword::core::{SoundCategory, SoundUnit, Word};
    ///
    /// let sh = SoundUnit::new("ʃ", ["sh"], SoundCategory::Consonant).unwrap();
    /// let i = SoundUnit::new("i", ["ee", "ea"], SoundCategory::Vowel).unwrap();
    /// let word = Word::new(vec![sh, i]);
    /// assert_eq!(word.key(), "ʃi");
    /// ```
    #[must_use]
    pub fn key(&self) -> String {
        self.sounds.iter().map(SoundUnit::symbol).collect()
    }

    /// Whether the word has the shape described by `pattern`
    #[must_use]
    pub fn matches(&self, pattern: &Pattern) -> bool {
        self.sounds.len() == pattern.len()
            && self
                .sounds
                .iter()
                .zip(pattern.slots())
                .all(|(sound, &slot)| sound.category().fills(slot))
    }

    #[must_use]
    pub fn into_sounds(self) -> Vec<SoundUnit> {
        self.sounds
    }
}

impl From<Vec<SoundUnit>> for Word {
    fn from(sounds: Vec<SoundUnit>) -> Self {
        Self::new(sounds)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SoundCategory;

    fn sound(symbol: &str, category: SoundCategory) -> SoundUnit {
        SoundUnit::new(symbol, [symbol], category).unwrap()
    }

    fn pat() -> Word {
        Word::new(vec![
            sound("p", SoundCategory::Consonant),
            sound("æ", SoundCategory::Vowel),
            sound("t", SoundCategory::Consonant),
        ])
    }

    #[test]
    fn word_key_concatenates_symbols() {
        assert_eq!(pat().key(), "pæt");
        assert_eq!(Word::default().key(), "");
    }

    #[test]
    fn word_matches_pattern() {
        let cvc: Pattern = "CVC".parse().unwrap();
        let cvv: Pattern = "CVV".parse().unwrap();
        let cv: Pattern = "CV".parse().unwrap();

        assert!(pat().matches(&cvc));
        assert!(!pat().matches(&cvv));
        assert!(!pat().matches(&cv));
    }

    #[test]
    fn diphthong_matches_vowel_slot() {
        let word = Word::new(vec![
            sound("b", SoundCategory::Consonant),
            sound("aɪ", SoundCategory::Diphthong),
        ]);
        assert!(word.matches(&"CV".parse().unwrap()));
    }

    #[test]
    fn word_display() {
        assert_eq!(format!("{}", pat()), "/pæt/");
    }

    #[test]
    fn word_equality_by_symbols() {
        let other = Word::new(vec![
            SoundUnit::new("p", ["pp"], SoundCategory::Consonant).unwrap(),
            sound("æ", SoundCategory::Vowel),
            sound("t", SoundCategory::Consonant),
        ]);
        assert_eq!(pat(), other);
    }
}
