//! Sound units drawn from a phonetic inventory
//!
//! A `SoundUnit` is a phonetic symbol (e.g. `ʃ`) together with the ordered
//! spellings that can represent it (e.g. `sh`) and the category it was
//! selected under.

use super::Slot;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// Phonetic category a sound was selected under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundCategory {
    Consonant,
    Vowel,
    Diphthong,
}

impl SoundCategory {
    /// All categories in display order
    pub const ALL: [Self; 3] = [Self::Consonant, Self::Vowel, Self::Diphthong];

    /// Whether a sound of this category may fill the given pattern slot
    ///
    /// Diphthongs fill vowel slots.
    #[inline]
    #[must_use]
    pub const fn fills(self, slot: Slot) -> bool {
        matches!(
            (self, slot),
            (Self::Consonant, Slot::Consonant) | (Self::Vowel | Self::Diphthong, Slot::Vowel)
        )
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Consonant => "consonant",
            Self::Vowel => "vowel",
            Self::Diphthong => "diphthong",
        }
    }
}

impl fmt::Display for SoundCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error type for malformed sounds
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SoundError {
    #[error("sound symbol must not be empty")]
    EmptySymbol,
    #[error("sound '{0}' has no spellings")]
    NoSpellings(String),
}

/// A phonetic symbol with its spelling variants
///
/// Two units are the same sound iff their symbols are equal; spellings and
/// category do not take part in equality or hashing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawSoundUnit")]
pub struct SoundUnit {
    #[serde(rename = "sound")]
    symbol: String,
    #[serde(rename = "letters")]
    spellings: Vec<String>,
    #[serde(rename = "type")]
    category: SoundCategory,
}

#[derive(Deserialize)]
struct RawSoundUnit {
    sound: String,
    letters: Vec<String>,
    #[serde(rename = "type")]
    category: SoundCategory,
}

impl TryFrom<RawSoundUnit> for SoundUnit {
    type Error = SoundError;

    fn try_from(raw: RawSoundUnit) -> Result<Self, Self::Error> {
        Self::new(raw.sound, raw.letters, raw.category)
    }
}

impl SoundUnit {
    /// Create a new sound unit
    ///
    /// # Errors
    /// Returns `SoundError` if the symbol is empty or no spelling is given.
    ///
    /// # Examples
    /// ```
    /// use pseudoword::core::{SoundCategory, SoundUnit};
    ///
    /// let sh = SoundUnit::new("ʃ", ["sh"], SoundCategory::Consonant).unwrap();
    /// assert_eq!(sh.symbol(), "ʃ");
    /// assert_eq!(sh.spelling(0), "sh");
    ///
    /// assert!(SoundUnit::new("ʃ", Vec::<String>::new(), SoundCategory::Consonant).is_err());
    /// ```
    pub fn new<I, S>(
        symbol: impl Into<String>,
        spellings: I,
        category: SoundCategory,
    ) -> Result<Self, SoundError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let symbol = symbol.into();
        if symbol.is_empty() {
            return Err(SoundError::EmptySymbol);
        }

        let spellings: Vec<String> = spellings.into_iter().map(Into::into).collect();
        if spellings.is_empty() {
            return Err(SoundError::NoSpellings(symbol));
        }

        Ok(Self {
            symbol,
            spellings,
            category,
        })
    }

    #[inline]
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    #[inline]
    #[must_use]
    pub fn spellings(&self) -> &[String] {
        &self.spellings
    }

    #[inline]
    #[must_use]
    pub const fn category(&self) -> SoundCategory {
        self.category
    }

    /// Number of spelling variants (always at least one)
    #[inline]
    #[must_use]
    pub fn variant_count(&self) -> usize {
        self.spellings.len()
    }

    /// Reduce a raw spelling index into the valid range by wrapping
    #[inline]
    #[must_use]
    pub fn wrap_spelling_index(&self, raw: usize) -> usize {
        raw % self.spellings.len()
    }

    /// Spelling variant at `index`, wrapping past the last variant
    #[must_use]
    pub fn spelling(&self, index: usize) -> &str {
        &self.spellings[self.wrap_spelling_index(index)]
    }

    /// The same sound re-tagged under another category
    #[must_use]
    pub fn with_category(mut self, category: SoundCategory) -> Self {
        self.category = category;
        self
    }
}

impl PartialEq for SoundUnit {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
    }
}

impl Eq for SoundUnit {}

impl Hash for SoundUnit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.symbol.hash(state);
    }
}

impl fmt::Display for SoundUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}
