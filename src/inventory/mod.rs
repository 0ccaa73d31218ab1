//! Sound inventories
//!
//! An inventory catalogues the sounds of a language by category and
//! sub-category (articulation manner for consonants, tongue position for
//! vowels) together with the adjacency restriction table. Inventories are
//! read-only once loaded; sounds get their category attached when they are
//! pulled out of a group.

mod embedded;
pub mod loader;

pub use embedded::EN_US;

use crate::core::{RestrictionTable, SoundCategory, SoundError, SoundUnit};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for inventory loading and lookup
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("failed to read inventory {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid inventory: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown sound '{0}'")]
    UnknownSound(String),
}

/// A symbol and its spellings, before a category is attached
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRepresentation", into = "RawRepresentation")]
pub struct SoundRepresentation {
    unit: SoundUnit,
}

#[derive(Serialize, Deserialize)]
struct RawRepresentation {
    sound: String,
    letters: Vec<String>,
}

impl TryFrom<RawRepresentation> for SoundRepresentation {
    type Error = SoundError;

    fn try_from(raw: RawRepresentation) -> Result<Self, Self::Error> {
        SoundUnit::new(raw.sound, raw.letters, SoundCategory::Consonant).map(|unit| Self { unit })
    }
}

impl From<SoundRepresentation> for RawRepresentation {
    fn from(rep: SoundRepresentation) -> Self {
        Self {
            sound: rep.unit.symbol().to_string(),
            letters: rep.unit.spellings().to_vec(),
        }
    }
}

impl SoundRepresentation {
    #[must_use]
    pub fn symbol(&self) -> &str {
        self.unit.symbol()
    }

    #[must_use]
    pub fn spellings(&self) -> &[String] {
        self.unit.spellings()
    }

    /// The sound tagged with `category`
    #[must_use]
    pub fn tagged(&self, category: SoundCategory) -> SoundUnit {
        self.unit.clone().with_category(category)
    }
}

/// Consonants grouped by manner of articulation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Consonants {
    pub plosive: Vec<SoundRepresentation>,
    pub nasal: Vec<SoundRepresentation>,
    pub fricative: Vec<SoundRepresentation>,
    pub tap_flap: Vec<SoundRepresentation>,
    pub affricate: Vec<SoundRepresentation>,
    pub approximant: Vec<SoundRepresentation>,
}

impl Consonants {
    #[must_use]
    pub fn groups(&self) -> [(&'static str, &[SoundRepresentation]); 6] {
        [
            ("plosive", self.plosive.as_slice()),
            ("nasal", self.nasal.as_slice()),
            ("fricative", self.fricative.as_slice()),
            ("tap/flap", self.tap_flap.as_slice()),
            ("affricate", self.affricate.as_slice()),
            ("approximant", self.approximant.as_slice()),
        ]
    }
}

/// Vowels grouped by tongue position
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Vowels {
    pub front: Vec<SoundRepresentation>,
    pub central: Vec<SoundRepresentation>,
    pub back: Vec<SoundRepresentation>,
}

impl Vowels {
    #[must_use]
    pub fn groups(&self) -> [(&'static str, &[SoundRepresentation]); 3] {
        [
            ("front", self.front.as_slice()),
            ("central", self.central.as_slice()),
            ("back", self.back.as_slice()),
        ]
    }
}

/// A named group of category-tagged sounds, for listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundGroup {
    pub category: SoundCategory,
    pub name: &'static str,
    pub sounds: Vec<SoundUnit>,
}

/// A language's sounds and its restriction table
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundInventory {
    pub consonants: Consonants,
    pub vowels: Vowels,
    pub diphthongs: Vec<SoundRepresentation>,
    pub restrictions: RestrictionTable,
}

impl SoundInventory {
    /// The built-in American English inventory
    ///
    /// # Errors
    /// Returns `InventoryError::Json` only if the embedded data is malformed.
    pub fn en_us() -> Result<Self, InventoryError> {
        loader::from_json_str(EN_US)
    }

    #[must_use]
    pub const fn restrictions(&self) -> &RestrictionTable {
        &self.restrictions
    }

    /// Every sound grouped by category and sub-category, in inventory order
    #[must_use]
    pub fn groups(&self) -> Vec<SoundGroup> {
        let tag = |category: SoundCategory, name: &'static str, reps: &[SoundRepresentation]| SoundGroup {
            category,
            name,
            sounds: reps.iter().map(|r| r.tagged(category)).collect(),
        };

        let mut groups: Vec<SoundGroup> = self
            .consonants
            .groups()
            .into_iter()
            .map(|(name, reps)| tag(SoundCategory::Consonant, name, reps))
            .collect();
        groups.extend(
            self.vowels
                .groups()
                .into_iter()
                .map(|(name, reps)| tag(SoundCategory::Vowel, name, reps)),
        );
        groups.push(tag(SoundCategory::Diphthong, "diphthong", &self.diphthongs));
        groups
    }

    /// All sounds of one category, sub-categories flattened in order
    #[must_use]
    pub fn all_of(&self, category: SoundCategory) -> Vec<SoundUnit> {
        self.groups()
            .into_iter()
            .filter(|g| g.category == category)
            .flat_map(|g| g.sounds)
            .collect()
    }

    #[must_use]
    pub fn all_consonants(&self) -> Vec<SoundUnit> {
        self.all_of(SoundCategory::Consonant)
    }

    #[must_use]
    pub fn all_vowels(&self) -> Vec<SoundUnit> {
        self.all_of(SoundCategory::Vowel)
    }

    #[must_use]
    pub fn all_diphthongs(&self) -> Vec<SoundUnit> {
        self.all_of(SoundCategory::Diphthong)
    }

    /// Consonants, then vowels, then diphthongs
    #[must_use]
    pub fn all_sounds(&self) -> Vec<SoundUnit> {
        self.groups().into_iter().flat_map(|g| g.sounds).collect()
    }

    /// Sounds of `category` whose symbol is not among `selected`
    #[must_use]
    pub fn remaining(&self, category: SoundCategory, selected: &[SoundUnit]) -> Vec<SoundUnit> {
        self.all_of(category)
            .into_iter()
            .filter(|sound| !selected.contains(sound))
            .collect()
    }

    /// Look a sound up by symbol
    ///
    /// Symbols are unique across the whole inventory; the first match in
    /// consonant, vowel, diphthong order wins.
    #[must_use]
    pub fn find(&self, symbol: &str) -> Option<SoundUnit> {
        self.groups()
            .into_iter()
            .flat_map(|g| g.sounds)
            .find(|s| s.symbol() == symbol)
    }

    /// Look up several symbols, failing on the first unknown one
    ///
    /// # Errors
    /// Returns `InventoryError::UnknownSound` naming the first missing symbol.
    pub fn resolve<S: AsRef<str>>(&self, symbols: &[S]) -> Result<Vec<SoundUnit>, InventoryError> {
        symbols
            .iter()
            .map(|symbol| {
                let symbol = symbol.as_ref();
                self.find(symbol)
                    .ok_or_else(|| InventoryError::UnknownSound(symbol.to_string()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_inventory_parses() {
        let inventory = SoundInventory::en_us().unwrap();
        assert_eq!(inventory.all_consonants().len(), 25);
        assert_eq!(inventory.all_vowels().len(), 11);
        assert_eq!(inventory.all_diphthongs().len(), 5);
        assert!(!inventory.restrictions().is_empty());
    }

    #[test]
    fn embedded_symbols_are_unique() {
        let inventory = SoundInventory::en_us().unwrap();
        let all = inventory.all_sounds();
        let unique: std::collections::HashSet<&str> = all.iter().map(SoundUnit::symbol).collect();
        assert_eq!(unique.len(), all.len());
    }

    #[test]
    fn sounds_are_tagged_by_group() {
        let inventory = SoundInventory::en_us().unwrap();
        assert!(
            inventory
                .all_consonants()
                .iter()
                .all(|s| s.category() == SoundCategory::Consonant)
        );
        assert_eq!(
            inventory.find("aɪ").map(|s| s.category()),
            Some(SoundCategory::Diphthong)
        );
        assert_eq!(
            inventory.find("æ").map(|s| s.category()),
            Some(SoundCategory::Vowel)
        );
    }

    #[test]
    fn remaining_excludes_selected() {
        let inventory = SoundInventory::en_us().unwrap();
        let selected = inventory.resolve(&["p", "t", "i"]).unwrap();

        let remaining = inventory.remaining(SoundCategory::Consonant, &selected);
        assert_eq!(remaining.len(), inventory.all_consonants().len() - 2);
        assert!(remaining.iter().all(|s| s.symbol() != "p" && s.symbol() != "t"));

        let vowels = inventory.remaining(SoundCategory::Vowel, &selected);
        assert_eq!(vowels.len(), inventory.all_vowels().len() - 1);
    }

    #[test]
    fn resolve_reports_unknown_symbol() {
        let inventory = SoundInventory::en_us().unwrap();
        let err = inventory.resolve(&["p", "q"]).unwrap_err();
        assert!(matches!(err, InventoryError::UnknownSound(ref s) if s == "q"));
    }

    #[test]
    fn groups_keep_inventory_order() {
        let inventory = SoundInventory::en_us().unwrap();
        let groups = inventory.groups();
        assert_eq!(groups[0].name, "plosive");
        assert_eq!(groups[0].sounds[0].symbol(), "p");
        assert_eq!(groups.last().map(|g| g.name), Some("diphthong"));
    }

    #[test]
    fn representation_round_trips() {
        let json = r#"{"sound":"ʃ","letters":["sh"]}"#;
        let rep: SoundRepresentation = serde_json::from_str(json).unwrap();
        assert_eq!(rep.symbol(), "ʃ");
        assert_eq!(serde_json::to_string(&rep).unwrap(), json);
    }
}
