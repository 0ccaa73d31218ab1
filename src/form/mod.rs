//! Generation settings
//!
//! The user's selected sounds, word pattern and batch size. Projects to a
//! `GenerationRequest` whose vowel pool merges vowels and diphthongs.

use crate::core::{Pattern, SoundCategory, SoundUnit};
use crate::generator::GenerationRequest;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormState {
    pub sounds: Vec<SoundUnit>,
    pub pattern: Pattern,
    pub quantity: usize,
}

impl FormState {
    #[must_use]
    pub fn new(sounds: Vec<SoundUnit>, pattern: Pattern, quantity: usize) -> Self {
        Self {
            sounds,
            pattern,
            quantity,
        }
    }

    /// Replace every field at once
    pub fn initialize(&mut self, form: Self) {
        *self = form;
    }

    /// Replace the whole selection
    pub fn set_sounds(&mut self, sounds: Vec<SoundUnit>) {
        self.sounds = sounds;
    }

    /// Select a sound; returns false if a sound with that symbol is already selected
    pub fn add_sound(&mut self, sound: SoundUnit) -> bool {
        if self.is_selected(sound.symbol()) {
            return false;
        }
        self.sounds.push(sound);
        true
    }

    /// Deselect by symbol; returns false if it was not selected
    pub fn remove_sound(&mut self, symbol: &str) -> bool {
        let before = self.sounds.len();
        self.sounds.retain(|s| s.symbol() != symbol);
        self.sounds.len() != before
    }

    pub fn set_pattern(&mut self, pattern: Pattern) {
        self.pattern = pattern;
    }

    pub fn set_quantity(&mut self, quantity: usize) {
        self.quantity = quantity;
    }

    #[must_use]
    pub fn is_selected(&self, symbol: &str) -> bool {
        self.sounds.iter().any(|s| s.symbol() == symbol)
    }

    /// Selected sounds of one category, in selection order
    pub fn of_category(&self, category: SoundCategory) -> impl Iterator<Item = &SoundUnit> {
        self.sounds.iter().filter(move |s| s.category() == category)
    }

    #[must_use]
    pub fn consonants(&self) -> Vec<SoundUnit> {
        self.of_category(SoundCategory::Consonant).cloned().collect()
    }

    #[must_use]
    pub fn vowels(&self) -> Vec<SoundUnit> {
        self.of_category(SoundCategory::Vowel).cloned().collect()
    }

    #[must_use]
    pub fn diphthongs(&self) -> Vec<SoundUnit> {
        self.of_category(SoundCategory::Diphthong).cloned().collect()
    }

    /// Snapshot of the form as generator input
    ///
    /// # Examples
    /// ```
    /// use pseudoword::core::{SoundCategory, SoundUnit};
    /// use pseudoword::form::FormState;
    ///
    /// let mut form = FormState::default();
    /// form.add_sound(SoundUnit::new("p", ["p"], SoundCategory::Consonant).unwrap());
    /// form.add_sound(SoundUnit::new("æ", ["a"], SoundCategory::Vowel).unwrap());
    /// form.add_sound(SoundUnit::new("aɪ", ["igh"], SoundCategory::Diphthong).unwrap());
    /// form.set_pattern("CV".parse().unwrap());
    /// form.set_quantity(4);
    ///
    /// let request = form.generation_request();
    /// assert_eq!(request.consonant_pool.len(), 1);
    /// assert_eq!(request.vowel_pool.len(), 2);
    /// ```
    #[must_use]
    pub fn generation_request(&self) -> GenerationRequest {
        let mut vowel_pool = self.vowels();
        vowel_pool.extend(self.diphthongs());

        GenerationRequest {
            pattern: self.pattern.clone(),
            quantity: self.quantity,
            consonant_pool: self.consonants(),
            vowel_pool,
        }
    }
}
